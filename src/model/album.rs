use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::client::AlbumClient;
use crate::error::{AlbumError, Result};
use crate::extract::{extract, AlbumPage};

static ALBUM_URL: &str =
    r"^(https?)://(?:www\.)?(?:m\.)?([A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)/(a|gallery)/([A-Za-z0-9]+)(#[0-9]+)?";

fn album_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // constant pattern, safe to unwrap
    RE.get_or_init(|| Regex::new(ALBUM_URL).unwrap())
}

/// A url that has the shape of an album link. Holds no fetched data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumUrl {
    url: String,
    album_id: String,
}

impl AlbumUrl {
    pub fn parse(url: &str) -> Result<AlbumUrl> {
        let captures = album_url_regex()
            .captures(url)
            .ok_or_else(|| AlbumError::InvalidUrl { url: url.to_owned() })?;

        Ok(AlbumUrl {
            url: url.to_owned(),
            album_id: captures[4].to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn album_id(&self) -> &str {
        &self.album_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlbumOptions {
    /// Folder for the images; wins over `use_name`.
    pub destination: Option<PathBuf>,
    /// Name the default folder after the album title instead of its id.
    pub use_name: bool,
}

/// A fully loaded album. Read-only once built.
#[derive(Debug, Clone)]
pub struct Album {
    url: AlbumUrl,
    page: AlbumPage,
    options: AlbumOptions,
}

impl Album {
    /// Validates the url, fetches the blog layout and extracts the album from
    /// it. The first failing step aborts the load.
    pub async fn load(client: &AlbumClient, url: &str, options: AlbumOptions) -> Result<Album> {
        let url = AlbumUrl::parse(url)?;
        let html = client.fetch_layout(url.album_id()).await?;
        let page = extract(&html)?;

        debug!(
            album_id = url.album_id(),
            images = page.image_refs.len(),
            "album loaded"
        );
        Ok(Album::from_page(url, page, options))
    }

    pub fn from_page(url: AlbumUrl, page: AlbumPage, options: AlbumOptions) -> Album {
        Album { url, page, options }
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn album_id(&self) -> &str {
        self.url.album_id()
    }

    pub fn title(&self) -> &str {
        &self.page.title
    }

    pub fn uploader(&self) -> &str {
        &self.page.uploader
    }

    pub fn image_count(&self) -> usize {
        self.page.image_refs.len()
    }

    pub fn image_refs(&self) -> &[String] {
        &self.page.image_refs
    }

    pub fn options(&self) -> &AlbumOptions {
        &self.options
    }

    /// Folder the images go to, as an absolute path. `explicit` beats the
    /// destination given at load time, which beats the title/id default.
    pub fn target_folder(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let folder = match explicit.or(self.options.destination.as_deref()) {
            Some(dest) => dest.to_path_buf(),
            None => {
                let name = if self.options.use_name {
                    folder_name(self.title())
                } else {
                    None
                };
                PathBuf::from(name.unwrap_or_else(|| self.album_id().to_owned()))
            }
        };

        if folder.is_absolute() {
            Ok(folder)
        } else {
            Ok(env::current_dir()?.join(folder))
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(id={}, title={}, uploader={}, images={})",
            self.album_id(),
            self.title().trim(),
            self.uploader(),
            self.image_count()
        )
    }
}

/// Titles are free text; keep them to a single path component. `None` when
/// nothing usable is left, i.e. the name would point at `.` or `..`.
fn folder_name(title: &str) -> Option<String> {
    let name: String = title
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    match name.as_str() {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
