use std::time::Duration;
use url::Url;

use crate::error::ImageDownloadError;

static PAGE_BASE: &str = "http://imgur.com/";
static IMAGE_BASE: &str = "https://imgur.com/";
static USER_AGENT: &str = concat!("imgur-dl/", env!("CARGO_PKG_VERSION"));
const PAGE_TIMEOUT: Duration = Duration::from_secs(20);
const IMAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// Endpoints and timeouts used by [`AlbumClient`](crate::client::AlbumClient).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Host serving the album layout pages.
    pub page_base: Url,
    /// Base every image reference is resolved against. Its scheme is what
    /// scheme-relative references (`//i.imgur.com/..`) end up with.
    pub image_base: Url,
    pub page_timeout: Duration,
    pub image_timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            // constants, safe to unwrap
            page_base: Url::parse(PAGE_BASE).unwrap(),
            image_base: Url::parse(IMAGE_BASE).unwrap(),
            page_timeout: PAGE_TIMEOUT,
            image_timeout: IMAGE_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl Settings {
    /// Points both pages and images at `base`.
    pub fn with_base(base: Url) -> Self {
        Settings {
            page_base: base.clone(),
            image_base: base,
            ..Settings::default()
        }
    }

    /// The blog layout renders every image of an album in one document.
    pub fn layout_url(&self, album_id: &str) -> String {
        format!(
            "{}/a/{}/layout/blog",
            self.page_base.as_str().trim_end_matches('/'),
            album_id
        )
    }

    pub fn image_url(&self, reference: &str) -> Result<Url, ImageDownloadError> {
        self.image_base
            .join(reference)
            .map_err(|source| ImageDownloadError::InvalidUrl {
                reference: reference.to_owned(),
                source,
            })
    }
}
