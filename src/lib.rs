//! Downloads public imgur albums.
//!
//! ```no_run
//! use imgur_dl::{download_images, Album, AlbumClient, AlbumOptions, Settings};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AlbumClient::new(Settings::default())?;
//! let options = AlbumOptions { destination: None, use_name: true };
//! let album = Album::load(&client, "https://imgur.com/a/Y8D4O", options).await?;
//! println!("{} by {} ({} images)", album.title(), album.uploader(), album.image_count());
//!
//! let report = download_images(&client, &album, None).await?;
//! println!("{} of {}", report.successful(), report.total());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod download;
pub mod error;
pub mod extract;
pub mod file;
pub mod model;
pub mod settings;
pub mod utils;

pub use crate::client::AlbumClient;
pub use crate::download::download_images;
pub use crate::error::{AlbumError, ExtractionError, FetchError, ImageDownloadError, Result};
pub use crate::model::album::{Album, AlbumOptions, AlbumUrl};
pub use crate::model::image::{DownloadReport, ImageOutcome};
pub use crate::settings::Settings;
