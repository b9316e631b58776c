use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlbumError>;

/// Fatal errors, raised while an album is being loaded or its folder prepared.
#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("The url \"{url}\" is not valid!")]
    InvalidUrl { url: String },

    #[error("Error while requesting album: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected album markup: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Cannot prepare destination folder: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("got response code {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: &'static str },

    #[error("image link #{index} has no href")]
    MissingHref { index: usize },
}

/// Failure of a single image. Recorded in the download report, never propagated.
#[derive(Debug, Error)]
pub enum ImageDownloadError {
    #[error("cannot build image url from {reference:?}: {source}")]
    InvalidUrl {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("got response code {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<FetchError> for ImageDownloadError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status, url } => ImageDownloadError::Status { status, url },
            FetchError::Network { url, source } => ImageDownloadError::Network { url, source },
        }
    }
}
