use std::fmt;
use std::fmt::Formatter;
use std::path::PathBuf;

use crate::error::ImageDownloadError;

/// What happened to one image of the album. `index` is 1-based.
#[derive(Debug)]
pub enum ImageOutcome {
    Downloaded { index: usize, path: PathBuf, bytes: u64 },
    Skipped { index: usize, path: PathBuf },
    Failed { index: usize, reference: String, error: ImageDownloadError },
}

impl ImageOutcome {
    pub fn index(&self) -> usize {
        match self {
            ImageOutcome::Downloaded { index, .. }
            | ImageOutcome::Skipped { index, .. }
            | ImageOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, ImageOutcome::Downloaded { .. })
    }
}

impl fmt::Display for ImageOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ImageOutcome::Downloaded { index, path, bytes } => {
                write!(f, "(index={}, path={:?}, len={})", index, path, bytes)
            }
            ImageOutcome::Skipped { index, path } => {
                write!(f, "(index={}, path={:?}, skipped)", index, path)
            }
            ImageOutcome::Failed { index, reference, error } => {
                write!(f, "(index={}, ref={}, error={})", index, reference, error)
            }
        }
    }
}

/// Tally of one `download_images` run, in album order.
#[derive(Debug)]
pub struct DownloadReport {
    pub folder: PathBuf,
    pub outcomes: Vec<ImageOutcome>,
}

impl DownloadReport {
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_downloaded()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Failed { .. }))
            .count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
