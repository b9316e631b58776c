use std::io::{self, stdout};
use std::path::Path;

use bytes::Bytes;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::client::AlbumClient;
use crate::error::{ImageDownloadError, Result};
use crate::file::{ensure_folder, image_file_name, PartialFile};
use crate::model::album::Album;
use crate::model::image::{DownloadReport, ImageOutcome};
use crate::utils::rewrite_message;

/// Downloads every image of `album`, one at a time, into its target folder.
///
/// Only resolving or creating the folder is fatal. A file that already exists
/// is skipped, and a failed image is recorded and removed from disk; both
/// leave the remaining images to be tried.
pub async fn download_images(
    client: &AlbumClient,
    album: &Album,
    destination: Option<&Path>,
) -> Result<DownloadReport> {
    let folder = album.target_folder(destination)?;
    ensure_folder(&folder)?;

    let total = album.image_count();
    let mut outcomes = Vec::with_capacity(total);

    for (i, reference) in album.image_refs().iter().enumerate() {
        let index = i + 1;
        let path = folder.join(image_file_name(index, reference));

        let outcome = if path.exists() {
            skipped(index, &path)
        } else {
            // progress is cosmetic, a broken stdout must not fail the image
            let _ = rewrite_message(
                stdout(),
                &format!("Downloading image from {} ({} of {})", reference, index, total),
            );

            match download_image(client, reference, &path).await {
                Ok(bytes) => {
                    debug!(album_id = album.album_id(), index, bytes, ?path, "image saved");
                    ImageOutcome::Downloaded { index, path, bytes }
                }
                Err(ImageDownloadError::Io { source, .. })
                    if source.kind() == io::ErrorKind::AlreadyExists =>
                {
                    skipped(index, &path)
                }
                Err(err) => {
                    warn!(album_id = album.album_id(), index, reference = %reference, error = %err, "image failed");
                    println!("[ERROR] Failed to download image from URL {}", reference);
                    ImageOutcome::Failed { index, reference: reference.clone(), error: err }
                }
            }
        };
        outcomes.push(outcome);
    }

    let report = DownloadReport { folder, outcomes };
    println!();
    println!(
        "Successfully downloaded {} of {} images to {}",
        report.successful(),
        report.total(),
        report.folder.display()
    );

    Ok(report)
}

fn skipped(index: usize, path: &Path) -> ImageOutcome {
    warn!(index, ?path, "image file exists, skipping");
    println!(
        "[WARNING] The image file \"{}\" does already exist. Skipping...",
        path.display()
    );
    ImageOutcome::Skipped { index, path: path.to_path_buf() }
}

/// Streams one image into `path`. On any error the partial file is gone
/// before this returns.
async fn download_image(
    client: &AlbumClient,
    reference: &str,
    path: &Path,
) -> std::result::Result<u64, ImageDownloadError> {
    let res = client.open_image(reference).await?;
    let url = res.url().to_string();

    let io_err = |source: io::Error| ImageDownloadError::Io { path: path.to_path_buf(), source };
    let mut file = PartialFile::create(path).await.map_err(io_err)?;

    let mut stream = res.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk: Bytes = chunk.map_err(|source| ImageDownloadError::Network {
            url: url.clone(),
            source,
        })?;
        file.write_all(&chunk).await.map_err(io_err)?;
        written += chunk.len() as u64;
    }

    file.commit().await.map_err(io_err)?;
    Ok(written)
}
