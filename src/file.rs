use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub fn ensure_folder(path: &Path) -> io::Result<()> {
    if !path.is_dir() {
        debug!(?path, "creating folder");
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Extension of the last path segment of an image reference, dot included.
/// Query and fragment are ignored; a reference without one gives `""`.
pub fn extension_of(reference: &str) -> String {
    let path = reference
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or("");
    let segment = path.rsplit('/').next().unwrap_or("");

    match Path::new(segment).extension() {
        Some(extension) => format!(".{}", extension.to_string_lossy()),
        None => "".to_string(),
    }
}

pub fn image_file_name(index: usize, reference: &str) -> String {
    format!("{}{}", index, extension_of(reference))
}

/// An output file that is deleted again unless [`commit`](PartialFile::commit)
/// is reached, so an interrupted download never leaves a truncated image.
pub struct PartialFile {
    path: PathBuf,
    file: Option<File>,
}

impl PartialFile {
    /// Fails with `AlreadyExists` rather than overwrite an earlier download.
    pub async fn create(path: &Path) -> io::Result<PartialFile> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        Ok(PartialFile { path: path.to_path_buf(), file: Some(file) })
    }

    pub async fn write_all(&mut self, chunk: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_all(chunk).await,
            None => Err(io::Error::new(io::ErrorKind::Other, "file already committed")),
        }
    }

    pub async fn commit(mut self) -> io::Result<PathBuf> {
        if let Some(mut file) = self.file.take() {
            if let Err(err) = file.flush().await {
                self.file = Some(file);
                return Err(err);
            }
        }
        Ok(std::mem::take(&mut self.path))
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            debug!(path = ?self.path, "removing partial file");
            if let Err(err) = fs::remove_file(&self.path) {
                if err.kind() != io::ErrorKind::NotFound {
                    println!("failed to remove {:?} due to {:?}", self.path, err)
                }
            }
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_of_scheme_relative_reference() {
        assert_eq!(extension_of("//i.imgur.com/a.jpg"), ".jpg");
        assert_eq!(extension_of("//i.imgur.com/b.png"), ".png");
    }

    #[test]
    fn test_extension_of_reference_without_extension() {
        // the dot in the host must not count
        assert_eq!(extension_of("//i.imgur.com/abc"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_extension_ignores_query_and_fragment() {
        assert_eq!(extension_of("//i.imgur.com/a.gif?1"), ".gif");
        assert_eq!(extension_of("/a.webm#t=3"), ".webm");
    }

    #[test]
    fn test_extension_takes_last_dot() {
        assert_eq!(extension_of("//i.imgur.com/a.tar.gz"), ".gz");
        assert_eq!(extension_of("//i.imgur.com/.hidden"), "");
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name(1, "//i.imgur.com/a.jpg"), "1.jpg");
        assert_eq!(image_file_name(12, "//i.imgur.com/abc"), "12");
    }

    #[test]
    fn test_ensure_folder_creates_parents_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        ensure_folder(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_folder(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_partial_file_removed_when_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.jpg");

        {
            let mut partial = PartialFile::create(&path).await.unwrap();
            partial.write_all(b"half").await.unwrap();
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_partial_file_kept_after_commit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.jpg");

        let mut partial = PartialFile::create(&path).await.unwrap();
        partial.write_all(b"image").await.unwrap();
        let kept = partial.commit().await.unwrap();

        assert_eq!(kept, path);
        assert_eq!(fs::read(&path).unwrap(), b"image");
    }

    #[tokio::test]
    async fn test_partial_file_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.jpg");
        fs::write(&path, "original").unwrap();

        let err = PartialFile::create(&path).await.err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"original");
    }
}
