use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::{FetchError, ImageDownloadError};
use crate::settings::Settings;

#[derive(Clone)]
pub struct AlbumClient {
    inner: Client,
    settings: Settings,
}

impl AlbumClient {
    pub fn new(settings: Settings) -> Result<AlbumClient, FetchError> {
        let inner = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|source| FetchError::Network {
                url: settings.page_base.to_string(),
                source,
            })?;

        Ok(AlbumClient { inner, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetches the blog layout of an album. One attempt, no retries.
    pub async fn fetch_layout(&self, album_id: &str) -> Result<String, FetchError> {
        let url = self.settings.layout_url(album_id);
        let res = self.get(&url, self.settings.page_timeout).await?;

        res.text()
            .await
            .map_err(|source| FetchError::Network { url, source })
    }

    /// Opens the response for one image reference; the body is left unread.
    pub async fn open_image(&self, reference: &str) -> Result<Response, ImageDownloadError> {
        let url = self.settings.image_url(reference)?;
        let res = self.get(url.as_str(), self.settings.image_timeout).await?;
        Ok(res)
    }

    async fn get(&self, url: &str, timeout: std::time::Duration) -> Result<Response, FetchError> {
        debug!(url, "GET");
        let res = self
            .inner
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_owned(),
                source,
            })?;

        let status = res.status();
        debug!(url, status = status.as_u16(), "response");
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(res)
    }
}
