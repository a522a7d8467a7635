/// Remote media loader
///
/// Images are fetched in full and decoded once to prove they are usable.
/// Video is only buffered until enough bytes have arrived to start
/// playback smoothly; the rest of the stream is left to the player.

use std::future::Future;
use thiserror::Error;

/// Why a single asset failed to load
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("task join error: {0}")]
    Task(String),
}

/// A fetched and validated still image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Encoded bytes, handed to the renderer as-is
    pub bytes: Vec<u8>,
}

/// Source of remote media
pub trait AssetLoader: Send + Sync + 'static {
    /// Fetch and decode one image
    fn load_image(&self, url: String)
        -> impl Future<Output = Result<LoadedImage, AssetError>> + Send;

    /// Resolve once `ready_bytes` of the video are buffered, or the whole
    /// stream if it is shorter
    fn buffer_video(&self, url: String, ready_bytes: u64)
        -> impl Future<Output = Result<(), AssetError>> + Send;
}

/// Loader backed by a shared HTTP client
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new() -> Result<Self, AssetError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("orbit-visuals/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, AssetError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl AssetLoader for HttpLoader {
    async fn load_image(&self, url: String) -> Result<LoadedImage, AssetError> {
        let bytes = self.get(&url).await?.bytes().await?.to_vec();

        // Decoding is CPU-bound, keep it off the async workers
        tokio::task::spawn_blocking(move || -> Result<LoadedImage, AssetError> {
            let decoded = image::load_from_memory(&bytes)?;
            Ok(LoadedImage {
                url,
                width: decoded.width(),
                height: decoded.height(),
                bytes,
            })
        })
        .await
        .map_err(|e| AssetError::Task(e.to_string()))?
    }

    async fn buffer_video(&self, url: String, ready_bytes: u64) -> Result<(), AssetError> {
        let mut response = self.get(&url).await?;
        let mut buffered = 0u64;

        while let Some(chunk) = response.chunk().await? {
            buffered += chunk.len() as u64;
            if buffered >= ready_bytes {
                break;
            }
        }

        log::debug!("Buffered {}KB of {}", buffered / 1024, url);
        Ok(())
    }
}
