//! Image probes: can this reference actually be loaded?

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use memoir_model::ImageRef;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Cannot resolve image reference: {0}")]
    Unresolvable(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Resolves once the image is known to load, or with the reason it won't.
    async fn probe(&self, image: &ImageRef) -> Result<(), ProbeError>;
}

/// Probes absolute or base-relative URLs over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: reqwest::Client,
    base: Option<Url>,
}

impl HttpImageProbe {
    pub fn new(base: Option<Url>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn with_client(client: reqwest::Client, base: Option<Url>) -> Self {
        Self { client, base }
    }

    pub fn resolve(&self, image: &ImageRef) -> Result<Url, ProbeError> {
        match Url::parse(image.as_str()) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base
                .as_ref()
                .and_then(|base| base.join(image.as_str()).ok())
                .ok_or_else(|| ProbeError::Unresolvable(image.to_string())),
            Err(_) => Err(ProbeError::Unresolvable(image.to_string())),
        }
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, image: &ImageRef) -> Result<(), ProbeError> {
        let url = self.resolve(image)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Probes site-relative references against a local media root.
#[derive(Debug, Clone)]
pub struct FsImageProbe {
    root: PathBuf,
}

impl FsImageProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path for `image`, with any query or fragment stripped.
    pub fn resolve(&self, image: &ImageRef) -> PathBuf {
        let reference = image.as_str();
        let path = reference
            .split(['?', '#'])
            .next()
            .unwrap_or(reference)
            .trim_start_matches('/');
        self.root.join(path)
    }

    async fn probe_path(&self, path: &Path) -> Result<(), ProbeError> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ProbeError::NotFound(path.display().to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ProbeError::NotFound(path.display().to_string()))
            }
            Err(err) => Err(ProbeError::Io(err)),
        }
    }
}

#[async_trait]
impl ImageProbe for FsImageProbe {
    async fn probe(&self, image: &ImageRef) -> Result<(), ProbeError> {
        self.probe_path(&self.resolve(image)).await
    }
}

/// Routes each reference by scheme: http(s) over the network, `file:` and
/// relative references against the local media root.
#[derive(Debug, Clone)]
pub struct SchemeProbe {
    http: HttpImageProbe,
    fs: FsImageProbe,
}

impl SchemeProbe {
    pub fn new(http: HttpImageProbe, fs: FsImageProbe) -> Self {
        Self { http, fs }
    }
}

#[async_trait]
impl ImageProbe for SchemeProbe {
    async fn probe(&self, image: &ImageRef) -> Result<(), ProbeError> {
        match Url::parse(image.as_str()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                self.http.probe(image).await
            }
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| ProbeError::Unresolvable(image.to_string()))?;
                self.fs.probe_path(&path).await
            }
            Ok(url) => Err(ProbeError::Unresolvable(format!(
                "unsupported scheme {}",
                url.scheme()
            ))),
            Err(_) => self.fs.probe(image).await,
        }
    }
}
