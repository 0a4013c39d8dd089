//! Artifact download abstraction and HTTP implementation.
//!
//! The pipeline talks to a [`ArtifactDownloader`] trait object so tests
//! can exercise the verification and install stages without network
//! access. The production implementation uses `ureq` with a bounded
//! global timeout; there is no retry and no resume, a failed transfer is
//! reported to the caller as-is.

use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Network timeout covering the whole artifact transfer.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Trait for downloading a release artifact to a local file.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactDownloader {
    /// Download the content at `url` into the file at `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-success status, or the destination file cannot be written.
    fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Errors arising from artifact download operations.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("request to {url} failed: {reason}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The artifact was not found at the published URL (HTTP 404).
    #[error("artifact not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// I/O error writing the downloaded file.
    #[error("I/O error writing download: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP downloader backed by a shared `ureq` agent.
#[derive(Debug, Default)]
pub struct HttpDownloader;

impl ArtifactDownloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        let mut file = std::fs::File::create(dest)?;
        std::io::copy(&mut response.into_body().as_reader(), &mut file)
            .map_err(DownloadError::Io)?;
        Ok(())
    }
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`DownloadError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> DownloadError {
    match err {
        ureq::Error::StatusCode(404) => DownloadError::NotFound {
            url: url.to_owned(),
        },
        other => DownloadError::Http {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_404_to_not_found() {
        let err = ureq::Error::StatusCode(404);
        let mapped = map_ureq_error("https://example.test/quill", &err);
        assert!(matches!(mapped, DownloadError::NotFound { .. }));
    }

    #[test]
    fn maps_other_statuses_to_http() {
        let err = ureq::Error::StatusCode(503);
        let mapped = map_ureq_error("https://example.test/quill", &err);
        assert!(matches!(mapped, DownloadError::Http { .. }));
    }

    #[test]
    fn not_found_message_includes_url() {
        let err = DownloadError::NotFound {
            url: "https://example.test/quill".to_owned(),
        };
        assert!(err.to_string().contains("https://example.test/quill"));
    }
}
