//! Shared fixtures for installer behaviour tests.

use camino::{Utf8Path, Utf8PathBuf};
use quill_installer::descriptor::ArtifactDescriptor;
use quill_installer::digest::{Sha256Digest, compute_sha256};
use quill_installer::download::{ArtifactDownloader, DownloadError};
use quill_installer::platform::{Arch, Platform};
use std::path::Path;

/// Compute the SHA-256 hex digest of a byte slice.
pub fn sha256_hex(content: &[u8]) -> String {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("content");
    std::fs::write(&path, content).expect("write content");
    compute_sha256(&path)
        .expect("hash content")
        .as_str()
        .to_owned()
}

/// Build a descriptor whose digest matches `content`.
pub fn descriptor_for(content: &[u8]) -> ArtifactDescriptor {
    ArtifactDescriptor {
        platform: Platform::Linux,
        arch: Arch::X86_64,
        location: "https://example.test/quill-x86_64-unknown-linux-gnu".to_owned(),
        digest: Sha256Digest::try_from(sha256_hex(content)).expect("valid hex"),
    }
}

/// A downloader that writes fixed bytes instead of touching the network.
pub struct StubDownloader {
    content: Vec<u8>,
}

impl StubDownloader {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ArtifactDownloader for StubDownloader {
    fn download(&self, _url: &str, dest: &Path) -> Result<(), DownloadError> {
        std::fs::write(dest, &self.content).map_err(DownloadError::Io)
    }
}

/// A downloader that fails every request with a 404.
pub struct FailingDownloader;

impl ArtifactDownloader for FailingDownloader {
    fn download(&self, url: &str, _dest: &Path) -> Result<(), DownloadError> {
        Err(DownloadError::NotFound {
            url: url.to_owned(),
        })
    }
}

/// A UTF-8 temporary directory with its guard.
pub fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let utf8 = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    (dir, utf8)
}

/// List the file names in a directory, sorted.
pub fn dir_entries(dir: &Utf8Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
