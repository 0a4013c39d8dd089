//! Download-and-verify step producing a verified local artifact.
//!
//! Acquisition downloads the descriptor's artifact into a working
//! directory, hashes the received bytes, and compares the result against
//! the published digest. Only a file that passes the comparison is handed
//! onward; a mismatch is fatal and the install delegate is never invoked
//! for it.

use crate::descriptor::ArtifactDescriptor;
use crate::digest::{Sha256Digest, compute_sha256};
use crate::download::ArtifactDownloader;
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// A downloaded artifact whose digest matched the release table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalArtifact {
    path: Utf8PathBuf,
    digest: Sha256Digest,
}

impl LocalArtifact {
    /// Path to the verified file on disk.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The verified digest of the file contents.
    #[must_use]
    pub fn digest(&self) -> &Sha256Digest {
        &self.digest
    }
}

/// Download the descriptor's artifact into `workdir` and verify it.
///
/// The file is written as the release asset name inside `workdir`; the
/// caller owns the directory's lifetime (in production it is a temporary
/// directory removed on drop, so a failed run leaves nothing behind).
///
/// # Errors
///
/// Returns [`InstallerError::Download`] if the transfer fails and
/// [`InstallerError::IntegrityMismatch`] if the downloaded bytes do not
/// hash to the published digest.
pub fn acquire(
    descriptor: &ArtifactDescriptor,
    downloader: &dyn ArtifactDownloader,
    workdir: &Utf8Path,
) -> Result<LocalArtifact> {
    let dest = workdir.join(descriptor.asset_name());
    downloader.download(&descriptor.location, dest.as_std_path())?;

    let actual = compute_sha256(dest.as_std_path())?;
    log::debug!("downloaded {} with sha-256 {actual}", descriptor.location);

    if actual != descriptor.digest {
        return Err(InstallerError::IntegrityMismatch {
            expected: descriptor.digest.clone(),
            actual,
        });
    }

    Ok(LocalArtifact {
        path: dest,
        digest: actual,
    })
}
