//! Error types for the quill installer.
//!
//! Each stage of the pipeline has its own semantic error variant so the
//! binary can tell the user which stage failed and exit with a
//! stage-specific status code. There is no local recovery: every variant
//! is fatal to the run that produced it.

use crate::digest::Sha256Digest;
use crate::download::DownloadError;
use crate::platform::{Arch, Platform};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during the installation pipeline.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The running host is outside the supported OS/CPU matrix.
    #[error("unsupported host: os \"{os}\" on \"{arch}\"; quill ships for macos and linux on arm64 and x86-64")]
    UnsupportedHost {
        /// The detected operating system name.
        os: String,
        /// The detected CPU architecture name.
        arch: String,
    },

    /// No release descriptor exists for the requested pair.
    ///
    /// With the current four-entry release table this cannot be produced
    /// by `resolve`, but the variant keeps the missing-descriptor case an
    /// explicit branch rather than an implicit fallthrough.
    #[error("no release artifact published for {platform}/{arch}")]
    UnsupportedPlatform {
        /// The requested operating system family.
        platform: Platform,
        /// The requested CPU architecture.
        arch: Arch,
    },

    /// The artifact could not be retrieved.
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),

    /// The downloaded bytes do not match the published digest.
    ///
    /// Never retried: re-downloading a corrupted upstream file would
    /// yield the same bytes.
    #[error("integrity check failed: expected sha-256 {expected}, got {actual}")]
    IntegrityMismatch {
        /// The digest recorded in the release table.
        expected: Sha256Digest,
        /// The digest computed from the downloaded bytes.
        actual: Sha256Digest,
    },

    /// The install directory exists but cannot be written to.
    #[error("install directory {path} is not writable: {reason}")]
    InstallDirNotWritable {
        /// Path to the non-writable directory.
        path: Utf8PathBuf,
        /// Description of the underlying I/O error.
        reason: String,
    },

    /// No install directory was given and none could be derived.
    #[error("could not determine an install directory; pass --install-dir")]
    NoInstallDir,

    /// The install delegate failed; propagated unmodified.
    #[error("install failed: {reason}")]
    Install {
        /// Description of the delegate failure.
        reason: String,
    },

    /// The post-install check failed.
    #[error("self-test failed: {reason}")]
    SelfTest {
        /// Description of the check failure.
        reason: String,
    },

    /// An I/O operation outside the other stages failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallerError {
    /// The process exit code for this error.
    ///
    /// Each pipeline stage maps to a distinct code so wrapping scripts can
    /// distinguish an unsupported host from a network failure or a
    /// corrupted download.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedHost { .. } | Self::UnsupportedPlatform { .. } => 2,
            Self::Download(_) => 3,
            Self::IntegrityMismatch { .. } => 4,
            Self::Install { .. }
            | Self::InstallDirNotWritable { .. }
            | Self::NoInstallDir => 5,
            Self::SelfTest { .. } => 6,
            Self::Io(_) => 1,
        }
    }
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_stage() {
        let errors = [
            InstallerError::UnsupportedHost {
                os: "windows".to_owned(),
                arch: "x86_64".to_owned(),
            },
            InstallerError::Download(DownloadError::NotFound {
                url: "https://example.test/quill".to_owned(),
            }),
            InstallerError::IntegrityMismatch {
                expected: Sha256Digest::try_from("a".repeat(64)).expect("valid hex"),
                actual: Sha256Digest::try_from("b".repeat(64)).expect("valid hex"),
            },
            InstallerError::Install {
                reason: "copy failed".to_owned(),
            },
            InstallerError::SelfTest {
                reason: "wrong version".to_owned(),
            },
        ];
        let codes: Vec<i32> = errors.iter().map(InstallerError::exit_code).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len(), "codes must not collide: {codes:?}");
        assert!(codes.iter().all(|&c| c != 0), "no error maps to success");
    }

    #[test]
    fn messages_name_the_failed_stage() {
        let err = InstallerError::SelfTest {
            reason: "exited with status 1".to_owned(),
        };
        assert!(err.to_string().contains("self-test"));
    }
}
