//! Platform and CPU architecture detection.
//!
//! The release table covers exactly two operating system families and two
//! CPU architectures. Detection reads the compile-time constants in
//! [`std::env::consts`] and rejects any host outside the supported matrix
//! rather than falling through silently.

use crate::error::{InstallerError, Result};
use serde::Serialize;
use std::fmt;

/// Supported operating system families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple macOS (Darwin).
    #[value(name = "macos")]
    MacOs,
    /// Linux with glibc.
    Linux,
}

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// 64-bit ARM (Apple Silicon, aarch64 servers).
    Arm64,
    /// 64-bit x86.
    #[value(name = "x86-64")]
    X86_64,
}

impl Platform {
    /// Detect the operating system family of the running host.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::UnsupportedHost`] when the host OS is
    /// neither macOS nor Linux.
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` style name to a platform.
    fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(InstallerError::UnsupportedHost {
                os: other.to_owned(),
                arch: std::env::consts::ARCH.to_owned(),
            }),
        }
    }
}

impl Arch {
    /// Detect the CPU architecture of the running host.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::UnsupportedHost`] when the host CPU is
    /// neither aarch64 nor x86_64.
    pub fn detect() -> Result<Self> {
        Self::from_arch_name(std::env::consts::ARCH)
    }

    /// Map an `std::env::consts::ARCH` style name to an architecture.
    fn from_arch_name(arch: &str) -> Result<Self> {
        match arch {
            "aarch64" => Ok(Self::Arm64),
            "x86_64" => Ok(Self::X86_64),
            other => Err(InstallerError::UnsupportedHost {
                os: std::env::consts::OS.to_owned(),
                arch: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arm64 => write!(f, "arm64"),
            Self::X86_64 => write!(f, "x86-64"),
        }
    }
}

/// Return the Rust target triple for a platform and architecture pair.
///
/// The release workflow names its assets by target triple, so this is the
/// canonical spelling used in download URLs.
#[must_use]
pub fn target_triple(platform: Platform, arch: Arch) -> &'static str {
    match (platform, arch) {
        (Platform::Linux, Arch::X86_64) => "x86_64-unknown-linux-gnu",
        (Platform::Linux, Arch::Arm64) => "aarch64-unknown-linux-gnu",
        (Platform::MacOs, Arch::X86_64) => "x86_64-apple-darwin",
        (Platform::MacOs, Arch::Arm64) => "aarch64-apple-darwin",
    }
}
