//! End-to-end installation pipeline orchestration.
//!
//! The pipeline is strictly linear: resolve the descriptor for the
//! requested pair, prepare the install directory, download and verify the
//! artifact in a temporary working directory, hand it to the install
//! delegate, and finally run the self-test. The first failure aborts the
//! run; the temporary directory guard removes any partial download.

use crate::acquire::acquire;
use crate::descriptor::{ArtifactDescriptor, resolve};
use crate::download::{ArtifactDownloader, HttpDownloader};
use crate::error::{InstallerError, Result};
use crate::install::{BinaryInstaller, InstallDelegate, prepare_install_dir};
use crate::output::write_stderr_line;
use crate::platform::{Arch, Platform};
use crate::selftest::{SelfTest, VersionCheck};
use camino::Utf8PathBuf;
use std::io::Write;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Operating system family to install for.
    pub platform: Platform,
    /// CPU architecture to install for.
    pub arch: Arch,
    /// Directory the binary is installed into.
    pub install_dir: Utf8PathBuf,
    /// When true, skip the post-install check.
    pub skip_self_test: bool,
    /// When true, suppress progress output (errors still shown).
    pub quiet: bool,
}

/// The injected collaborators for one pipeline run.
pub struct PipelineDelegates<'a> {
    /// Artifact downloader.
    pub downloader: &'a dyn ArtifactDownloader,
    /// Install procedure.
    pub installer: &'a dyn InstallDelegate,
    /// Post-install check.
    pub self_test: &'a dyn SelfTest,
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// The descriptor that was installed.
    pub descriptor: ArtifactDescriptor,
    /// Path of the installed executable.
    pub installed: Utf8PathBuf,
}

/// Run the pipeline with production collaborators.
///
/// # Errors
///
/// Propagates the first stage failure; see [`InstallerError`] for the
/// per-stage variants and exit codes.
pub fn run(config: &PipelineConfig, stderr: &mut dyn Write) -> Result<InstallReport> {
    let delegates = PipelineDelegates {
        downloader: &HttpDownloader,
        installer: &BinaryInstaller,
        self_test: &VersionCheck::default(),
    };
    run_with(config, &delegates, stderr)
}

/// Testable pipeline entry point with injected collaborators.
///
/// # Errors
///
/// Propagates the first stage failure unmodified.
pub fn run_with(
    config: &PipelineConfig,
    delegates: &PipelineDelegates<'_>,
    stderr: &mut dyn Write,
) -> Result<InstallReport> {
    let descriptor = resolve(config.platform, config.arch)?;
    run_resolved(descriptor, config, delegates, stderr)
}

/// Run the acquire, install, and self-test stages for a resolved
/// descriptor.
///
/// Split out from [`run_with`] so callers (and tests) can supply a
/// descriptor directly instead of going through the release table.
///
/// # Errors
///
/// Propagates the first stage failure unmodified.
pub fn run_resolved(
    descriptor: ArtifactDescriptor,
    config: &PipelineConfig,
    delegates: &PipelineDelegates<'_>,
    stderr: &mut dyn Write,
) -> Result<InstallReport> {
    prepare_install_dir(&config.install_dir)?;

    if !config.quiet {
        write_stderr_line(stderr, format!("Downloading {}...", descriptor.location));
    }
    let workdir = tempfile::tempdir()?;
    let workdir_utf8 = Utf8PathBuf::from_path_buf(workdir.path().to_path_buf()).map_err(|p| {
        InstallerError::Io(std::io::Error::other(format!(
            "temporary directory {} is not valid UTF-8",
            p.display()
        )))
    })?;

    let artifact = acquire(&descriptor, delegates.downloader, &workdir_utf8)?;
    if !config.quiet {
        write_stderr_line(
            stderr,
            format!("Verified sha-256 {}.", artifact.digest()),
        );
    }

    let installed = delegates
        .installer
        .install(&artifact, &config.install_dir)
        .map_err(|e| InstallerError::Install {
            reason: e.to_string(),
        })?;
    if !config.quiet {
        write_stderr_line(stderr, format!("Installed {installed}."));
    }

    if config.skip_self_test {
        log::debug!("self-test skipped by request");
    } else {
        delegates
            .self_test
            .verify(&installed)
            .map_err(|e| InstallerError::SelfTest {
                reason: e.to_string(),
            })?;
        if !config.quiet {
            write_stderr_line(stderr, "Self-test passed.");
        }
    }

    Ok(InstallReport {
        descriptor,
        installed,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
