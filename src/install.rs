//! Install delegate trait and the production binary installer.
//!
//! The pipeline treats installation as an opaque collaborator: it hands
//! over a verified local artifact and a destination directory, and any
//! failure is propagated to the caller unmodified. The production
//! delegate copies the binary into place via a temporary sibling and an
//! atomic rename, and marks it executable on Unix.

use crate::acquire::LocalArtifact;
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name the binary is installed under.
const BINARY_NAME: &str = "quill";

/// Error raised by an install delegate.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct InstallError {
    /// Description of the delegate failure.
    pub reason: String,
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

/// Trait for the externally supplied installation procedure.
///
/// Receives a verified local artifact and the destination directory;
/// returns the path of the installed executable.
#[cfg_attr(test, mockall::automock)]
pub trait InstallDelegate {
    /// Install the verified artifact into `dest_dir`.
    ///
    /// # Errors
    ///
    /// Returns an [`InstallError`] describing the failure; the pipeline
    /// treats it as fatal.
    fn install(
        &self,
        artifact: &LocalArtifact,
        dest_dir: &Utf8Path,
    ) -> std::result::Result<Utf8PathBuf, InstallError>;
}

/// Production delegate: copy the binary into the install directory.
#[derive(Debug, Default)]
pub struct BinaryInstaller;

impl InstallDelegate for BinaryInstaller {
    fn install(
        &self,
        artifact: &LocalArtifact,
        dest_dir: &Utf8Path,
    ) -> std::result::Result<Utf8PathBuf, InstallError> {
        let staged = dest_dir.join(format!(".{BINARY_NAME}.partial"));
        let dest = dest_dir.join(BINARY_NAME);

        fs::copy(artifact.path(), &staged).map_err(|e| InstallError {
            reason: format!("failed to copy {} to {staged}: {e}", artifact.path()),
        })?;
        set_executable(&staged)?;
        // Rename last so a crash mid-install never leaves a truncated
        // binary under the final name.
        fs::rename(&staged, &dest).map_err(|e| InstallError {
            reason: format!("failed to move {staged} into place: {e}"),
        })?;

        Ok(dest)
    }
}

#[cfg(unix)]
fn set_executable(path: &Utf8Path) -> std::result::Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let perms = fs::Permissions::from_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| InstallError {
        reason: format!("failed to mark {path} executable: {e}"),
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Utf8Path) -> std::result::Result<(), InstallError> {
    Ok(())
}

/// Ensure the install directory exists and is writable.
///
/// Performed before any network traffic so an unwritable destination
/// fails the run early.
///
/// # Errors
///
/// Returns [`InstallerError::InstallDirNotWritable`] when the directory
/// cannot be created or written to.
pub fn prepare_install_dir(dir: &Utf8Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| InstallerError::InstallDirNotWritable {
        path: dir.to_owned(),
        reason: e.to_string(),
    })?;

    let probe = dir.join(".quill-installer-probe");
    match fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(e) => Err(InstallerError::InstallDirNotWritable {
            path: dir.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// The default per-user install directory.
///
/// Prefers the platform executable directory where one is defined
/// (`~/.local/bin` on Linux) and falls back to `.local/bin` under the
/// home directory elsewhere. Returns `None` when no home directory can
/// be determined.
#[must_use]
pub fn default_install_dir() -> Option<Utf8PathBuf> {
    let base = directories_next::BaseDirs::new()?;
    let dir = base
        .executable_dir()
        .map(std::path::Path::to_path_buf)
        .unwrap_or_else(|| base.home_dir().join(".local").join("bin"));
    Utf8PathBuf::from_path_buf(dir).ok()
}
