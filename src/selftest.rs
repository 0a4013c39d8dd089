//! Post-install verification delegate.
//!
//! The original packaging recipe's smoke test was a tautological string
//! comparison; it is replaced here by a functional check that runs the
//! installed binary under a bounded timeout and verifies it reports the
//! expected version.

use camino::Utf8Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Default timeout for the self-test child process.
const SELF_TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error raised by a self-test delegate.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct SelfTestError {
    /// Description of the check failure.
    pub reason: String,
}

/// Trait for the post-install verification hook.
#[cfg_attr(test, mockall::automock)]
pub trait SelfTest {
    /// Check that the binary at `installed` is functional.
    ///
    /// # Errors
    ///
    /// Returns a [`SelfTestError`] describing why the check failed.
    fn verify(&self, installed: &Utf8Path) -> Result<(), SelfTestError>;
}

/// Production self-test: run `<installed> --version` and match the output.
#[derive(Debug)]
pub struct VersionCheck {
    expected: String,
    timeout: Duration,
}

impl VersionCheck {
    /// A check expecting the given version substring in the output.
    #[must_use]
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            timeout: SELF_TEST_TIMEOUT,
        }
    }

    /// Override the child process timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for VersionCheck {
    /// Expect the version this installer was released alongside.
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl SelfTest for VersionCheck {
    fn verify(&self, installed: &Utf8Path) -> Result<(), SelfTestError> {
        let mut child = Command::new(installed)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SelfTestError {
                reason: format!("failed to run {installed}: {e}"),
            })?;

        let status = child.wait_timeout(self.timeout).map_err(|e| SelfTestError {
            reason: format!("failed waiting for {installed}: {e}"),
        })?;

        let Some(status) = status else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SelfTestError {
                reason: format!(
                    "{installed} --version timed out after {} seconds",
                    self.timeout.as_secs()
                ),
            });
        };

        let stdout = child
            .stdout
            .take()
            .map(std::io::read_to_string)
            .transpose()
            .map_err(|e| SelfTestError {
                reason: format!("failed reading output of {installed}: {e}"),
            })?
            .unwrap_or_default();

        if !status.success() {
            return Err(SelfTestError {
                reason: format!("{installed} --version exited with {status}"),
            });
        }
        if !stdout.contains(&self.expected) {
            return Err(SelfTestError {
                reason: format!(
                    "{installed} reported {:?}, expected it to contain {:?}",
                    stdout.trim(),
                    self.expected
                ),
            });
        }

        Ok(())
    }
}
