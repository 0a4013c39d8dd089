//! Progress and dry-run output formatting.
//!
//! Progress goes to an injected writer so tests can capture it; stdout is
//! reserved for the dry-run report, which is the only machine-consumable
//! output the installer produces.

use crate::descriptor::ArtifactDescriptor;
use camino::Utf8Path;
use serde::Serialize;
use std::io::Write;

/// Write a line to the given writer, ignoring write failures.
///
/// Progress output is best-effort; a broken stderr must not fail an
/// otherwise healthy install.
pub fn write_stderr_line(stderr: &mut dyn Write, line: impl AsRef<str>) {
    let _ = writeln!(stderr, "{}", line.as_ref());
}

/// The dry-run report: what would be fetched and where it would land.
#[derive(Debug, Serialize)]
pub struct DryRunReport<'a> {
    /// The resolved release artifact.
    pub descriptor: &'a ArtifactDescriptor,
    /// Directory the binary would be installed into.
    pub install_dir: &'a Utf8Path,
}

impl DryRunReport<'_> {
    /// Render the report as human-readable text.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!(
            concat!(
                "Would install quill for {platform}/{arch}:\n",
                "  source:  {location}\n",
                "  sha-256: {digest}\n",
                "  into:    {install_dir}"
            ),
            platform = self.descriptor.platform,
            arch = self.descriptor.arch,
            location = self.descriptor.location,
            digest = self.descriptor.digest,
            install_dir = self.install_dir,
        )
    }

    /// Render the report as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns a serialization error; with these types it cannot occur in
    /// practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
