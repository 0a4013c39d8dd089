//! CLI argument definitions for the quill installer.
//!
//! Separated from the main entrypoint to keep the binary focused on
//! orchestration.

use crate::platform::{Arch, Platform};
use camino::Utf8PathBuf;
use clap::Parser;

/// Install the prebuilt quill binary.
#[derive(Parser, Debug)]
#[command(name = "quill-installer")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install the prebuilt quill binary.\n\n",
    "The installer resolves the release artifact for the host operating ",
    "system and CPU architecture, downloads it, verifies its SHA-256 digest ",
    "against the published release checksums, installs it into a per-user ",
    "bin directory, and runs the installed binary once to confirm it works.\n\n",
    "Nothing is built from source and nothing is retried: any failure ",
    "aborts the run with a stage-specific exit code.",
))]
#[command(after_help = concat!(
    "EXIT CODES:\n",
    "  2  host or platform/architecture pair not supported\n",
    "  3  download failed\n",
    "  4  downloaded artifact failed the integrity check\n",
    "  5  installation failed\n",
    "  6  post-install self-test failed\n\n",
    "EXAMPLES:\n",
    "  Install for the current host:\n",
    "    $ quill-installer\n\n",
    "  Install into a specific directory:\n",
    "    $ quill-installer --install-dir ~/bin\n\n",
    "  Show what would be fetched for another platform:\n",
    "    $ quill-installer --dry-run --platform macos --arch arm64\n\n",
    "  Machine-readable dry-run output:\n",
    "    $ quill-installer --dry-run --json\n\n",
    "For more information, see: https://github.com/quillworks/quill",
))]
pub struct Cli {
    /// Directory to install the binary into [default: platform-specific].
    #[arg(short = 'd', long, value_name = "DIR")]
    pub install_dir: Option<Utf8PathBuf>,

    /// Override the detected operating system family.
    #[arg(long, value_enum, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Override the detected CPU architecture.
    #[arg(long, value_enum, value_name = "ARCH")]
    pub arch: Option<Arch>,

    /// Resolve and print the release descriptor without downloading.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the dry-run report as JSON.
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the post-install self-test.
    #[arg(long)]
    pub skip_self_test: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
