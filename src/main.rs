//! Quill installer CLI entrypoint.
//!
//! Resolves the release artifact for the host, downloads and verifies it,
//! installs the binary, and runs a post-install check. Errors exit with a
//! stage-specific status code and a message naming the failed stage.

use clap::Parser;
use quill_installer::cli::Cli;
use quill_installer::descriptor::resolve;
use quill_installer::error::{InstallerError, Result};
use quill_installer::install::default_install_dir;
use quill_installer::output::{DryRunReport, write_stderr_line};
use quill_installer::pipeline::{self, PipelineConfig};
use quill_installer::platform::{Arch, Platform};
use std::io::Write;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    if let Err(e) = run(&cli, &mut stderr) {
        write_stderr_line(&mut stderr, format!("error: {e}"));
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let platform = match cli.platform {
        Some(platform) => platform,
        None => Platform::detect()?,
    };
    let arch = match cli.arch {
        Some(arch) => arch,
        None => Arch::detect()?,
    };
    let install_dir = cli
        .install_dir
        .clone()
        .or_else(default_install_dir)
        .ok_or(InstallerError::NoInstallDir)?;

    if cli.dry_run {
        let descriptor = resolve(platform, arch)?;
        let report = DryRunReport {
            descriptor: &descriptor,
            install_dir: &install_dir,
        };
        let rendered = if cli.json {
            report.to_json().map_err(|e| InstallerError::Io(e.into()))?
        } else {
            report.display_text()
        };
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{rendered}")?;
        return Ok(());
    }

    let config = PipelineConfig {
        platform,
        arch,
        install_dir,
        skip_self_test: cli.skip_self_test,
        quiet: cli.quiet,
    };
    let report = pipeline::run(&config, stderr)?;

    if !cli.quiet {
        write_stderr_line(
            stderr,
            format!(
                "quill installed to {}; make sure its directory is on PATH.",
                report.installed
            ),
        );
    }
    Ok(())
}
