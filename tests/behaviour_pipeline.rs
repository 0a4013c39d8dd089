//! Behaviour tests for the end-to-end installation pipeline.
//!
//! These drive the real install delegate and self-test against stub
//! downloads, covering the success path, the integrity and download
//! failure paths, and re-running the pipeline over an existing install.

mod support;

use quill_installer::error::InstallerError;
use quill_installer::install::BinaryInstaller;
use quill_installer::pipeline::{PipelineConfig, PipelineDelegates, run_resolved};
use quill_installer::platform::{Arch, Platform};
use quill_installer::selftest::VersionCheck;
use support::{FailingDownloader, StubDownloader, descriptor_for, dir_entries, utf8_tempdir};

/// A payload that passes the version self-test when executed.
const SCRIPT: &[u8] = b"#!/bin/sh\necho \"quill 1.4.2\"\n";

fn config(install_dir: camino::Utf8PathBuf, skip_self_test: bool) -> PipelineConfig {
    PipelineConfig {
        platform: Platform::Linux,
        arch: Arch::X86_64,
        install_dir,
        skip_self_test,
        quiet: false,
    }
}

#[cfg(unix)]
#[test]
fn full_pipeline_installs_a_working_binary() {
    let (_guard, dir) = utf8_tempdir();
    let downloader = StubDownloader::new(SCRIPT);
    let self_test = VersionCheck::new("1.4.2");
    let delegates = PipelineDelegates {
        downloader: &downloader,
        installer: &BinaryInstaller,
        self_test: &self_test,
    };
    let mut stderr = Vec::new();

    let report = run_resolved(
        descriptor_for(SCRIPT),
        &config(dir.join("bin"), false),
        &delegates,
        &mut stderr,
    )
    .expect("pipeline succeeds");

    assert_eq!(report.installed, dir.join("bin").join("quill"));
    assert!(report.installed.as_std_path().exists());
    let progress = String::from_utf8(stderr).expect("utf-8 progress");
    assert!(progress.contains("Downloading"));
    assert!(progress.contains("Verified sha-256"));
    assert!(progress.contains("Self-test passed."));
}

#[test]
fn tampered_digest_leaves_the_install_dir_untouched() {
    let (_guard, dir) = utf8_tempdir();
    let downloader = StubDownloader::new(&b"tampered bytes"[..]);
    let self_test = VersionCheck::new("1.4.2");
    let delegates = PipelineDelegates {
        downloader: &downloader,
        installer: &BinaryInstaller,
        self_test: &self_test,
    };
    let mut stderr = Vec::new();

    let err = run_resolved(
        descriptor_for(SCRIPT),
        &config(dir.join("bin"), false),
        &delegates,
        &mut stderr,
    )
    .expect_err("mismatch must fail");

    assert!(matches!(err, InstallerError::IntegrityMismatch { .. }));
    assert_eq!(err.exit_code(), 4);
    assert!(dir_entries(&dir.join("bin")).is_empty());
}

#[test]
fn download_failure_maps_to_the_download_stage() {
    let (_guard, dir) = utf8_tempdir();
    let self_test = VersionCheck::new("1.4.2");
    let delegates = PipelineDelegates {
        downloader: &FailingDownloader,
        installer: &BinaryInstaller,
        self_test: &self_test,
    };
    let mut stderr = Vec::new();

    let err = run_resolved(
        descriptor_for(SCRIPT),
        &config(dir.join("bin"), false),
        &delegates,
        &mut stderr,
    )
    .expect_err("download must fail");

    assert!(matches!(err, InstallerError::Download(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("example.test"));
}

#[test]
fn skipping_the_self_test_installs_opaque_payloads() {
    let (_guard, dir) = utf8_tempdir();
    let payload: &[u8] = b"opaque payload";
    let downloader = StubDownloader::new(payload);
    let self_test = VersionCheck::new("1.4.2");
    let delegates = PipelineDelegates {
        downloader: &downloader,
        installer: &BinaryInstaller,
        self_test: &self_test,
    };
    let mut stderr = Vec::new();

    let report = run_resolved(
        descriptor_for(payload),
        &config(dir.join("bin"), true),
        &delegates,
        &mut stderr,
    )
    .expect("pipeline succeeds without self-test");

    let installed = std::fs::read(report.installed).expect("read installed payload");
    assert_eq!(installed, payload);
}

#[cfg(unix)]
#[test]
fn rerunning_the_pipeline_reproduces_the_same_end_state() {
    let (_guard, dir) = utf8_tempdir();
    let self_test = VersionCheck::new("1.4.2");
    let mut stderr = Vec::new();

    for _ in 0..2 {
        let downloader = StubDownloader::new(SCRIPT);
        let delegates = PipelineDelegates {
            downloader: &downloader,
            installer: &BinaryInstaller,
            self_test: &self_test,
        };
        let report = run_resolved(
            descriptor_for(SCRIPT),
            &config(dir.join("bin"), false),
            &delegates,
            &mut stderr,
        )
        .expect("pipeline succeeds");
        let contents = std::fs::read(report.installed).expect("read installed binary");
        assert_eq!(contents, SCRIPT);
    }
    assert_eq!(dir_entries(&dir.join("bin")), vec!["quill".to_owned()]);
}
