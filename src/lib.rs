//! Quill installer library.
//!
//! This crate fetches, verifies, and installs the prebuilt `quill` binary
//! for the host platform and CPU architecture. It is used by the
//! `quill-installer` CLI binary and can be consumed programmatically for
//! testing or custom installation workflows.
//!
//! The flow is strictly linear: resolve the release descriptor for the
//! host, download the artifact, verify its SHA-256 digest, hand the
//! verified file to the install delegate, and run a post-install check.
//! There are no retries and no rollback; every failure is surfaced to the
//! caller immediately.
//!
//! # Modules
//!
//! - [`acquire`] - Download-and-verify step producing a local artifact
//! - [`cli`] - Command-line argument definitions
//! - [`descriptor`] - Static release table and descriptor resolution
//! - [`digest`] - SHA-256 digest newtype and file hashing
//! - [`download`] - Downloader trait and HTTP implementation
//! - [`error`] - Semantic error types with per-stage exit codes
//! - [`install`] - Install delegate trait and binary installer
//! - [`output`] - Progress and dry-run output formatting
//! - [`pipeline`] - End-to-end installation pipeline orchestration
//! - [`platform`] - Platform and architecture detection
//! - [`selftest`] - Post-install verification delegate

pub mod acquire;
pub mod cli;
pub mod descriptor;
pub mod digest;
pub mod download;
pub mod error;
pub mod install;
pub mod output;
pub mod pipeline;
pub mod platform;
pub mod selftest;
