//! Symlink-farm management engine.
//!
//! A repository directory holds packages — directories of files meant to be
//! installed elsewhere via symbolic links rather than copies. The engine
//! resolves each package to the link pairs that should exist, reconciles them
//! idempotently against the filesystem, and reports whether anything changed.
//!
//! The public API is organised into four layers:
//!
//! - **[`resolve`]** — package layout detection and link-pair resolution
//! - **[`link`]** — the idempotent `check + apply` symlink primitive
//! - **[`reconcile`]** — desired-state dispatch producing a [`report::Report`]
//! - **[`commands`]** — top-level subcommand orchestration (`apply`, `completions`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod link;
pub mod logging;
pub mod reconcile;
pub mod report;
pub mod resolve;
