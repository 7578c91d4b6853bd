//! ghpr is a small GitHub pull request tool for the terminal.
//!
//! It lists a repository's pull requests a page at a time and merges a
//! chosen pull request interactively, confirming the target and
//! collecting a commit message first.
//!
//! The crate splits into a thin API client ([`platform`]), terminal
//! plumbing ([`console`], [`style`]), and the two flows themselves
//! ([`list`], [`merge`]).

pub mod auth;
pub mod console;
pub mod error;
pub mod humanize;
pub mod list;
pub mod merge;
pub mod platform;
pub mod style;
pub mod types;
