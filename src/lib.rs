//! Notipost - One-shot native desktop notification poster
//!
//! This crate delivers a single desktop notification per invocation and
//! exits with a status code reflecting the outcome, so automation callers
//! can fire-and-check without running a daemon.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Request parsing, sound normalization, and content values
//! - **Application**: The delivery pipeline and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, file system,
//!   platform sound directories)
//! - **CLI**: One-shot runner, exit-code mapping, and diagnostics

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
