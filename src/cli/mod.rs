//! CLI layer - Command-line interface
//!
//! Contains the one-shot runner, exit-code mapping, and output formatting.

pub mod app;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    exit_code, run_oneshot, EXIT_PERMISSION_DENIED, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use presenter::Presenter;
