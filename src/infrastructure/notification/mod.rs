//! Notification infrastructure module
//!
//! Provides cross-platform notification delivery using notify-rust.

mod notify_rust;

pub use notify_rust::NotifyRustCenter;
