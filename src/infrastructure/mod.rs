//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the platform notification service and file system.

pub mod authorization;
pub mod notification;
pub mod resources;

// Re-export adapters
pub use authorization::PlatformAuthorizer;
pub use notification::NotifyRustCenter;
pub use resources::{LocalFiles, SystemSoundLibrary};
