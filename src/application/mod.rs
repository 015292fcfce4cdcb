//! Application layer - Use cases and port interfaces
//!
//! Orchestrates the delivery pipeline over the port traits; everything here
//! is testable with in-process fakes.

pub mod build;
pub mod deliver;
pub mod ports;
pub mod sound;

// Re-export common types
pub use build::build_content;
pub use deliver::{DeliverNotificationUseCase, DeliveryOutcome, DeliveryState};
pub use sound::{resolve_sound, SoundResolution};
