//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod authorizer;
pub mod center;
pub mod files;
pub mod sounds;

// Re-export common types
pub use authorizer::{AlertAuthorizer, AuthorizationResponse};
pub use center::{NotificationCenter, SubmissionError};
pub use files::FileStore;
pub use sounds::SoundLibrary;
