//! pb-core: shared types, IDs, errors, and configuration.
//!
//! This crate is the foundational dependency for the other pb-* crates,
//! providing the photo identifier, the photo record and input shapes, a
//! unified error type, and application configuration.

pub mod config;
pub mod error;
pub mod ids;
pub mod photo;
pub mod timestamp;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use ids::PhotoId;
pub use photo::{PhotoInput, PhotoRecord};
