/// birthday-book library
///
/// Core functionality for the interactive birthday book manager.

pub mod core;
pub mod error;
pub mod storage;

// Re-exports for convenience
pub use crate::core::{BirthdayBook, Command, Entry, Outcome, Session};
pub use error::{BookError, Result};
