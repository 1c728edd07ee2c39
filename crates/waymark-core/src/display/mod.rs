//! Display formatting for guide views and operation results.
//!
//! All formatters produce markdown for rich terminal rendering. Display
//! implementations live here, separated from the model definitions, so the
//! data structures stay presentation-free.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for view and settings types
//! - [`status`]: Operation feedback messages ([`OperationStatus`])
//! - [`datetime`]: Date/time formatting utilities
//!
//! Text fields pass through the [`crate::text`] rewriter on the way out;
//! rendering is the only place rewriting happens, so stored and dataset
//! strings keep their original English phrasing.

pub mod datetime;
pub mod models;
pub mod status;

// Re-export commonly used types for convenience
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
