//! Core library for the Waymark leveling guide.
//!
//! This crate provides the business logic for an interactive act-by-act
//! progression checklist: dataset loading, persisted completion state and
//! settings, the pure view pipeline (optional-step filtering, progress
//! windowing, zone grouping, cursor navigation), and the Russian text
//! rewriting applied at display time.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waymark_core::{GuideBuilder, models::ViewState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a guide instance
//! let guide = GuideBuilder::new()
//!     .with_database_path(Some("waymark.db"))
//!     .build()
//!     .await?;
//!
//! // Render the current view
//! let view = guide.view(ViewState::default()).await?;
//! println!("{view}");
//!
//! // Check off the first visible step
//! let outcome = guide.toggle_position(1, ViewState::default()).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod dataset;
pub mod display;
pub mod engine;
pub mod error;
pub mod guide;
pub mod models;
pub mod store;
pub mod text;

// Re-export commonly used types
pub use dataset::DatasetSource;
pub use display::{LocalDateTime, OperationStatus};
pub use error::{GuideError, Result};
pub use guide::{Guide, GuideBuilder};
pub use models::{
    Act, Dataset, GameVersion, GroupToggleOutcome, GroupedStep, GuideView, Progress, Settings,
    SettingsPatch, StatusReport, Step, StepKind, StepView, ToggleOutcome, ViewMode, ViewState,
};
pub use store::Store;
