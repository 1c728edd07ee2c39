//! Data models for the leveling guide.
//!
//! This module contains the core domain models: read-only dataset types
//! ([`Step`], [`Act`], [`Dataset`]), persisted state ([`Settings`],
//! [`GameVersion`]), and the derived view-time types ([`StepView`],
//! [`GroupedStep`], [`ViewState`]) that the windower and grouper produce
//! and consume. Display implementations live in [`crate::display`] to keep
//! data structures separate from presentation.
//!
//! # Model lifecycles
//!
//! - Dataset types are loaded once per game version and shared immutably.
//! - [`Settings`] and the per-version completion set round-trip through the
//!   store as JSON; missing or corrupt entries fall back to defaults.
//! - View-time types are rebuilt from scratch on every recomputation and
//!   are never persisted.
//!
//! # Examples
//!
//! ```rust
//! use waymark_core::models::{Settings, GameVersion};
//!
//! let settings = Settings::default();
//! assert_eq!(settings.visible_steps, 5);
//! assert_eq!(settings.game_version, GameVersion::Poe2);
//! ```

pub mod act;
pub mod group;
pub mod settings;
pub mod step;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use act::{Act, Dataset};
pub use group::{GroupedStep, StepView};
pub use settings::{GameVersion, Settings, SettingsPatch};
pub use step::{Step, StepKind};
pub use view::{
    GroupToggleOutcome, GuideView, Progress, StatusReport, ToggleOutcome, ViewMode, ViewState,
};
