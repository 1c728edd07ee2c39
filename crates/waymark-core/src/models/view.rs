//! Ephemeral per-session view state and the computed view types returned
//! by guide operations.

use std::path::PathBuf;

use jiff::Timestamp;

use crate::models::{GameVersion, GroupedStep, Settings};

/// The two windowing modes for the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Show only steps not yet completed
    #[default]
    RemainingOnly,

    /// Show every step, completed included
    ShowAll,
}

/// Cursor position and mode for the current session.
///
/// The cursor is signed: backward navigation can push it below zero, and
/// the windower clamps it when slicing. Resets to the default whenever the
/// active dataset or act changes. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub cursor: i64,
    pub mode: ViewMode,
}

impl ViewState {
    pub fn new(cursor: i64, mode: ViewMode) -> Self {
        Self { cursor, mode }
    }
}

/// Completion counts over the filtered step list of the current act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion percentage, rounded to the nearest whole number.
    ///
    /// An empty list reads as 0%.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// The computed view of the current act: the visible window grouped by
/// zone, plus act metadata and progress counts.
#[derive(Debug, Clone)]
pub struct GuideView {
    pub game_version: GameVersion,
    pub act_number: u32,
    pub act_name: String,
    pub recommended_end_level: Option<u32>,
    pub mode: ViewMode,
    pub show_hints: bool,
    pub groups: Vec<GroupedStep>,
    pub progress: Progress,
}

/// Result of toggling a single step's completion flag.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub step_id: String,
    pub description: String,
    pub now_checked: bool,
}

/// Result of toggling a whole zone group.
///
/// Group toggles are all-or-nothing: either every member became checked
/// or every member became unchecked.
#[derive(Debug, Clone)]
pub struct GroupToggleOutcome {
    pub zone: String,
    pub step_ids: Vec<String>,
    pub now_checked: bool,
}

/// Snapshot of guide state for status output.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub game_version: GameVersion,
    pub settings: Settings,
    pub act_count: usize,
    pub progress: Progress,
    pub last_saved: Option<Timestamp>,
    pub database_path: PathBuf,
}
