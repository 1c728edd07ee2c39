//! Command-line argument definitions using clap's derive API.
//!
//! Argument structs stay free of business logic: they parse and validate
//! the command line, then convert into plain values or core parameter
//! types (`SettingsPatch`) consumed by the handlers in [`crate::cli`].

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waymark_core::{GameVersion, SettingsPatch};

/// Main command-line interface for the Waymark leveling guide
///
/// Waymark walks a character through the campaign as an ordered checklist:
/// steps are grouped by zone, completion is persisted per game version, and
/// the view pages through remaining or all steps. Run without a subcommand
/// to start an interactive session.
#[derive(Parser)]
#[command(version, about, name = "wm")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waymark/waymark.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory with dataset override files (poe1.json / poe2.json).
    /// Defaults to $XDG_DATA_HOME/waymark; embedded datasets are used when
    /// no override exists
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available one-shot commands
///
/// Every command reads and writes the same persisted state the interactive
/// session uses, so one-shot invocations and sessions can be mixed freely.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current step window
    #[command(alias = "v")]
    View,
    /// Toggle completion of a step by its visible position
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Toggle a whole zone group by its visible position
    #[command(alias = "g")]
    Group(GroupArgs),
    /// Advance the view window
    #[command(alias = "n")]
    Next,
    /// Step the view window back, switching to the full list
    #[command(alias = "b")]
    Back,
    /// Switch to another act
    #[command(alias = "a")]
    Act(ActArgs),
    /// Switch the active game version
    #[command(alias = "ver")]
    Version(VersionArgs),
    /// Show or change settings
    #[command(alias = "cfg")]
    Config(ConfigArgs),
    /// Clear completion state for a game version
    Reset(ResetArgs),
    /// Show version, act, progress, and store details
    #[command(alias = "st")]
    Status,
}

/// Toggle completion of a single step
#[derive(ClapArgs)]
pub struct CheckArgs {
    /// 1-based position of the step in the current window
    #[arg(help = "1-based position of the step in the current window")]
    pub position: usize,
}

/// Toggle a whole zone group
///
/// The flip is all-or-nothing: a fully completed group becomes fully
/// uncompleted, any other group becomes fully completed.
#[derive(ClapArgs)]
pub struct GroupArgs {
    /// 1-based position of the group in the current window
    #[arg(help = "1-based position of the group in the current window")]
    pub position: usize,
}

/// Switch to another act of the active dataset
#[derive(ClapArgs)]
pub struct ActArgs {
    /// Act number to switch to
    #[arg(help = "Act number to switch to")]
    pub number: u32,
}

/// Switch the active game version
///
/// Completion state is kept per version; switching never touches the other
/// version's progress. The act selection returns to act 1.
#[derive(ClapArgs)]
pub struct VersionArgs {
    /// Game version: poe1 or poe2
    #[arg(help = "Game version to activate (poe1 or poe2)")]
    pub version: GameVersion,
}

/// Show or change settings
///
/// With no flags the current settings are printed. Each flag updates one
/// field; unset fields are left unchanged.
#[derive(ClapArgs)]
pub struct ConfigArgs {
    /// Number of steps shown per window (at least 1)
    #[arg(long, help = "Number of steps shown per window (at least 1)")]
    pub visible_steps: Option<u32>,

    /// Whether hints are rendered (true/false)
    #[arg(long, help = "Whether hints are rendered")]
    pub show_hints: Option<bool>,

    /// Whether optional steps are included (true/false)
    #[arg(long, help = "Whether optional steps are included in the view")]
    pub show_optional: Option<bool>,
}

impl From<ConfigArgs> for SettingsPatch {
    fn from(val: ConfigArgs) -> Self {
        SettingsPatch {
            visible_steps: val.visible_steps,
            show_hints: val.show_hints,
            show_optional: val.show_optional,
        }
    }
}

/// Clear completion state for a game version
#[derive(ClapArgs)]
pub struct ResetArgs {
    /// Game version to reset; defaults to the active one
    #[arg(help = "Game version to reset (poe1 or poe2); defaults to the active one")]
    pub version: Option<GameVersion>,

    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}
