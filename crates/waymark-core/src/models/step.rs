//! Step model definition and category tags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step categories.
///
/// The category drives icon and color selection (see [`crate::classify`])
/// and marks which steps the optional-content filter may hide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Boss fight required to progress
    KillBoss,

    /// Arrival in or return to a town hub
    Town,

    /// Conversation or quest turn-in with an NPC
    NpcQuest,

    /// Movement through a zone toward an exit
    Navigation,

    /// Waypoint activation
    Waypoint,

    /// Quest objective inside a zone
    Quest,

    /// Skippable side objective
    Optional,

    /// Passive skill point reward
    Passive,

    /// Ascendancy trial
    Trial,
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kill_boss" => Ok(StepKind::KillBoss),
            "town" => Ok(StepKind::Town),
            "npc_quest" => Ok(StepKind::NpcQuest),
            "navigation" => Ok(StepKind::Navigation),
            "waypoint" => Ok(StepKind::Waypoint),
            "quest" => Ok(StepKind::Quest),
            "optional" => Ok(StepKind::Optional),
            "passive" => Ok(StepKind::Passive),
            "trial" => Ok(StepKind::Trial),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl StepKind {
    /// Convert to the dataset string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::KillBoss => "kill_boss",
            StepKind::Town => "town",
            StepKind::NpcQuest => "npc_quest",
            StepKind::Navigation => "navigation",
            StepKind::Waypoint => "waypoint",
            StepKind::Quest => "quest",
            StepKind::Optional => "optional",
            StepKind::Passive => "passive",
            StepKind::Trial => "trial",
        }
    }
}

/// One atomic instruction in the progression sequence.
///
/// Steps are read-only reference data; completion state lives in the
/// persisted completion set, keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier, stable across sessions and dataset reloads
    pub id: String,

    /// Category tag driving icon, color, and optional filtering
    pub kind: StepKind,

    /// Human-readable location name
    pub zone: String,

    /// Stable location identifier, preferred over `zone` text for grouping
    /// when both steps being compared carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Free-text instruction, rewritten for display
    pub description: String,

    /// Short auxiliary note, rewritten for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Zone layout guidance, carried onto the enclosing group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_tip: Option<String>,

    /// Associated quest name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest: Option<String>,

    /// Reward description, subject to its own rewrite pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,

    /// Annotation shown only for optional steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_note: Option<String>,

    /// Suggested character level, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_level: Option<u32>,
}
