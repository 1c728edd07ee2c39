//! Persisted user settings and the game version key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two supported game variants.
///
/// Serialized as `"poe1"` / `"poe2"`; used as the namespace suffix for
/// persisted completion sets and as the dataset selection key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameVersion {
    /// Path of Exile
    Poe1,

    /// Path of Exile 2
    #[default]
    Poe2,
}

impl FromStr for GameVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poe1" | "1" => Ok(GameVersion::Poe1),
            "poe2" | "2" => Ok(GameVersion::Poe2),
            _ => Err(format!("Invalid game version: {s}")),
        }
    }
}

impl GameVersion {
    /// Convert to the persistence key representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVersion::Poe1 => "poe1",
            GameVersion::Poe2 => "poe2",
        }
    }

    /// Full game title for headers.
    pub fn title(&self) -> &'static str {
        match self {
            GameVersion::Poe1 => "Path of Exile 1",
            GameVersion::Poe2 => "Path of Exile 2",
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-tunable settings, persisted as a single JSON object.
///
/// Missing fields deserialize to their defaults, so a settings entry
/// written by an older build stays readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Window size for the step view
    pub visible_steps: u32,

    /// Whether hints are rendered
    pub show_hints: bool,

    /// Whether optional steps are included in the view
    pub show_optional: bool,

    /// Currently selected act number
    pub current_act: u32,

    /// Active game version
    pub game_version: GameVersion,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            visible_steps: 5,
            show_hints: true,
            show_optional: true,
            current_act: 1,
            game_version: GameVersion::default(),
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
///
/// The current act and game version have dedicated operations with their
/// own validation and are not part of the patch.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub visible_steps: Option<u32>,
    pub show_hints: Option<bool>,
    pub show_optional: Option<bool>,
}

impl SettingsPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.visible_steps.is_none() && self.show_hints.is_none() && self.show_optional.is_none()
    }

    /// Overwrites the matching settings fields with the patch's set fields.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(visible_steps) = self.visible_steps {
            settings.visible_steps = visible_steps;
        }
        if let Some(show_hints) = self.show_hints {
            settings.show_hints = show_hints;
        }
        if let Some(show_optional) = self.show_optional {
            settings.show_optional = show_optional;
        }
    }
}
