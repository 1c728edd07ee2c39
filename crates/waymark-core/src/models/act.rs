//! Act and dataset containers.

use serde::{Deserialize, Serialize};

use super::Step;

/// One major division of the progression, holding an ordered step sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Act {
    /// Act number, positive and unique within a dataset
    pub act_number: u32,

    /// Display name of the act
    pub act_name: String,

    /// Suggested character level at act completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_end_level: Option<u32>,

    /// Ordered steps of the act
    pub steps: Vec<Step>,
}

/// The full act sequence for one game version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Ordered acts of the campaign
    pub acts: Vec<Act>,
}

impl Dataset {
    /// Look up an act by its number.
    pub fn act(&self, number: u32) -> Option<&Act> {
        self.acts.iter().find(|a| a.act_number == number)
    }
}
