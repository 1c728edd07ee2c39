//! Derived view-time models: checked steps and zone groups.

use super::Step;

/// A step paired with its completion flag for one view computation.
///
/// The flag is derived from completion-set membership on every
/// recomputation and is never persisted on the step itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub step: Step,
    pub checked: bool,
}

impl StepView {
    pub fn new(step: Step, checked: bool) -> Self {
        Self { step, checked }
    }
}

/// A display-time merge of consecutive same-zone steps.
///
/// Built fresh by the grouper on every view recomputation; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedStep {
    /// Zone label shown in the group header
    pub zone: String,

    /// Stable zone identifier of the first member, when present
    pub zone_id: Option<String>,

    /// Ordered member steps
    pub steps: Vec<StepView>,

    /// True iff every member step is checked
    pub all_checked: bool,

    /// First non-empty layout tip among members, in input order
    pub layout_tip: Option<String>,
}
