//! Pure view computation: filtering, windowing, zone grouping, and cursor
//! navigation.
//!
//! Every function here is a total, synchronous function of its inputs and
//! is recomputed from scratch on each state change. Nothing in this module
//! touches the store or the dataset cache.

use std::collections::HashSet;

use crate::models::{GroupedStep, Step, StepKind, StepView, ViewMode, ViewState};

/// Keep a step iff optional content is shown or the step is not optional.
pub fn filter_steps(steps: &[Step], show_optional: bool) -> Vec<Step> {
    steps
        .iter()
        .filter(|s| show_optional || s.kind != StepKind::Optional)
        .cloned()
        .collect()
}

/// Pair each step with its completion flag.
pub fn with_checked(steps: &[Step], completed: &HashSet<String>) -> Vec<StepView> {
    steps
        .iter()
        .map(|s| StepView::new(s.clone(), completed.contains(&s.id)))
        .collect()
}

fn clamp_index(value: i64, upper: usize) -> usize {
    value.clamp(0, upper as i64) as usize
}

/// Compute the visible window of steps for the cursor and mode.
///
/// The cursor may sit outside the list in either direction; the slice
/// bounds clamp it. In remaining-only mode the window is taken from the
/// unchecked steps, in their original relative order.
pub fn visible_window(
    filtered: &[Step],
    completed: &HashSet<String>,
    cursor: i64,
    mode: ViewMode,
    window_size: usize,
) -> Vec<StepView> {
    let views = with_checked(filtered, completed);

    match mode {
        ViewMode::ShowAll => {
            let len = views.len();
            let start = clamp_index(cursor, len);
            let end = clamp_index(cursor.saturating_add(window_size as i64), len);
            views[start..end].to_vec()
        }
        ViewMode::RemainingOnly => {
            let remaining: Vec<StepView> = views.into_iter().filter(|v| !v.checked).collect();
            let len = remaining.len();
            let start = clamp_index(cursor, len.saturating_sub(1));
            let end = clamp_index(start as i64 + window_size as i64, len);
            remaining[start..end].to_vec()
        }
    }
}

fn zones_match(group: &GroupedStep, step: &Step) -> bool {
    match (&group.zone_id, &step.zone_id) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a == b,
        _ => group.zone == step.zone,
    }
}

fn non_empty_tip(tip: Option<&str>) -> Option<String> {
    tip.filter(|t| !t.is_empty()).map(str::to_string)
}

/// Merge consecutive same-zone steps into display groups.
///
/// Zone identity prefers stable ids: when both sides carry a non-empty
/// `zone_id`, the ids are compared; otherwise the zone labels are. Each
/// group carries the first non-empty layout tip among its members and an
/// aggregate flag that is true iff every member is checked.
pub fn group_steps(views: &[StepView]) -> Vec<GroupedStep> {
    let mut grouped: Vec<GroupedStep> = Vec::new();

    for view in views {
        if let Some(group) = grouped.last_mut() {
            if zones_match(group, &view.step) {
                group.steps.push(view.clone());
                group.all_checked = group.steps.iter().all(|v| v.checked);
                if group.layout_tip.is_none() {
                    group.layout_tip = non_empty_tip(view.step.layout_tip.as_deref());
                }
                continue;
            }
        }

        grouped.push(GroupedStep {
            zone: view.step.zone.clone(),
            zone_id: view.step.zone_id.clone(),
            steps: vec![view.clone()],
            all_checked: view.checked,
            layout_tip: non_empty_tip(view.step.layout_tip.as_deref()),
        });
    }

    grouped
}

/// Advance or retreat the cursor, switching modes at the boundaries.
///
/// Backward navigation always switches to the full list so completed steps
/// can be reviewed, and does not clamp the cursor; the windower tolerates
/// out-of-range values. Forward navigation past the end of the full list
/// returns to the next outstanding task.
pub fn advance(direction: i64, state: ViewState, filtered_len: usize) -> ViewState {
    if direction < 0 {
        return ViewState::new(state.cursor + direction, ViewMode::ShowAll);
    }

    let target = state.cursor + direction;
    if target >= 0 && (target as usize) < filtered_len {
        return ViewState::new(target, state.mode);
    }

    if state.mode == ViewMode::ShowAll {
        return ViewState::new(0, ViewMode::RemainingOnly);
    }

    state
}
