//! Step category to icon and color mapping.
//!
//! Categories map to an icon key, and icon keys map to a terminal glyph.
//! Both lookups are total: an icon key outside the glyph table falls back
//! to a bullet, and color lookups fall back to white.

use crate::models::StepKind;

/// Glyph used when an icon key has no entry in the glyph table.
pub const DEFAULT_GLYPH: &str = "•";

/// Color used when a category has no configured color.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Resolve an icon key to its terminal glyph.
pub fn glyph_for(icon_key: &str) -> &'static str {
    match icon_key {
        "arrow-right" => "➜",
        "waypoint" => "⚑",
        "home" => "🏛",
        "chat" => "💬",
        "exclamation" => "❗",
        "skull" => "☠",
        "lab" => "⚗",
        "star" => "★",
        "info" => "ℹ",
        _ => DEFAULT_GLYPH,
    }
}

fn icon_key(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Navigation => "arrow-right",
        StepKind::Waypoint => "waypoint",
        StepKind::Town => "home",
        StepKind::NpcQuest => "chat",
        StepKind::Quest => "exclamation",
        StepKind::KillBoss => "skull",
        StepKind::Trial => "lab",
        StepKind::Passive => "star",
        StepKind::Optional => "info",
    }
}

/// The display glyph for a step category.
pub fn icon_for(kind: StepKind) -> &'static str {
    glyph_for(icon_key(kind))
}

/// The hex color token for a step category.
pub fn color_for(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Navigation => "#E0E0E0",
        StepKind::Waypoint => "#00D4FF",
        StepKind::Town => "#FEC076",
        StepKind::NpcQuest => "#FFB84D",
        StepKind::Quest => "#FFEB3B",
        StepKind::KillBoss => "#FF5252",
        StepKind::Trial => "#4ADE80",
        StepKind::Passive => "#4ADE80",
        StepKind::Optional => "#9E9E9E",
    }
}

/// Whether a category is highlighted as high priority in step detail.
pub fn is_high_priority(kind: StepKind) -> bool {
    matches!(
        kind,
        StepKind::Passive | StepKind::Trial | StepKind::KillBoss
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_an_icon_and_color() {
        let kinds = [
            StepKind::KillBoss,
            StepKind::Town,
            StepKind::NpcQuest,
            StepKind::Navigation,
            StepKind::Waypoint,
            StepKind::Quest,
            StepKind::Optional,
            StepKind::Passive,
            StepKind::Trial,
        ];

        for kind in kinds {
            assert_ne!(icon_for(kind), DEFAULT_GLYPH);
            assert_ne!(color_for(kind), DEFAULT_COLOR);
        }
    }

    #[test]
    fn test_known_icons() {
        assert_eq!(icon_for(StepKind::KillBoss), "☠");
        assert_eq!(icon_for(StepKind::Waypoint), "⚑");
        assert_eq!(icon_for(StepKind::Passive), "★");
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(color_for(StepKind::KillBoss), "#FF5252");
        assert_eq!(color_for(StepKind::Waypoint), "#00D4FF");
        assert_eq!(color_for(StepKind::Optional), "#9E9E9E");
    }

    #[test]
    fn test_unknown_icon_key_falls_back_to_bullet() {
        assert_eq!(glyph_for("no-such-icon"), DEFAULT_GLYPH);
    }

    #[test]
    fn test_high_priority_kinds() {
        assert!(is_high_priority(StepKind::KillBoss));
        assert!(is_high_priority(StepKind::Trial));
        assert!(is_high_priority(StepKind::Passive));
        assert!(!is_high_priority(StepKind::Navigation));
        assert!(!is_high_priority(StepKind::Optional));
    }
}
