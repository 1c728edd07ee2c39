//! The rewrite engine and the per-field entry points.

use super::rules::{
    Rule, DESCRIPTION_PHRASE_RULES, DESCRIPTION_PREFIX_RULES, HINT_PHRASE_RULES, HINT_PREFIX_RULES,
    OPTIONAL_MARKER_RULES, REWARD_RULES,
};

/// How a rule table is applied to an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Scan rules in order and apply only the first one that matches.
    FirstMatchPrefix,
    /// Apply every rule in order, each against the output of the previous.
    AllMatchesSequential,
}

/// Apply a rule table to `text` under the given strategy.
///
/// Output depends only on the input and the table; empty input comes back
/// empty.
pub fn rewrite(text: &str, rules: &[Rule], strategy: Strategy) -> String {
    match strategy {
        Strategy::FirstMatchPrefix => {
            for rule in rules {
                if rule.is_match(text) {
                    return rule.apply(text);
                }
            }
            text.to_string()
        }
        Strategy::AllMatchesSequential => {
            let mut result = text.to_string();
            for rule in rules {
                result = rule.apply(&result);
            }
            result
        }
    }
}

/// Rewrite a step description for display.
///
/// At most one leading action rule applies, then the optional-step markers,
/// then the embedded phrase table.
pub fn rewrite_description(text: &str) -> String {
    let result = rewrite(text, &DESCRIPTION_PREFIX_RULES, Strategy::FirstMatchPrefix);
    let result = rewrite(&result, &OPTIONAL_MARKER_RULES, Strategy::AllMatchesSequential);
    rewrite(&result, &DESCRIPTION_PHRASE_RULES, Strategy::AllMatchesSequential)
}

/// Rewrite a hint for display.
///
/// The leading rules run sequentially, not first-match-wins: every matching
/// rule rewrites the string and later rules test the rewritten text.
pub fn rewrite_hint(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let result = rewrite(text, &HINT_PREFIX_RULES, Strategy::AllMatchesSequential);
    rewrite(&result, &HINT_PHRASE_RULES, Strategy::AllMatchesSequential)
}

/// Rewrite a layout tip for display. Layout tips share the hint tables.
pub fn rewrite_layout_tip(text: &str) -> String {
    rewrite_hint(text)
}

/// Rewrite a reward string for display.
///
/// The current table maps canonical game terms to themselves, so this only
/// normalizes capitalization; it exists so reward phrasing can change
/// without touching callers.
pub fn rewrite_reward(text: &str) -> String {
    rewrite(text, &REWARD_RULES, Strategy::AllMatchesSequential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_prefix_stops_after_one_rule() {
        let rules = vec![Rule::prefix("aa", "bb"), Rule::prefix("bb", "cc")];

        assert_eq!(rewrite("aa", &rules, Strategy::FirstMatchPrefix), "bb");
    }

    #[test]
    fn test_all_matches_sequential_cascades_through_rules() {
        let rules = vec![Rule::prefix("aa", "bb"), Rule::prefix("bb", "cc")];

        // The second rule sees the first rule's output.
        assert_eq!(rewrite("aa", &rules, Strategy::AllMatchesSequential), "cc");
    }

    #[test]
    fn test_no_matching_rule_leaves_text_unchanged() {
        let rules = vec![Rule::prefix("aa", "bb")];

        assert_eq!(rewrite("zz", &rules, Strategy::FirstMatchPrefix), "zz");
        assert_eq!(rewrite("zz", &rules, Strategy::AllMatchesSequential), "zz");
    }

    #[test]
    fn test_empty_input_is_returned_unchanged() {
        assert_eq!(rewrite_description(""), "");
        assert_eq!(rewrite_hint(""), "");
        assert_eq!(rewrite_layout_tip(""), "");
        assert_eq!(rewrite_reward(""), "");
    }

    #[test]
    fn test_description_leading_action() {
        assert_eq!(rewrite_description("Kill Hillock"), "Убить Hillock");
        assert_eq!(rewrite_description("Talk to Tarkleigh"), "Поговорить с Tarkleigh");
        assert_eq!(rewrite_description("Enter The Coast"), "Войти в The Coast");
    }

    #[test]
    fn test_description_applies_only_first_leading_action() {
        // "Take waypoint to" is listed before the bare "Take" rule and wins.
        // The later waypoint phrase rule lowercases the term.
        assert_eq!(
            rewrite_description("Take waypoint to The Coast"),
            "waypoint в The Coast"
        );
    }

    #[test]
    fn test_description_optional_markers() {
        assert_eq!(
            rewrite_description("Optional: Visit vendor"),
            "Опционально: Visit vendor"
        );
        assert_eq!(
            rewrite_description("[Optional] Visit vendor"),
            "[Опционально] Visit vendor"
        );
    }

    #[test]
    fn test_description_embedded_phrases_apply_in_order() {
        assert_eq!(
            rewrite_description("Grants Cold Resistance bonus"),
            "Даёт холоду сопротивление бонус"
        );
    }

    #[test]
    fn test_hint_leading_rule_then_phrases() {
        assert_eq!(rewrite_hint("Follow the road"), "Следуйте по дороге");
        assert_eq!(rewrite_hint("Stick to the wall"), "Держитесь стены");
    }

    #[test]
    fn test_hint_direction_words_rewrite_before_compound_directions() {
        // The bare direction entries precede the hyphenated ones in the
        // table, so they fire first inside compound directions.
        assert_eq!(
            rewrite_hint("Exit is north-east"),
            "Выход на севере-на востоке"
        );
    }

    #[test]
    fn test_hint_strips_articles() {
        assert_eq!(
            rewrite_hint("Boss is at the end of the zone"),
            "Boss is at end of зоны"
        );
    }

    #[test]
    fn test_layout_tip_shares_hint_tables() {
        assert_eq!(
            rewrite_layout_tip("Follow the road"),
            rewrite_hint("Follow the road")
        );
    }

    #[test]
    fn test_reward_rewrite_is_identity_for_canonical_terms() {
        assert_eq!(rewrite_reward("Quicksilver Flask"), "Quicksilver Flask");
        assert_eq!(
            rewrite_reward("Book of Skill + Passive Point"),
            "Book of Skill + Passive Point"
        );
    }

    #[test]
    fn test_reward_rewrite_normalizes_case_and_is_idempotent() {
        let once = rewrite_reward("quicksilver flask");
        assert_eq!(once, "Quicksilver Flask");
        assert_eq!(rewrite_reward(&once), once);
    }
}
