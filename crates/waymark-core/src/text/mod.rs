//! Rule-based text rewriting and pluralization.
//!
//! Step text ships in English phrasing and is rewritten into Russian for
//! display. The rewrite rules are ordered data tables in [`rules`]; the
//! engine in [`rewrite`] applies a table under one of two strategies, and
//! the per-field entry points wire the right tables together for
//! descriptions, hints, layout tips, and rewards. [`plural`] selects
//! grammatical forms for counts shown next to those strings.

pub mod plural;
pub mod rewrite;
pub mod rules;

pub use plural::{plural_form, task_label};
pub use rewrite::{
    rewrite, rewrite_description, rewrite_hint, rewrite_layout_tip, rewrite_reward, Strategy,
};
pub use rules::{Multiplicity, Rule};
