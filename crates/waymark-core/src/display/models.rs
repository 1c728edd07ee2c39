//! Display implementations for view and settings types.
//!
//! The guide view renders as markdown: an act header, an act progress
//! line, then one section per zone group. Groups and steps carry 1-based
//! numbers that match the positions accepted by the toggle operations.
//! Dataset text runs through the rewriter here and nowhere else.

use std::fmt;

use crate::classify;
use crate::models::{
    GroupToggleOutcome, GroupedStep, GuideView, Settings, StatusReport, StepView, ToggleOutcome,
};
use crate::text::{
    rewrite_description, rewrite_hint, rewrite_layout_tip, rewrite_reward, task_label,
};

use super::datetime::LocalDateTime;

/// Hints longer than this stay hidden inside multi-step groups; a group
/// with a single step shows its hint in full.
const INLINE_HINT_LIMIT: usize = 40;

fn on_off(value: bool) -> &'static str {
    if value {
        "да"
    } else {
        "нет"
    }
}

impl StepView {
    fn fmt_step_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        number: usize,
        show_hints: bool,
        inline_hint_limit: Option<usize>,
    ) -> fmt::Result {
        let checkbox = if self.checked { "[x]" } else { "[ ]" };
        let icon = classify::icon_for(self.step.kind);
        let description = rewrite_description(&self.step.description);

        if self.checked {
            write!(f, "{number}. {checkbox} {icon} ~~{description}~~")?;
        } else {
            write!(f, "{number}. {checkbox} {icon} {description}")?;
        }
        if let Some(quest) = &self.step.quest {
            write!(f, " (*{quest}*)")?;
        }
        writeln!(f)?;

        if show_hints {
            if let Some(hint) = &self.step.hint {
                let inline = match inline_hint_limit {
                    Some(limit) => hint.chars().count() <= limit,
                    None => true,
                };
                if inline && !hint.is_empty() {
                    writeln!(f, "  💡 *{}*", rewrite_hint(hint))?;
                }
            }
        }

        if let Some(reward) = &self.step.reward {
            writeln!(f, "  🎁 **НАГРАДА** ➔ {}", rewrite_reward(reward))?;
        }

        if let Some(note) = &self.step.optional_note {
            writeln!(f, "  *Примечание: {note}*")?;
        }

        Ok(())
    }
}

impl GroupedStep {
    /// Format the group as a numbered section.
    ///
    /// `index` numbers the group itself, `start_number` is the window-wide
    /// number of its first step; both match toggle positions.
    fn fmt_group(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        start_number: usize,
        show_hints: bool,
    ) -> fmt::Result {
        let count = self.steps.len();
        writeln!(f, "## {index}. 📍 {} ({count} {})", self.zone, task_label(count))?;
        writeln!(f)?;

        if let Some(tip) = &self.layout_tip {
            writeln!(f, "🗺️ *Совет по карте: {}*", rewrite_layout_tip(tip))?;
            writeln!(f)?;
        }

        let inline_hint_limit = if count > 1 {
            Some(INLINE_HINT_LIMIT)
        } else {
            None
        };
        for (offset, view) in self.steps.iter().enumerate() {
            view.fmt_step_line(f, start_number + offset, show_hints, inline_hint_limit)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for GuideView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {} • Act {}: {}",
            self.game_version.title(),
            self.act_number,
            self.act_name
        )?;
        writeln!(f)?;

        if let Some(level) = self.recommended_end_level {
            writeln!(f, "*Рекомендуемый уровень к концу акта: {level}*")?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "**Прогресс акта:** {}/{} ({}%)",
            self.progress.completed,
            self.progress.total,
            self.progress.percentage()
        )?;
        writeln!(f)?;

        if self.groups.is_empty() {
            writeln!(f, "🎉 **Все задачи выполнены!**")?;
            writeln!(f)?;
            writeln!(f, "Отличная работа! Переходи к следующему акту.")?;
            return Ok(());
        }

        let mut number = 1;
        for (i, group) in self.groups.iter().enumerate() {
            group.fmt_group(f, i + 1, number, self.show_hints)?;
            number += group.steps.len();
        }

        Ok(())
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = if self.now_checked { "[x]" } else { "[ ]" };
        writeln!(f, "{checkbox} {}", rewrite_description(&self.description))
    }
}

impl fmt::Display for GroupToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = if self.now_checked { "[x]" } else { "[ ]" };
        let count = self.step_ids.len();
        writeln!(
            f,
            "{checkbox} 📍 {} ({count} {})",
            self.zone,
            task_label(count)
        )
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Версия игры: {}", self.game_version.title())?;
        writeln!(f, "- Акт: {}", self.current_act)?;
        writeln!(f, "- Количество видимых шагов: {}", self.visible_steps)?;
        writeln!(f, "- Показывать подсказки: {}", on_off(self.show_hints))?;
        writeln!(
            f,
            "- Показывать опциональные шаги: {}",
            on_off(self.show_optional)
        )?;
        Ok(())
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Статус")?;
        writeln!(f)?;
        writeln!(f, "- Версия игры: {}", self.game_version.title())?;
        writeln!(
            f,
            "- Акт: {} (всего актов: {})",
            self.settings.current_act, self.act_count
        )?;
        writeln!(
            f,
            "- Прогресс акта: {}/{} ({}%)",
            self.progress.completed,
            self.progress.total,
            self.progress.percentage()
        )?;
        match &self.last_saved {
            Some(ts) => writeln!(f, "- Последнее сохранение: {}", LocalDateTime(ts))?,
            None => writeln!(f, "- Последнее сохранение: никогда")?,
        }
        writeln!(f, "- База данных: {}", self.database_path.display())?;
        Ok(())
    }
}
