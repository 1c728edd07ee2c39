//! Guide operations: view computation, toggles, navigation, and settings.
//!
//! Persistence is best-effort throughout: a store that cannot be opened or
//! written is logged and the operation reports its in-memory outcome.
//! Errors surfaced to callers are domain errors (unknown step, act, or
//! input) and dataset load failures.

use tokio::task;

use super::Guide;
use crate::{
    engine,
    error::{GuideError, Result},
    models::{
        GameVersion, GroupToggleOutcome, GuideView, Progress, Settings, SettingsPatch,
        StatusReport, ToggleOutcome, ViewState,
    },
    store::Store,
};

impl Guide {
    /// Computes the grouped view of the current act for a session's view
    /// state.
    pub async fn view(&self, state: ViewState) -> Result<GuideView> {
        let ctx = self.load_context().await?;
        let act = ctx.act()?;

        let filtered = engine::filter_steps(&act.steps, ctx.settings.show_optional);
        let window = engine::visible_window(
            &filtered,
            &ctx.completed,
            state.cursor,
            state.mode,
            ctx.settings.visible_steps as usize,
        );
        let groups = engine::group_steps(&window);

        let completed = filtered
            .iter()
            .filter(|s| ctx.completed.contains(&s.id))
            .count();

        Ok(GuideView {
            game_version: ctx.settings.game_version,
            act_number: act.act_number,
            act_name: act.act_name.clone(),
            recommended_end_level: act.recommended_end_level,
            mode: state.mode,
            show_hints: ctx.settings.show_hints,
            groups,
            progress: Progress {
                completed,
                total: filtered.len(),
            },
        })
    }

    /// Toggles the completion flag of a step by id within the current act.
    pub async fn toggle_step(&self, step_id: &str) -> Result<ToggleOutcome> {
        let mut ctx = self.load_context().await?;

        let (id, description) = {
            let act = ctx.act()?;
            let step = act
                .steps
                .iter()
                .find(|s| s.id == step_id)
                .ok_or_else(|| GuideError::StepNotFound {
                    id: step_id.to_string(),
                })?;
            (step.id.clone(), step.description.clone())
        };

        let now_checked = if ctx.completed.remove(&id) {
            false
        } else {
            ctx.completed.insert(id.clone());
            true
        };

        let db_path = self.db_path.clone();
        let version = ctx.settings.game_version;
        let completed = ctx.completed;
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.save_progress(version, &completed),
            Err(e) => log::warn!("Progress not persisted, store unavailable: {e}"),
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })?;

        Ok(ToggleOutcome {
            step_id: id,
            description,
            now_checked,
        })
    }

    /// Toggles a step addressed by its 1-based position in the currently
    /// visible window.
    pub async fn toggle_position(
        &self,
        position: usize,
        state: ViewState,
    ) -> Result<ToggleOutcome> {
        let mut ctx = self.load_context().await?;

        let (id, description) = {
            let act = ctx.act()?;
            let filtered = engine::filter_steps(&act.steps, ctx.settings.show_optional);
            let window = engine::visible_window(
                &filtered,
                &ctx.completed,
                state.cursor,
                state.mode,
                ctx.settings.visible_steps as usize,
            );

            let view = position
                .checked_sub(1)
                .and_then(|i| window.get(i))
                .ok_or_else(|| {
                    GuideError::invalid_input("position").with_reason(format!(
                        "No visible step at position {position} (window has {})",
                        window.len()
                    ))
                })?;
            (view.step.id.clone(), view.step.description.clone())
        };

        let now_checked = if ctx.completed.remove(&id) {
            false
        } else {
            ctx.completed.insert(id.clone());
            true
        };

        let db_path = self.db_path.clone();
        let version = ctx.settings.game_version;
        let completed = ctx.completed;
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.save_progress(version, &completed),
            Err(e) => log::warn!("Progress not persisted, store unavailable: {e}"),
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })?;

        Ok(ToggleOutcome {
            step_id: id,
            description,
            now_checked,
        })
    }

    /// Toggles a whole zone group addressed by its 1-based position among
    /// the currently visible groups.
    ///
    /// The flip is all-or-nothing: a fully checked group becomes fully
    /// unchecked, any other group becomes fully checked.
    pub async fn toggle_group(
        &self,
        position: usize,
        state: ViewState,
    ) -> Result<GroupToggleOutcome> {
        let mut ctx = self.load_context().await?;

        let (zone, step_ids, was_all_checked) = {
            let act = ctx.act()?;
            let filtered = engine::filter_steps(&act.steps, ctx.settings.show_optional);
            let window = engine::visible_window(
                &filtered,
                &ctx.completed,
                state.cursor,
                state.mode,
                ctx.settings.visible_steps as usize,
            );
            let groups = engine::group_steps(&window);

            let group = position
                .checked_sub(1)
                .and_then(|i| groups.get(i))
                .ok_or_else(|| {
                    GuideError::invalid_input("position").with_reason(format!(
                        "No visible group at position {position} (window has {})",
                        groups.len()
                    ))
                })?;

            let ids: Vec<String> = group.steps.iter().map(|v| v.step.id.clone()).collect();
            (group.zone.clone(), ids, group.all_checked)
        };

        if was_all_checked {
            for id in &step_ids {
                ctx.completed.remove(id);
            }
        } else {
            for id in &step_ids {
                ctx.completed.insert(id.clone());
            }
        }

        let db_path = self.db_path.clone();
        let version = ctx.settings.game_version;
        let completed = ctx.completed;
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.save_progress(version, &completed),
            Err(e) => log::warn!("Progress not persisted, store unavailable: {e}"),
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })?;

        Ok(GroupToggleOutcome {
            zone,
            step_ids,
            now_checked: !was_all_checked,
        })
    }

    /// Moves the cursor one position in either direction, switching view
    /// modes at the list boundaries.
    ///
    /// Navigation state is per session and never persisted; the returned
    /// state replaces the caller's.
    pub async fn navigate(&self, direction: i64, state: ViewState) -> Result<ViewState> {
        let ctx = self.load_context().await?;
        let act = ctx.act()?;

        let filtered = engine::filter_steps(&act.steps, ctx.settings.show_optional);
        Ok(engine::advance(direction, state, filtered.len()))
    }

    /// Switches to another act of the active dataset.
    ///
    /// The caller should reset its view state after a successful switch.
    pub async fn change_act(&self, number: u32) -> Result<Settings> {
        let ctx = self.load_context().await?;

        if ctx.dataset.act(number).is_none() {
            return Err(GuideError::ActNotFound { number });
        }

        let db_path = self.db_path.clone();
        let fallback = ctx.settings;
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => {
                let mut settings = store.load_settings();
                settings.current_act = number;
                store.save_settings(&settings);
                settings
            }
            Err(e) => {
                log::warn!("Act change not persisted, store unavailable: {e}");
                Settings {
                    current_act: number,
                    ..fallback
                }
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// Switches the active game version and returns to its first act.
    ///
    /// The target dataset is loaded before anything is persisted, so a
    /// version with a broken dataset is never committed. Settings are
    /// re-read at write time; only the version and act fields are
    /// overwritten. The caller should reset its view state after a
    /// successful switch.
    pub async fn change_version(&self, version: GameVersion) -> Result<Settings> {
        self.datasets.load(version).await?;

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => {
                let mut settings = store.load_settings();
                settings.game_version = version;
                settings.current_act = 1;
                store.save_settings(&settings);
                settings
            }
            Err(e) => {
                log::warn!("Version change not persisted, store unavailable: {e}");
                Settings {
                    game_version: version,
                    current_act: 1,
                    ..Settings::default()
                }
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// Applies a partial settings update and returns the updated settings.
    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings> {
        if let Some(visible_steps) = patch.visible_steps {
            if visible_steps == 0 {
                return Err(GuideError::invalid_input("visible_steps")
                    .with_reason("Must be at least 1"));
            }
        }

        let db_path = self.db_path.clone();
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => {
                let mut settings = store.load_settings();
                patch.apply(&mut settings);
                store.save_settings(&settings);
                settings
            }
            Err(e) => {
                log::warn!("Settings update not persisted, store unavailable: {e}");
                let mut settings = Settings::default();
                patch.apply(&mut settings);
                settings
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// Reads the current settings without modifying anything.
    pub async fn settings(&self) -> Result<Settings> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.load_settings(),
            Err(e) => {
                log::warn!("Store unavailable, using default settings: {e}");
                Settings::default()
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// Deletes all completion state for a game version.
    pub async fn reset_progress(&self, version: GameVersion) -> Result<()> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.reset_progress(version),
            Err(e) => log::warn!("Progress not reset, store unavailable: {e}"),
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// Reports current version, act, progress, and store metadata.
    pub async fn status(&self) -> Result<StatusReport> {
        let ctx = self.load_context().await?;
        let act = ctx.act()?;

        let filtered = engine::filter_steps(&act.steps, ctx.settings.show_optional);
        let completed = filtered
            .iter()
            .filter(|s| ctx.completed.contains(&s.id))
            .count();
        let progress = Progress {
            completed,
            total: filtered.len(),
        };

        let db_path = self.db_path.clone();
        let last_saved = task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => store.last_saved(),
            Err(e) => {
                log::warn!("Store unavailable, no last save time: {e}");
                None
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })?;

        Ok(StatusReport {
            game_version: ctx.settings.game_version,
            settings: ctx.settings,
            act_count: ctx.dataset.acts.len(),
            progress,
            last_saved,
            database_path: self.db_path.clone(),
        })
    }
}
