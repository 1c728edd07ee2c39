//! One-shot command handlers.
//!
//! Each handler runs one guide operation and renders the core display
//! types through the terminal renderer. Navigation state is per session
//! and never persisted, so one-shot commands always start from the
//! default view state (cursor 0, remaining-only mode).

use anyhow::{bail, Result};
use waymark_core::{GameVersion, Guide, OperationStatus, SettingsPatch, ViewState};

use crate::args::Commands;
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the guide and the renderer.
pub struct Cli {
    guide: Guide,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(guide: Guide, renderer: TerminalRenderer) -> Self {
        Self { guide, renderer }
    }

    /// Dispatches a parsed one-shot command.
    pub async fn handle(&self, command: Commands) -> Result<()> {
        match command {
            Commands::View => self.view().await,
            Commands::Check(args) => self.check(args.position).await,
            Commands::Group(args) => self.group(args.position).await,
            Commands::Next => self.navigate(1).await,
            Commands::Back => self.navigate(-1).await,
            Commands::Act(args) => self.act(args.number).await,
            Commands::Version(args) => self.version(args.version).await,
            Commands::Config(args) => self.config(args.into()).await,
            Commands::Reset(args) => self.reset(args.version, args.confirm).await,
            Commands::Status => self.status().await,
        }
    }

    async fn view(&self) -> Result<()> {
        let view = self.guide.view(ViewState::default()).await?;
        self.renderer.render(&view.to_string())
    }

    async fn check(&self, position: usize) -> Result<()> {
        let outcome = self
            .guide
            .toggle_position(position, ViewState::default())
            .await?;
        let view = self.guide.view(ViewState::default()).await?;
        self.renderer.render(&format!("{outcome}\n{view}"))
    }

    async fn group(&self, position: usize) -> Result<()> {
        let outcome = self
            .guide
            .toggle_group(position, ViewState::default())
            .await?;
        let view = self.guide.view(ViewState::default()).await?;
        self.renderer.render(&format!("{outcome}\n{view}"))
    }

    async fn navigate(&self, direction: i64) -> Result<()> {
        let state = self.guide.navigate(direction, ViewState::default()).await?;
        let view = self.guide.view(state).await?;
        self.renderer.render(&view.to_string())
    }

    async fn act(&self, number: u32) -> Result<()> {
        self.guide.change_act(number).await?;
        let status = OperationStatus::success(format!("Переключено на акт {number}"));
        let view = self.guide.view(ViewState::default()).await?;
        self.renderer.render(&format!("{status}\n{view}"))
    }

    async fn version(&self, version: GameVersion) -> Result<()> {
        self.guide.change_version(version).await?;
        let status = OperationStatus::success(format!("Переключено на {}", version.title()));
        let view = self.guide.view(ViewState::default()).await?;
        self.renderer.render(&format!("{status}\n{view}"))
    }

    async fn config(&self, patch: SettingsPatch) -> Result<()> {
        if patch.is_empty() {
            let settings = self.guide.settings().await?;
            return self.renderer.render(&format!("# Настройки\n\n{settings}"));
        }

        let settings = self.guide.update_settings(patch).await?;
        let status = OperationStatus::success("Настройки обновлены".to_string());
        self.renderer
            .render(&format!("{status}\n# Настройки\n\n{settings}"))
    }

    async fn reset(&self, version: Option<GameVersion>, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Resetting progress is irreversible; pass --confirm to proceed");
        }

        let version = match version {
            Some(version) => version,
            None => self.guide.settings().await?.game_version,
        };

        self.guide.reset_progress(version).await?;
        let status = OperationStatus::success(format!("Прогресс сброшен: {}", version.title()));
        self.renderer.render(&status.to_string())
    }

    async fn status(&self) -> Result<()> {
        let report = self.guide.status().await?;
        self.renderer.render(&report.to_string())
    }
}
