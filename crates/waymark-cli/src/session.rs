//! Interactive session loop.
//!
//! A line-oriented loop over stdin carrying the same intents as the
//! one-shot commands. Unlike one-shots, the session keeps the navigation
//! cursor in memory, so `next`/`back` page through the act; the state
//! resets whenever the act or game version changes. Failed commands are
//! reported and the loop continues; only `quit`, end of input, or Ctrl-C
//! end the session.

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use waymark_core::{GameVersion, Guide, OperationStatus, ViewState};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
**Команды**

- `next` / `n` — следующая страница
- `back` / `b` — предыдущая страница (показывает весь список)
- `check <n>` / `c <n>` — отметить шаг по номеру
- `group <n>` / `g <n>` — отметить группу целиком
- `act <n>` — перейти к акту
- `version <poe1|poe2>` — сменить версию игры
- `status` — текущее состояние
- `help` — этот список
- `quit` / `q` — выход
";

/// Interactive guide session over stdin.
pub struct Session {
    guide: Guide,
    renderer: TerminalRenderer,
    state: ViewState,
}

impl Session {
    pub fn new(guide: Guide, renderer: TerminalRenderer) -> Self {
        Self {
            guide,
            renderer,
            state: ViewState::default(),
        }
    }

    /// Runs the loop until quit, end of input, or Ctrl-C.
    pub async fn run(mut self) -> Result<()> {
        self.show_view().await?;
        self.renderer.render("Введите `help` для списка команд.\n")?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("wm> ");
            std::io::stdout().flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = signal::ctrl_c() => {
                    println!();
                    break;
                }
            };

            let Some(line) = line else { break };
            if !self.dispatch(line.trim()).await? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one input line; returns `false` when the session should end.
    async fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            // Empty line redraws the current window
            self.show_view().await?;
            return Ok(true);
        };
        let arg = parts.next();

        match command {
            "next" | "n" => {
                match self.guide.navigate(1, self.state).await {
                    Ok(state) => {
                        self.state = state;
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                }
            }
            "back" | "b" => {
                match self.guide.navigate(-1, self.state).await {
                    Ok(state) => {
                        self.state = state;
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                }
            }
            "check" | "c" => match parse_number(arg) {
                Some(position) => match self.guide.toggle_position(position, self.state).await {
                    Ok(outcome) => {
                        self.renderer.render(&outcome.to_string())?;
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                },
                None => self.show_failure("Нужен номер шага, например: check 2")?,
            },
            "group" | "g" => match parse_number(arg) {
                Some(position) => match self.guide.toggle_group(position, self.state).await {
                    Ok(outcome) => {
                        self.renderer.render(&outcome.to_string())?;
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                },
                None => self.show_failure("Нужен номер группы, например: group 1")?,
            },
            "act" | "a" => match parse_number::<u32>(arg) {
                Some(number) => match self.guide.change_act(number).await {
                    Ok(_) => {
                        self.state = ViewState::default();
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                },
                None => self.show_failure("Нужен номер акта, например: act 2")?,
            },
            "version" | "ver" => match arg.map(str::parse::<GameVersion>) {
                Some(Ok(version)) => match self.guide.change_version(version).await {
                    Ok(_) => {
                        self.state = ViewState::default();
                        self.show_view().await?;
                    }
                    Err(e) => self.show_failure(&e.to_string())?,
                },
                Some(Err(e)) => self.show_failure(&e)?,
                None => self.show_failure("Нужна версия: version poe1 или version poe2")?,
            },
            "status" | "st" => match self.guide.status().await {
                Ok(report) => self.renderer.render(&report.to_string())?,
                Err(e) => self.show_failure(&e.to_string())?,
            },
            "help" | "h" | "?" => self.renderer.render(HELP)?,
            "quit" | "q" | "exit" => return Ok(false),
            other => {
                self.show_failure(&format!("Неизвестная команда: {other} (help для списка)"))?;
            }
        }

        Ok(true)
    }

    /// Renders the window for the current session state.
    ///
    /// A failed view (for example a dataset that no longer loads) is
    /// reported like any failed command; the session stays usable so the
    /// user can switch to a working version.
    async fn show_view(&self) -> Result<()> {
        match self.guide.view(self.state).await {
            Ok(view) => self.renderer.render(&view.to_string()),
            Err(e) => self.show_failure(&e.to_string()),
        }
    }

    fn show_failure(&self, message: &str) -> Result<()> {
        let status = OperationStatus::failure(message.to_string());
        self.renderer.render(&status.to_string())
    }
}

fn parse_number<T: std::str::FromStr>(arg: Option<&str>) -> Option<T> {
    arg.and_then(|a| a.parse().ok())
}
