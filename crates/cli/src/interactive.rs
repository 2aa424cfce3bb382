//! Interactive play mode
//!
//! Reads commands from stdin while the engine runs on its own task;
//! the screen is redrawn whenever the published snapshot changes.

use console::style;
use gatekeeper_adapter::{build_scheduler, EngineHandle};
use gatekeeper_domain::{Action, SessionSnapshot};
use shared::{GameConfig, GatekeeperError};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::{render_snapshot, render_summary};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Choose(Action),
    Pause,
    Resume,
    TogglePause,
    Restart,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    /// Parse one line; `None` for blank input
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = line.trim_start_matches('/').to_ascii_lowercase();
        let input = match command.as_str() {
            "p" => Input::TogglePause,
            "pause" => Input::Pause,
            "resume" => Input::Resume,
            "restart" | "new" => Input::Restart,
            "s" | "status" => Input::Status,
            "h" | "help" | "?" => Input::Help,
            "q" | "quit" | "exit" => Input::Quit,
            other => match other.parse::<Action>() {
                Ok(action) => Input::Choose(action),
                Err(_) => Input::Unknown(line.to_string()),
            },
        };
        Some(input)
    }
}

/// Interactive CLI for one play session
pub struct InteractiveCli {
    config: GameConfig,
}

impl InteractiveCli {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Run until the player quits or stdin closes
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let scheduler = build_scheduler(&self.config)?;
        let (engine, task) = EngineHandle::spawn(scheduler, self.config.tick());

        println!("{}", style("Inner Gatekeeper").bold());
        println!("Thoughts and feelings are knocking. Decide who gets in.");
        print_help();
        println!();

        engine.start().await?;

        let mut updates = engine.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    let Some(input) = Input::parse(&line) else { continue };
                    if self.handle_input(&engine, input).await? {
                        break;
                    }
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = updates.borrow_and_update().clone();
                    print!("{}", render_snapshot(&snapshot));
                }
            }
        }

        let summary = engine.latest().summary();
        engine.shutdown().await?;
        task.await?;

        println!();
        print!("{}", render_summary(&summary));
        println!("Goodbye!");
        Ok(())
    }

    /// Returns true when the session should end
    async fn handle_input(&self, engine: &EngineHandle, input: Input) -> anyhow::Result<bool> {
        let result = match input {
            Input::Quit => return Ok(true),
            Input::Help => {
                print_help();
                Ok(())
            }
            Input::Status => {
                print!("{}", render_status(&engine.snapshot().await?));
                Ok(())
            }
            Input::Restart => engine.restart().await,
            Input::Pause => engine.pause().await,
            Input::Resume => engine.resume().await,
            Input::TogglePause => engine.toggle_pause().await.map(|_| ()),
            // the resolved state arrives with the next snapshot
            Input::Choose(action) => engine.choose(action).await.map(|_| ()),
            Input::Unknown(text) => {
                println!("Unknown command: {} (type h for help)", text);
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(false),
            Err(GatekeeperError::Game(err)) => {
                println!("{}", style(err).yellow());
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn render_status(snapshot: &SessionSnapshot) -> String {
    format!(
        "{}   {} visitors · {} correct · {}% accuracy · {:.1}s elapsed\n",
        render_snapshot(snapshot),
        snapshot.state.total_visitors(),
        snapshot.state.correct_choices(),
        snapshot.state.accuracy(),
        snapshot.elapsed.as_secs_f64()
    )
}

fn print_help() {
    println!("Commands:");
    println!("  a / r / c  - Accept, reject or challenge the visitor");
    println!("  p          - Pause or resume");
    println!("  pause      - Pause");
    println!("  resume     - Resume");
    println!("  restart    - Start over");
    println!("  status     - Show the full status");
    println!("  quit       - Exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_domain::SessionPhase;

    // ============== Input Parsing Tests ==============

    #[test]
    fn test_parse_actions() {
        assert_eq!(Input::parse("a"), Some(Input::Choose(Action::Accept)));
        assert_eq!(Input::parse("reject"), Some(Input::Choose(Action::Reject)));
        assert_eq!(Input::parse(" C "), Some(Input::Choose(Action::Challenge)));
    }

    #[test]
    fn test_parse_restart_is_not_reject() {
        assert_eq!(Input::parse("restart"), Some(Input::Restart));
        assert_eq!(Input::parse("r"), Some(Input::Choose(Action::Reject)));
    }

    #[test]
    fn test_parse_pause_aliases() {
        assert_eq!(Input::parse("p"), Some(Input::TogglePause));
        assert_eq!(Input::parse("/P"), Some(Input::TogglePause));
        assert_eq!(Input::parse("pause"), Some(Input::Pause));
        assert_eq!(Input::parse("Resume"), Some(Input::Resume));
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(Input::parse("quit"), Some(Input::Quit));
        assert_eq!(Input::parse("/exit"), Some(Input::Quit));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
    }

    #[test]
    fn test_parse_help_and_status() {
        assert_eq!(Input::parse("h"), Some(Input::Help));
        assert_eq!(Input::parse("/help"), Some(Input::Help));
        assert_eq!(Input::parse("status"), Some(Input::Status));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Input::parse(""), None);
        assert_eq!(Input::parse("   "), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Input::parse("dance"),
            Some(Input::Unknown("dance".to_string()))
        );
    }

    // ============== Command Handling Tests ==============

    fn engine() -> (EngineHandle, tokio::task::JoinHandle<()>) {
        let config = GameConfig::default().with_seed(5);
        let scheduler = build_scheduler(&config).unwrap();
        EngineHandle::spawn(scheduler, config.tick())
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_quit() {
        let (engine, _task) = engine();
        let cli = InteractiveCli::new(GameConfig::default());
        assert!(cli.handle_input(&engine, Input::Quit).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_errors_do_not_end_session() {
        let (engine, _task) = engine();
        let cli = InteractiveCli::new(GameConfig::default());

        // nothing started yet, so every engine command is refused
        assert!(!cli
            .handle_input(&engine, Input::Choose(Action::Accept))
            .await
            .unwrap());
        assert!(!cli.handle_input(&engine, Input::TogglePause).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_restart_and_pause() {
        let (engine, _task) = engine();
        let cli = InteractiveCli::new(GameConfig::default());
        engine.start().await.unwrap();

        assert!(!cli.handle_input(&engine, Input::TogglePause).await.unwrap());
        assert_eq!(engine.snapshot().await.unwrap().phase, SessionPhase::Paused);

        assert!(!cli.handle_input(&engine, Input::Restart).await.unwrap());
        let snapshot = engine.snapshot().await.unwrap();
        assert_eq!(snapshot.phase, SessionPhase::Running);
        assert_eq!(snapshot.epoch, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_resume_are_not_toggles() {
        let (engine, _task) = engine();
        let cli = InteractiveCli::new(GameConfig::default());
        engine.start().await.unwrap();

        // resume while running is refused and leaves the session running
        assert!(!cli.handle_input(&engine, Input::Resume).await.unwrap());
        assert_eq!(engine.snapshot().await.unwrap().phase, SessionPhase::Running);

        assert!(!cli.handle_input(&engine, Input::Pause).await.unwrap());
        assert_eq!(engine.snapshot().await.unwrap().phase, SessionPhase::Paused);

        // pause while paused is refused and leaves the session paused
        assert!(!cli.handle_input(&engine, Input::Pause).await.unwrap());
        assert_eq!(engine.snapshot().await.unwrap().phase, SessionPhase::Paused);

        assert!(!cli.handle_input(&engine, Input::Resume).await.unwrap());
        assert_eq!(engine.snapshot().await.unwrap().phase, SessionPhase::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_stopped_is_an_error() {
        let (engine, task) = engine();
        engine.shutdown().await.unwrap();
        task.await.unwrap();

        let cli = InteractiveCli::new(GameConfig::default());
        assert!(cli.handle_input(&engine, Input::Restart).await.is_err());
    }
}
