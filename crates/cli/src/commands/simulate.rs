//! gatekeeper simulate command
//!
//! Plays whole sessions on the scheduler's virtual clock, jumping
//! straight from one timer deadline to the next.

use clap::{Args, ValueEnum};
use gatekeeper_adapter::{build_scheduler, SeededRandom};
use gatekeeper_domain::{Action, RandomSource, SessionPhase, SessionSummary, Visitor};
use indicatif::{ProgressBar, ProgressStyle};
use shared::GameConfig;

/// Mixed into the seed so the choice RNG doesn't mirror the visitor RNG
const CHOICE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// How the simulated gatekeeper picks an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// The visitor's best choice when allowed, else the least damaging action
    Best,
    /// Uniformly among the allowed actions
    Random,
}

impl Strategy {
    /// `allowed` is never empty while a visitor is presented
    pub fn pick(&self, visitor: &Visitor, allowed: &[Action], rng: &mut dyn RandomSource) -> Action {
        match self {
            Strategy::Best => {
                if allowed.contains(&visitor.best_choice()) {
                    return visitor.best_choice();
                }
                allowed
                    .iter()
                    .copied()
                    .max_by_key(|action| {
                        let effect = visitor.effect(*action);
                        (effect.health_delta + effect.calm_delta, effect.score_delta)
                    })
                    .unwrap_or(Action::Reject)
            }
            Strategy::Random => allowed
                .get(rng.pick(allowed.len()))
                .copied()
                .unwrap_or(Action::Reject),
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateCommand {
    /// Number of sessions to play
    #[arg(short, long, default_value_t = 100)]
    pub runs: u32,

    /// Choice strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Best)]
    pub strategy: Strategy,

    /// Base seed; run N uses seed + N
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop a session after this many visitors
    #[arg(long, default_value_t = 500)]
    pub max_visitors: u32,
}

impl SimulateCommand {
    pub fn run(&self, config: &GameConfig) -> anyhow::Result<()> {
        let base_seed = self.seed.or(config.seed);

        let progress = ProgressBar::new(u64::from(self.runs));
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} sessions ({eta})")?
                .progress_chars("=> "),
        );

        let mut report = SimulationReport::default();
        for run in 0..self.runs {
            let seed = base_seed.map(|seed| seed.wrapping_add(u64::from(run)));
            let run_config = GameConfig {
                seed,
                ..config.clone()
            };
            let mut chooser = SeededRandom::new(seed.map(|seed| seed ^ CHOICE_SEED_SALT));

            let summary = simulate_session(&run_config, self.strategy, self.max_visitors, &mut chooser)?;
            report.record(&summary);
            progress.inc(1);
        }
        progress.finish_and_clear();

        tracing::info!(runs = report.runs, strategy = ?self.strategy, "Simulation finished");
        print!("{}", report.render());
        Ok(())
    }
}

/// Play one session to the end (or to `max_visitors`)
pub fn simulate_session(
    config: &GameConfig,
    strategy: Strategy,
    max_visitors: u32,
    chooser: &mut dyn RandomSource,
) -> anyhow::Result<SessionSummary> {
    let mut scheduler = build_scheduler(config)?;
    scheduler.start()?;

    while !scheduler.phase().is_terminal() && scheduler.state().total_visitors() < max_visitors {
        match scheduler.current_visitor().cloned() {
            Some(visitor) => {
                let allowed = scheduler.allowed_actions();
                let action = strategy.pick(&visitor, &allowed, chooser);
                scheduler.choose(action)?;
            }
            None => match scheduler.next_deadline() {
                Some(deadline) => scheduler.advance_to(deadline),
                None => break,
            },
        }
        // nobody reads the event log here
        scheduler.drain_events();
    }

    Ok(scheduler.summary())
}

/// Outcome counts and averages over many sessions
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimulationReport {
    pub runs: u32,
    pub victories: u32,
    pub game_overs: u32,
    pub unfinished: u32,
    pub best_score: u32,
    total_score: u64,
    total_accuracy: u64,
    total_visitors: u64,
}

impl SimulationReport {
    pub fn record(&mut self, summary: &SessionSummary) {
        self.runs += 1;
        match summary.outcome {
            SessionPhase::Victory => self.victories += 1,
            SessionPhase::GameOver => self.game_overs += 1,
            _ => self.unfinished += 1,
        }
        self.best_score = self.best_score.max(summary.score);
        self.total_score += u64::from(summary.score);
        self.total_accuracy += u64::from(summary.accuracy);
        self.total_visitors += u64::from(summary.total_visitors);
    }

    fn mean(&self, total: u64) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            total as f64 / f64::from(self.runs)
        }
    }

    pub fn mean_score(&self) -> f64 {
        self.mean(self.total_score)
    }

    pub fn mean_accuracy(&self) -> f64 {
        self.mean(self.total_accuracy)
    }

    pub fn mean_visitors(&self) -> f64 {
        self.mean(self.total_visitors)
    }

    pub fn render(&self) -> String {
        format!(
            "Sessions:    {}\n\
             Victories:   {}\n\
             Game overs:  {}\n\
             Unfinished:  {}\n\
             Mean score:  {:.1} (best {})\n\
             Mean visits: {:.1}\n\
             Accuracy:    {:.1}%\n",
            self.runs,
            self.victories,
            self.game_overs,
            self.unfinished,
            self.mean_score(),
            self.best_score,
            self.mean_visitors(),
            self.mean_accuracy()
        )
    }
}
