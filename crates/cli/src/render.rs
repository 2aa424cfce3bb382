//! Terminal rendering of sessions and visitors

use console::style;
use gatekeeper_domain::{
    Action, SessionPhase, SessionSnapshot, SessionSummary, Visitor, VisitorCategory, Weather,
    MAX_RESOURCE,
};

const METER_CELLS: usize = 10;

pub fn weather_icon(weather: Weather) -> &'static str {
    match weather {
        Weather::Sunny => "☀️",
        Weather::Cloudy => "⛅",
        Weather::Rainy => "🌧️",
        Weather::Stormy => "⛈️",
    }
}

/// `███████░░░  70`
pub fn meter(value: u8) -> String {
    let filled = usize::from(value) * METER_CELLS / usize::from(MAX_RESOURCE);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_CELLS - filled)
    );
    let bar = match value {
        0..=30 => style(bar).red(),
        31..=60 => style(bar).yellow(),
        _ => style(bar).green(),
    };
    format!("{} {:>3}", bar, value)
}

fn category_label(category: VisitorCategory) -> String {
    match category {
        VisitorCategory::Positive => style(category.as_str()).green().to_string(),
        VisitorCategory::Negative => style(category.as_str()).red().to_string(),
        VisitorCategory::Complex => style(category.as_str()).magenta().to_string(),
    }
}

fn stars(difficulty: u8) -> String {
    "★".repeat(usize::from(difficulty))
}

fn signed(value: i32) -> String {
    format!("{:+}", value)
}

/// One visitor with its three effects, for the catalog listing
pub fn render_catalog_entry(visitor: &Visitor) -> String {
    let mut out = format!(
        "{} {} [{}] best: {}\n",
        visitor.emoji(),
        style(visitor.name()).bold(),
        category_label(visitor.category()),
        visitor.best_choice()
    );
    if !visitor.description().is_empty() {
        out.push_str(&format!("   {}\n", style(visitor.description()).dim()));
    }
    for action in Action::ALL {
        let effect = visitor.effect(action);
        out.push_str(&format!(
            "   {:<9} health {:>4}  calm {:>4}  score {:>4}  {}\n",
            action.as_str(),
            signed(effect.health_delta),
            signed(effect.calm_delta),
            signed(effect.score_delta),
            effect.message
        ));
    }
    out.push_str(&format!(
        "   challenge difficulty {}\n",
        stars(visitor.challenge_difficulty())
    ));
    out
}

fn render_prompt(snapshot: &SessionSnapshot) -> String {
    let options: Vec<String> = snapshot
        .allowed_actions
        .iter()
        .map(|action| {
            let name = action.as_str();
            format!("[{}]{}", &name[..1], &name[1..])
        })
        .collect();
    options.join("  ")
}

/// Full status panel for the current session
pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    let state = &snapshot.state;
    let mut out = String::new();

    out.push_str(&format!(
        "{} Level {} · Score {} · {} {} · gatekeeper is {} {}\n",
        style("──").dim(),
        state.level(),
        state.score(),
        weather_icon(state.weather()),
        state.weather(),
        state.mood(),
        style("──").dim()
    ));
    out.push_str(&format!(
        "   Castle {}   Calm {}\n",
        meter(state.structure_health()),
        meter(state.inner_calm())
    ));

    match snapshot.phase {
        SessionPhase::NotStarted => out.push_str("   The gate is closed.\n"),
        SessionPhase::Paused => out.push_str(&format!("   {}\n", style("⏸ Paused").yellow())),
        SessionPhase::GameOver | SessionPhase::Victory => {
            out.push_str(&render_summary(&snapshot.summary()));
            return out;
        }
        SessionPhase::Running => {}
    }

    if let Some(feedback) = &snapshot.feedback {
        let text = if feedback.correct {
            style(feedback.text.as_str()).green()
        } else {
            style(feedback.text.as_str()).red()
        };
        out.push_str(&format!("   {}\n", text));
        if let Some(insight) = &feedback.insight {
            out.push_str(&format!("   💡 {}\n", style(insight).italic()));
        }
    }

    match &snapshot.current_visitor {
        Some(visitor) => {
            out.push_str(&format!(
                "   At the gate: {} {} ({})\n",
                visitor.emoji(),
                style(visitor.name()).bold(),
                category_label(visitor.category())
            ));
            if !visitor.description().is_empty() {
                out.push_str(&format!("   {}\n", style(visitor.description()).dim()));
            }
            if !snapshot.allowed_actions.is_empty() {
                out.push_str(&format!("   {}\n", render_prompt(snapshot)));
            }
        }
        None if snapshot.feedback.is_none() && snapshot.phase == SessionPhase::Running => {
            out.push_str("   Someone is approaching...\n");
        }
        None => {}
    }

    let approaching = snapshot.approaching();
    if !approaching.shown.is_empty() {
        let names: Vec<String> = approaching
            .shown
            .iter()
            .map(|v| format!("{} {}", v.emoji(), v.name()))
            .collect();
        let more = if approaching.more > 0 {
            format!(" +{} more", approaching.more)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "   {} {}{}\n",
            style("Approaching:").dim(),
            names.join(", "),
            more
        ));
    }

    out
}

pub fn render_summary(summary: &SessionSummary) -> String {
    let headline = match summary.outcome {
        SessionPhase::Victory => style("🏰 Victory! Your castle stands strong and serene.")
            .green()
            .bold()
            .to_string(),
        SessionPhase::GameOver => style("💔 The castle has fallen.").red().bold().to_string(),
        other => format!("Session {}", other),
    };
    format!(
        "   {}\n   Score {} · Level {} · {} visitors · {} correct · {}% accuracy\n",
        headline,
        summary.score,
        summary.level,
        summary.total_visitors,
        summary.correct_choices,
        summary.accuracy
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_domain::{Catalog, SchedulerSettings, ScriptedRandom, SessionScheduler, SessionState};
    use std::sync::Arc;
    use std::time::Duration;

    fn running_snapshot() -> SessionSnapshot {
        let mut scheduler = SessionScheduler::new(
            Arc::new(Catalog::builtin()),
            Box::new(ScriptedRandom::new(vec![7, 0, 1, 2, 3, 4])),
            SchedulerSettings::default(),
        );
        scheduler.start().unwrap();
        scheduler.advance(Duration::from_secs(1));
        scheduler.snapshot()
    }

    #[test]
    fn test_meter_fill() {
        console::set_colors_enabled(false);
        assert_eq!(meter(100), "██████████ 100");
        assert_eq!(meter(45), "████░░░░░░  45");
        assert_eq!(meter(0), "░░░░░░░░░░   0");
    }

    #[test]
    fn test_snapshot_shows_visitor_and_prompt() {
        console::set_colors_enabled(false);
        let text = render_snapshot(&running_snapshot());

        assert!(text.contains("Level 1"));
        assert!(text.contains("At the gate: 🌪️ Worry"));
        assert!(text.contains("[a]ccept  [r]eject  [c]hallenge"));
        assert!(text.contains("+2 more"));
    }

    #[test]
    fn test_snapshot_shows_feedback_and_insight() {
        console::set_colors_enabled(false);
        let mut scheduler = SessionScheduler::new(
            Arc::new(Catalog::builtin()),
            Box::new(ScriptedRandom::constant(6)),
            SchedulerSettings::default(),
        );
        scheduler.start().unwrap();
        scheduler.advance(Duration::from_secs(1));
        scheduler.choose(Action::Challenge).unwrap();

        let text = render_snapshot(&scheduler.snapshot());
        assert!(text.contains("✅ "));
        assert!(text.contains("💡"));
        assert!(!text.contains("At the gate"));
    }

    #[test]
    fn test_summary_lines() {
        console::set_colors_enabled(false);
        let state = SessionState::initial()
            .with_score(140)
            .with_progress(12, 9);
        let text = render_summary(&SessionSummary::new(SessionPhase::GameOver, &state));

        assert!(text.contains("The castle has fallen"));
        assert!(text.contains("Score 140"));
        assert!(text.contains("Level 2"));
        assert!(text.contains("75% accuracy"));
    }

    #[test]
    fn test_catalog_entry_lists_every_action() {
        console::set_colors_enabled(false);
        let anger = Catalog::builtin().by_id("anger").unwrap();
        let text = render_catalog_entry(&anger);

        assert!(text.contains("Anger"));
        assert!(text.contains("accept    health  -25"));
        assert!(text.contains("reject"));
        assert!(text.contains("challenge"));
    }
}
