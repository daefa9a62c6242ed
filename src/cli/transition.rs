//! `transition` command
//!
//! Drives a [`ViewCoordinator`] on a fixed clock step and prints the events
//! it fires, optionally toggling back mid-flight to show the overwrite.

use std::path::Path;
use std::time::Duration;

use bullseye::{BullseyeConfig, CoordinatorEvent, ViewCoordinator, ViewMode};
use colored::Colorize;
use serde::Serialize;

use super::{load_roster, SummaryFormat};

/// Guard against a zero step spinning forever
const MAX_TICKS: usize = 10_000;

/// One event with the clock time it fired at
#[derive(Debug, Clone, Serialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: CoordinatorEvent,
}

/// Run a toggle to `to` and collect the timeline
pub fn simulate(
    coordinator: &mut ViewCoordinator,
    to: ViewMode,
    step: Duration,
    interrupt_at: Option<Duration>,
) -> Vec<TimedEvent> {
    let mut timeline = Vec::new();
    let mut clock = Duration::ZERO;
    let mut interrupt = interrupt_at;

    let stamp = |clock: Duration, events: Vec<CoordinatorEvent>| {
        events.into_iter().map(move |event| TimedEvent {
            at_ms: clock.as_millis() as u64,
            event,
        })
    };

    timeline.extend(stamp(clock, coordinator.set_view(to)));
    for _ in 0..MAX_TICKS {
        if !coordinator.is_animating() {
            break;
        }
        clock += step;
        timeline.extend(stamp(clock, coordinator.advance(step)));
        if interrupt.is_some_and(|at| clock >= at) && coordinator.is_animating() {
            interrupt = None;
            timeline.extend(stamp(clock, coordinator.toggle_view()));
        }
    }
    timeline
}

pub fn cmd_transition(
    config: &BullseyeConfig,
    input: Option<&Path>,
    to: ViewMode,
    step_ms: u64,
    interrupt_at: Option<u64>,
    format: SummaryFormat,
) -> anyhow::Result<()> {
    if step_ms == 0 {
        anyhow::bail!("--step-ms must be positive");
    }
    let roster = load_roster(config, input)?;
    let mut coordinator = ViewCoordinator::with_view(roster, config, to.toggled());
    let timeline = simulate(
        &mut coordinator,
        to,
        Duration::from_millis(step_ms),
        interrupt_at.map(Duration::from_millis),
    );

    match format {
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&timeline)?),
        SummaryFormat::Text => {
            println!(
                "{} {} → {}",
                "Transition".bright_cyan().bold(),
                to.toggled(),
                to
            );
            for entry in &timeline {
                let line = format!("{:>6}ms  {}", entry.at_ms, entry.event);
                match entry.event {
                    CoordinatorEvent::TransitionSuperseded { .. } => {
                        println!("{}", line.bright_yellow())
                    }
                    CoordinatorEvent::AnimationFinished { .. } => println!("{}", line.bright_green()),
                    _ => println!("{}", line),
                }
            }
            println!(
                "{} layout passes, final view {}",
                coordinator.layout_passes(),
                coordinator.view().to_string().bold()
            );
        }
    }
    Ok(())
}
