//! View/render coordinator
//!
//! Owns the roster plus the current view, display mode and ring style, and
//! sequences view transitions on a caller-driven clock:
//!
//! 1. clear the old background decoration
//! 2. lay out every member for the new view (one pass, whole roster)
//! 3. start the position animation from the old positions to the new ones
//! 4. after the decoration delay, draw the new background and fade it in
//!
//! Display-mode and ring-style toggles only repaint; positions are untouched.
//!
//! Toggling the view while a transition is still running overwrites it: the
//! new animation starts from the currently displayed (interpolated)
//! positions and the pending decoration swap is rescheduled for the new view.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{BullseyeConfig, TransitionConfig};
use crate::layout::{LayoutEngine, ViewMode};
use crate::render::{RenderFrame, RenderedEntity};
use crate::roster::Roster;
use crate::types::Position;

/// How members are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dots,
    Photos,
}

impl DisplayMode {
    pub fn radius(&self) -> f64 {
        match self {
            Self::Dots => 6.0,
            Self::Photos => 24.0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dots => Self::Photos,
            Self::Photos => Self::Dots,
        }
    }
}

/// How bullseye rings are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RingStyle {
    #[default]
    Outline,
    Filled,
}

impl RingStyle {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Outline => Self::Filled,
            Self::Filled => Self::Outline,
        }
    }
}

/// Background drawn behind the members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Rings,
    LinearGuides,
}

impl Decoration {
    pub fn for_view(view: ViewMode) -> Self {
        match view {
            ViewMode::Circular => Self::Rings,
            ViewMode::Linear => Self::LinearGuides,
        }
    }
}

/// Observable steps of the coordinator, in the order they happen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CoordinatorEvent {
    /// A running transition was replaced after `elapsed`
    TransitionSuperseded { elapsed: Duration },
    DecorationCleared,
    PositionsComputed { view: ViewMode, members: usize },
    AnimationStarted { duration: Duration },
    DecorationDrawn { decoration: Decoration, fade: Duration },
    AnimationFinished { view: ViewMode },
    Repainted,
}

impl std::fmt::Display for CoordinatorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransitionSuperseded { elapsed } => {
                write!(f, "transition superseded after {}ms", elapsed.as_millis())
            }
            Self::DecorationCleared => write!(f, "decoration cleared"),
            Self::PositionsComputed { view, members } => {
                write!(f, "positions computed for {} members ({} view)", members, view)
            }
            Self::AnimationStarted { duration } => {
                write!(f, "animation started ({}ms)", duration.as_millis())
            }
            Self::DecorationDrawn { decoration, fade } => {
                let name = match decoration {
                    Decoration::Rings => "rings",
                    Decoration::LinearGuides => "linear guides",
                };
                write!(f, "{} drawn (fade {}ms)", name, fade.as_millis())
            }
            Self::AnimationFinished { view } => write!(f, "animation finished ({} view)", view),
            Self::Repainted => write!(f, "repainted"),
        }
    }
}

/// An in-flight position animation
#[derive(Debug, Clone)]
struct Transition {
    from: Vec<Position>,
    to: Vec<Position>,
    elapsed: Duration,
    duration: Duration,
    decoration_at: Duration,
    pending_decoration: Option<Decoration>,
}

impl Transition {
    /// Linear progress in [0, 1]
    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn positions(&self) -> Vec<Position> {
        let t = self.progress();
        self.from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| from.lerp(to, t))
            .collect()
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Single-threaded coordinator of layout, animation and painting
#[derive(Debug)]
pub struct ViewCoordinator {
    roster: Roster,
    engine: LayoutEngine,
    timing: TransitionConfig,
    view: ViewMode,
    display: DisplayMode,
    ring_style: RingStyle,
    decoration: Option<Decoration>,
    /// Time since the current decoration was drawn, for the fade-in
    decoration_age: Option<Duration>,
    transition: Option<Transition>,
    layout_passes: usize,
    repaints: usize,
}

impl ViewCoordinator {
    /// Initial render in the circular view
    pub fn new(roster: Roster, config: &BullseyeConfig) -> Self {
        Self::with_view(roster, config, ViewMode::default())
    }

    /// Initial render in `view`: lays the roster out once, decoration fully visible
    pub fn with_view(mut roster: Roster, config: &BullseyeConfig, view: ViewMode) -> Self {
        let engine = LayoutEngine::new(config);
        engine.apply(&mut roster, view);
        Self {
            roster,
            engine,
            timing: config.transition.clone(),
            view,
            display: DisplayMode::default(),
            ring_style: RingStyle::default(),
            decoration: Some(Decoration::for_view(view)),
            decoration_age: None,
            transition: None,
            layout_passes: 1,
            repaints: 0,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn ring_style(&self) -> RingStyle {
        self.ring_style
    }

    pub fn decoration(&self) -> Option<Decoration> {
        self.decoration
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Number of full layout passes so far (the initial render counts)
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    pub fn repaints(&self) -> usize {
        self.repaints
    }

    pub fn toggle_view(&mut self) -> Vec<CoordinatorEvent> {
        self.set_view(self.view.toggled())
    }

    /// Switch to `view`, starting a transition. No-op if already there and idle.
    pub fn set_view(&mut self, view: ViewMode) -> Vec<CoordinatorEvent> {
        if view == self.view && self.transition.is_none() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let from = match self.transition.take() {
            Some(running) => {
                debug!(
                    "Overwriting transition at {}ms",
                    running.elapsed.as_millis()
                );
                events.push(CoordinatorEvent::TransitionSuperseded {
                    elapsed: running.elapsed,
                });
                running.positions()
            }
            None => self.roster.positions(),
        };

        self.decoration = None;
        self.decoration_age = None;
        events.push(CoordinatorEvent::DecorationCleared);

        self.engine.apply(&mut self.roster, view);
        self.layout_passes += 1;
        self.view = view;
        events.push(CoordinatorEvent::PositionsComputed {
            view,
            members: self.roster.len(),
        });

        let duration = self.timing.duration();
        self.transition = Some(Transition {
            from,
            to: self.roster.positions(),
            elapsed: Duration::ZERO,
            duration,
            decoration_at: self.timing.decoration_delay(),
            pending_decoration: Some(Decoration::for_view(view)),
        });
        events.push(CoordinatorEvent::AnimationStarted { duration });

        info!("Transition to {} view started", view);
        events
    }

    /// Switch dots/photos. Repaint only.
    pub fn toggle_display(&mut self) -> Vec<CoordinatorEvent> {
        self.display = self.display.toggled();
        self.repaint()
    }

    /// Switch outline/filled rings. Repaint only.
    pub fn toggle_ring_style(&mut self) -> Vec<CoordinatorEvent> {
        self.ring_style = self.ring_style.toggled();
        self.repaint()
    }

    fn repaint(&mut self) -> Vec<CoordinatorEvent> {
        self.repaints += 1;
        debug!(
            "Repaint: display={:?} ring_style={:?}",
            self.display, self.ring_style
        );
        vec![CoordinatorEvent::Repainted]
    }

    /// Advance the clock by `dt`, firing any due steps
    pub fn advance(&mut self, dt: Duration) -> Vec<CoordinatorEvent> {
        let mut events = Vec::new();

        if let Some(age) = self.decoration_age.as_mut() {
            *age += dt;
        }

        let Some(transition) = self.transition.as_mut() else {
            return events;
        };
        transition.elapsed += dt;

        if transition.elapsed >= transition.decoration_at {
            if let Some(decoration) = transition.pending_decoration.take() {
                let age = transition.elapsed - transition.decoration_at;
                self.decoration = Some(decoration);
                self.decoration_age = Some(age);
                events.push(CoordinatorEvent::DecorationDrawn {
                    decoration,
                    fade: self.timing.decoration_fade(),
                });
            }
        }

        if transition.is_finished() {
            self.transition = None;
            events.push(CoordinatorEvent::AnimationFinished { view: self.view });
            info!("Transition to {} view finished", self.view);
        }
        events
    }

    /// Run the current transition to completion
    pub fn settle(&mut self) -> Vec<CoordinatorEvent> {
        let remaining = self
            .transition
            .as_ref()
            .map(|t| t.duration.saturating_sub(t.elapsed))
            .unwrap_or_default();
        let events = self.advance(remaining);
        // Finish the fade as well
        let fade = self.timing.decoration_fade();
        if let Some(age) = self.decoration_age.as_mut() {
            *age = (*age).max(fade);
        }
        events
    }

    /// Positions as currently displayed (interpolated mid-transition)
    pub fn displayed_positions(&self) -> Vec<Position> {
        match &self.transition {
            Some(transition) => transition.positions(),
            None => self.roster.positions(),
        }
    }

    fn decoration_opacity(&self) -> f64 {
        match (self.decoration, self.decoration_age) {
            (None, _) => 0.0,
            (Some(_), None) => 1.0,
            (Some(_), Some(age)) => {
                let fade = self.timing.decoration_fade();
                if fade.is_zero() {
                    1.0
                } else {
                    (age.as_secs_f64() / fade.as_secs_f64()).min(1.0)
                }
            }
        }
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> RenderFrame {
        let entities = self
            .roster
            .iter()
            .zip(self.displayed_positions())
            .map(|(record, position)| RenderedEntity::new(record, position, self.display))
            .collect();
        RenderFrame {
            view: self.view,
            display: self.display,
            ring_style: self.ring_style,
            decoration: self.decoration,
            decoration_opacity: self.decoration_opacity(),
            band_counts: self.roster.band_counts(),
            entities,
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
