//! `layout` and `export` commands

use std::path::Path;

use bullseye::export::to_csv;
use bullseye::{BullseyeConfig, DisplayMode, RingStyle, SvgRenderer, ViewCoordinator, ViewMode};

use super::{load_roster, write_output, LayoutFormat};

/// Presentation choices for one layout run
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub view: ViewMode,
    pub format: LayoutFormat,
    pub display: DisplayMode,
    pub ring_style: RingStyle,
}

pub fn cmd_layout(
    config: &BullseyeConfig,
    input: Option<&Path>,
    options: LayoutOptions,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let roster = load_roster(config, input)?;
    let mut coordinator = ViewCoordinator::with_view(roster, config, options.view);
    if options.display != coordinator.display() {
        coordinator.toggle_display();
    }
    if options.ring_style != coordinator.ring_style() {
        coordinator.toggle_ring_style();
    }

    let frame = coordinator.frame();
    let content = match options.format {
        LayoutFormat::Json => frame.to_json()?,
        LayoutFormat::Svg => SvgRenderer::new(config).render(&frame),
    };
    write_output(&content, output)
}

pub fn cmd_export(
    config: &BullseyeConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let roster = load_roster(config, input)?;
    write_output(&to_csv(roster.records()), output)
}
