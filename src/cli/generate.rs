//! `generate` command

use std::path::Path;

use bullseye::{BullseyeConfig, RosterGenerator};
use tracing::info;

use super::{parse_now, write_output};

pub fn cmd_generate(
    config: &BullseyeConfig,
    count: Option<usize>,
    seed: Option<u64>,
    now: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let now = parse_now(now)?;
    let count = count.unwrap_or(config.generator.count);
    let seed = seed.unwrap_or(config.generator.seed);
    info!("Generating {} members (seed {}) at {}", count, seed, now);

    let roster = RosterGenerator::new(seed, now).generate(count);
    write_output(&roster.to_json()?, output)
}
