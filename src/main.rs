// CLI binary is only available with the native feature
#![cfg(feature = "native")]

mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bullseye::{BullseyeConfig, DisplayMode, RingStyle, ViewMode};
use cli::{LayoutFormat, SummaryFormat};

#[derive(Parser)]
#[command(name = "bullseye")]
#[command(version, about = "Classify AI engagement and lay members out as a bullseye", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Config file (defaults to ./bullseye.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default bullseye.toml
    Init {
        /// Output path
        #[arg(short, long, default_value = bullseye::config::CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate a synthetic, classified roster
    Generate {
        /// Number of members (overrides config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Reference instant for classification (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Write the roster JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lay out a roster and emit the render frame (JSON) or an SVG scene
    Layout {
        /// Roster JSON (generated from config when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// View mode
        #[arg(long, value_enum, default_value_t = ViewMode::Circular)]
        view: ViewMode,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = LayoutFormat::Json)]
        format: LayoutFormat,

        /// Member display mode
        #[arg(long, value_enum, default_value_t = DisplayMode::Dots)]
        display: DisplayMode,

        /// Ring drawing style
        #[arg(long, value_enum, default_value_t = RingStyle::Outline)]
        ring_style: RingStyle,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the organisational columns as CSV
    Export {
        /// Roster JSON (generated from config when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show engagement level and band counts
    Summary {
        /// Roster JSON (generated from config when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },

    /// Simulate a view toggle and print the event timeline
    Transition {
        /// Roster JSON (generated from config when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target view (the transition starts from the other one)
        #[arg(long, value_enum, default_value_t = ViewMode::Linear)]
        to: ViewMode,

        /// Clock step in milliseconds
        #[arg(long, default_value = "100")]
        step_ms: u64,

        /// Toggle back after this many milliseconds
        #[arg(long)]
        interrupt_at: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Bullseye v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::Init { output, force } = &cli.command {
        return cli::cmd_init(output, *force);
    }

    let config = BullseyeConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Generate {
            count,
            seed,
            now,
            output,
        } => cli::generate::cmd_generate(&config, count, seed, now.as_deref(), output.as_deref()),
        Commands::Layout {
            input,
            view,
            format,
            display,
            ring_style,
            output,
        } => cli::layout::cmd_layout(
            &config,
            input.as_deref(),
            cli::layout::LayoutOptions {
                view,
                format,
                display,
                ring_style,
            },
            output.as_deref(),
        ),
        Commands::Export { input, output } => {
            cli::layout::cmd_export(&config, input.as_deref(), output.as_deref())
        }
        Commands::Summary { input, format } => {
            cli::summary::cmd_summary(&config, input.as_deref(), format)
        }
        Commands::Transition {
            input,
            to,
            step_ms,
            interrupt_at,
            format,
        } => cli::transition::cmd_transition(
            &config,
            input.as_deref(),
            to,
            step_ms,
            interrupt_at,
            format,
        ),
    }
}
