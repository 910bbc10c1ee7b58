//! Kinetic Clock CLI
//!
//! Run with: cargo run -- [--skin kinetic|minimal|json] [--once]
//!
//! # Configuration
//!
//! Settings come from the first config file found (see `kinetic-clock config`
//! for a template), then `KINETIC_CLOCK_*` environment variables, then
//! command-line flags. `RUST_LOG` overrides the log level.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kinetic_clock::{
    bootstrap_subscriber, generate_default_config, init_logging, ClockApp, Config, Skin,
};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kinetic-clock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A realtime clock with a crisp, kinetic UI")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the clock (default)
    Run(RunArgs),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Skin: kinetic, minimal or json
    #[arg(short, long)]
    pub skin: Option<Skin>,

    /// Milliseconds between ticks
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Freeze blinking separators and the live pulse
    #[arg(long)]
    pub reduced_motion: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Draw one frame and exit
    #[arg(long)]
    pub once: bool,

    /// Exit after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(cli.run)) {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    eprintln!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Commands::Run(args) => run(cli.config, args).await,
    }
}

async fn run(config_path: Option<PathBuf>, args: RunArgs) -> anyhow::Result<()> {
    // Config problems surface before the real subscriber exists
    let mut config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        match config_path {
            Some(path) => Config::load_with_env(&path),
            None => Ok(Config::load_default()),
        }
    })?;
    apply_args(&mut config, &args);
    config.validate()?;

    init_logging(&config.logging)?;
    tracing::info!("Kinetic Clock v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let is_terminal = stdout.is_terminal();
    if !is_terminal {
        config.display.color = false;
    }

    let mut app = ClockApp::from_config(&config).with_terminal(is_terminal);
    if let Some(ticks) = args.ticks {
        app = app.with_max_ticks(ticks);
    }

    if args.once {
        app.with_alternate_screen(false).render_once(stdout.lock())?;
        return Ok(());
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let summary = app.run(stdout.lock(), shutdown).await?;
    tracing::info!(frames = summary.frames, ticks = summary.ticks, "Goodbye");
    Ok(())
}

/// Command-line flags win over file and environment settings
fn apply_args(config: &mut Config, args: &RunArgs) {
    if let Some(skin) = args.skin {
        config.display.skin = skin;
    }
    if let Some(ms) = args.interval_ms {
        config.clock.tick_interval_ms = ms;
    }
    if args.reduced_motion {
        config.display.reduced_motion = true;
    }
    if args.no_color {
        config.display.color = false;
    }
}
