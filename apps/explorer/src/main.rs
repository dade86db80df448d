use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaprekar_core::{explore, survey, validate, Exploration, Outcome};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod session;

use config::{load_settings, Settings, DEFAULT_CONFIG_PATH};
use render::Renderer;
use session::{run_interactive, ChannelInput, Input, Session};

#[derive(Parser, Debug)]
#[command(
    name = "kaprekar",
    version,
    about = "Explore Kaprekar's constant (6174) for 4-digit numbers with distinct digits"
)]
struct Cli {
    /// Settings file; missing files fall back to defaults
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Step ceiling for each exploration
    #[arg(long)]
    max_steps: Option<usize>,
    #[arg(long)]
    no_color: bool,
    /// Log filter used when RUST_LOG is unset (also read from KAPREKAR_LOG)
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Explore a single starting number and exit
    Explore {
        #[arg(allow_hyphen_values = true)]
        number: String,
        #[arg(long)]
        json: bool,
    },
    /// Only validate a starting number
    Check {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Explore every valid starting number and report the step distribution
    Survey,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    start: u16,
    steps: usize,
    final_number: u16,
    reached_constant: bool,
    outcome: Outcome,
    sequence: &'a [u16],
}

impl<'a> From<&'a Exploration> for JsonReport<'a> {
    fn from(exploration: &'a Exploration) -> Self {
        Self {
            start: exploration.start,
            steps: exploration.steps(),
            final_number: exploration.final_number(),
            reached_constant: exploration.reached_constant(),
            outcome: exploration.outcome,
            sequence: &exploration.sequence,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut settings = load_settings(&cli.config);
    apply_cli(&mut settings, &cli);
    info!(max_steps = settings.max_steps, color = settings.color, "settings loaded");

    let renderer = Renderer::new(settings.color);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            let session = Session::new(&settings);
            let (mut input, interrupts) = ChannelInput::stdin();
            ctrlc::set_handler(move || {
                let _ = interrupts.send(Ok(Input::Interrupted));
            })
            .context("failed to install the Ctrl-C handler")?;
            run_interactive(&mut input, &mut out, &session, &renderer)
                .context("failed to write to the terminal")?;
        }
        Some(Command::Explore { number, json }) => {
            let candidate = validate(&number)
                .with_context(|| format!("'{number}' is not a valid starting number"))?;
            let exploration = explore(candidate, settings.max_steps);
            if json {
                serde_json::to_writer_pretty(&mut out, &JsonReport::from(&exploration))?;
                writeln!(out)?;
            } else {
                renderer.exploration(&mut out, &exploration)?;
            }
        }
        Some(Command::Check { number }) => {
            let candidate = validate(&number)
                .with_context(|| format!("'{number}' is not a valid starting number"))?;
            writeln!(out, "{candidate} is valid")?;
        }
        Some(Command::Survey) => {
            renderer.survey(&mut out, &survey(settings.max_steps))?;
        }
    }

    Ok(())
}

fn init_tracing(cli_level: Option<&str>) {
    let fallback = cli_level
        .map(str::to_owned)
        .or_else(|| std::env::var("KAPREKAR_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn apply_cli(settings: &mut Settings, cli: &Cli) {
    if let Some(max_steps) = cli.max_steps {
        settings.max_steps = max_steps;
    }
    if cli.no_color {
        settings.color = false;
    }
}
