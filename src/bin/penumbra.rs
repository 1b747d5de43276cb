//! penumbra CLI: classify the light reaching each body of a toy star system.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use penumbra::drift;
use penumbra::orbit::system::{
    classification_json, full_system, parse_system, scientific_json, SystemGenerator,
};
use penumbra::orbit::{classify_checked, classify_scientific_checked, default_system, StarSystem};
use penumbra::render::{
    artifact_path, render_report, render_scientific_table, render_svg, render_table,
    write_artifact, ArtifactKind, RenderConfig,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "penumbra", version, about = "Shadow and light for toy star systems")]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the light received by every body
    Classify(ClassifyArgs),
    /// Report how far an observed clock drifts from a reference clock
    Drift {
        /// Reference time, HH:MM or HH:MM:SS
        reference: String,
        /// Observed time, HH:MM or HH:MM:SS
        observed: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Catalog {
    Default,
    Full,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Built-in body list
    #[arg(long, value_enum, default_value = "default")]
    catalog: Catalog,

    /// JSON file with a list of bodies or a {name, bodies} object
    #[arg(long, value_name = "FILE", conflicts_with_all = ["random", "interactive"])]
    input: Option<PathBuf>,

    /// Generate a random system from this seed
    #[arg(long, value_name = "SEED", conflicts_with = "interactive")]
    random: Option<u64>,

    /// Enter bodies one at a time
    #[arg(long)]
    interactive: bool,

    /// Include light fraction and angular size
    #[arg(long)]
    scientific: bool,

    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    /// Write an SVG picture to this file
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Write a text report to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Write both SVG and report into this directory, named after the system
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_system(args: &ClassifyArgs) -> Result<StarSystem> {
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok(parse_system(&text)?);
    }
    if let Some(seed) = args.random {
        return Ok(SystemGenerator::new(seed).generate());
    }
    if args.interactive {
        let stdin = io::stdin();
        let bodies = penumbra::prompt::read_bodies(stdin.lock(), io::stdout())?;
        return Ok(StarSystem::new("Custom", bodies));
    }
    Ok(match args.catalog {
        Catalog::Default => default_system(),
        Catalog::Full => full_system(),
    })
}

/// Writes an artifact, logging failures instead of aborting.
fn emit(path: &Path, contents: &str) {
    if let Err(err) = write_artifact(path, contents) {
        tracing::error!(%err, "could not write artifact");
    }
}

fn classify(args: ClassifyArgs) -> Result<()> {
    let system = load_system(&args)?;
    tracing::info!(system = %system.name, bodies = system.bodies.len(), "classifying");

    let results = match classify_checked(&system.bodies) {
        Ok(results) => results,
        Err(err) => {
            for violation in err.violations() {
                tracing::warn!(%violation, "invalid body");
            }
            return Err(err.into());
        }
    };

    match (args.format, args.scientific) {
        (Format::Table, false) => print!("{}", render_table(&results)),
        (Format::Table, true) => print!(
            "{}",
            render_scientific_table(&classify_scientific_checked(&system.bodies)?)
        ),
        (Format::Json, false) => println!("{}", classification_json(&system)?),
        (Format::Json, true) => println!("{}", scientific_json(&system)?),
    }

    let mut svg_path = args.svg.clone();
    let mut report_path = args.report.clone();
    if let Some(dir) = &args.out_dir {
        svg_path.get_or_insert_with(|| artifact_path(dir, &system.name, ArtifactKind::Svg));
        report_path.get_or_insert_with(|| artifact_path(dir, &system.name, ArtifactKind::Report));
    }

    if let Some(path) = svg_path {
        emit(&path, &render_svg(&system.name, &results, &RenderConfig::default()));
    }
    if let Some(path) = report_path {
        let detailed = classify_scientific_checked(&system.bodies)?;
        emit(&path, &render_report(&system.name, &detailed));
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Classify(args) => classify(args),
        Command::Drift { reference, observed } => drift::measure_str(&reference, &observed)
            .map(|d| println!("{d}"))
            .map_err(Into::into),
    };

    if let Err(err) = &outcome {
        tracing::error!("{err:#}");
    }
    outcome
}
