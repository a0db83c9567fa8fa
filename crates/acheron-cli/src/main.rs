use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use acheron_core::Corpus;
use acheron_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "acheron", version, about = "Underworld registry seed-data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output path for the seed script; `-` writes to stdout.
    #[arg(long, default_value = "underworld_seed.sql")]
    out: PathBuf,
    /// Sampler seed; a random one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with generation options; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Optional path for the JSON run report.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut options = match &args.config {
        Some(path) => toml::from_str::<GenerateOptions>(&std::fs::read_to_string(path)?)?,
        None => GenerateOptions::default(),
    };
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    let engine = GenerationEngine::new(options);
    let corpus = Corpus::default();

    let report = if args.out.as_os_str() == "-" {
        engine.run(&corpus, io::stdout().lock())?
    } else {
        let file = File::create(&args.out)?;
        engine.run(&corpus, BufWriter::new(file))?
    };

    info!(
        out = %args.out.display(),
        statements = report.statements,
        seed = report.seed,
        "seed script written"
    );

    if let Some(path) = &args.report {
        std::fs::write(path, serde_json::to_vec_pretty(&report)?)?;
        info!(report = %path.display(), "run report written");
    }

    Ok(())
}
