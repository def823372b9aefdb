use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pardft::bench::{self, BenchConfig};
use pardft::signal;
use pardft_cli::{read_dataset, render_header, render_json, render_text, write_dataset, OutputFormat};

#[derive(Parser)]
#[command(author, version, about = "Direct DFT round-trip benchmark across worker counts")]
struct Cli {
    /// Log debug records to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a synthetic dataset: the length, then one sample per line
    Generate {
        /// Number of samples
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        len: u64,
    },
    /// Time the round trip sequentially and with 2..=max workers
    Run {
        /// Dataset file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Highest worker count (default: $PARDFT_MAX_WORKERS or 15)
        #[arg(long)]
        max_workers: Option<usize>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn generate(len: u64) -> Result<()> {
    let len = usize::try_from(len).context("length does not fit in memory")?;
    let samples = signal::generate::<f64>(len);
    let stdout = io::stdout();
    write_dataset(BufWriter::new(stdout.lock()), &samples).context("failed to write dataset")
}

fn run(input: Option<PathBuf>, max_workers: Option<usize>, format: OutputFormat) -> Result<()> {
    let samples = match &input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            read_dataset(BufReader::new(file))?
        }
        None => read_dataset(io::stdin().lock())?,
    };
    let config = match max_workers {
        Some(max_workers) => BenchConfig::new(max_workers),
        None => BenchConfig::from_env(),
    };
    log::debug!(
        "sweeping {} samples up to {} workers",
        samples.len(),
        config.max_workers
    );

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", render_header(samples.len(), bench::available_threads()))?;
            for report in bench::sweep(&samples, &config) {
                let report = report.context("run aborted")?;
                writeln!(out, "{}", render_text(&report))?;
                out.flush()?;
            }
        }
        OutputFormat::Json => {
            let reports = bench::sweep_all(&samples, &config).context("run aborted")?;
            writeln!(out, "{}", render_json(&reports)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Generate { len } => generate(len),
        Commands::Run {
            input,
            max_workers,
            format,
        } => run(input, max_workers, format),
    }
}
