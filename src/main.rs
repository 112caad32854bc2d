//! das — command-line front end for the binning and jackknife estimators.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_das::{
    binning::options::{DEFAULT_MAX_BINS, DEFAULT_MIN_BINS, ScalingOptions},
    drivers::{ave, avs, jck},
    functionals::FunctionalKind,
    loader::parse_ds,
    output::{PrintConfig, print_ave, print_avs, print_jck},
};
use std::{io::Write, path::PathBuf};

#[derive(Parser)]
#[command(name = "das")]
#[command(about = "das - error analysis of autocorrelated simulation data")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average every column without rebinning
    Avs {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Bin-scaling analysis: SEM as a function of bin size
    Ave {
        #[command(flatten)]
        common: CommonArgs,

        /// Also estimate the autocorrelation time of each column
        #[arg(short = 't', long)]
        actime: bool,

        #[command(flatten)]
        scaling: ScalingArgs,
    },
    /// Jackknife estimate of a functional of the column means
    Jck {
        #[command(flatten)]
        common: CommonArgs,

        /// Functional to evaluate (susceptibility, identity, ratio, binder)
        #[arg(short = 'F', long, default_value = "susceptibility")]
        functional: FunctionalKind,

        #[command(flatten)]
        scaling: ScalingArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Simplified, parsing-friendly output formatting
    #[arg(short, long)]
    basic: bool,

    /// Comma-separated, 1-indexed fields to analyze (default = all)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_field)]
    fields: Option<Vec<usize>>,

    /// Skip the row integrity check
    #[arg(short, long)]
    quick: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Percentage (0-100) of leading rows to skip
    #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=100))]
    skip: u32,

    /// File to analyze (plain text or .gz)
    file: PathBuf,
}

#[derive(Args)]
struct ScalingArgs {
    /// Largest bin count (power of two)
    #[arg(long, default_value_t = DEFAULT_MAX_BINS)]
    max_bins: usize,

    /// Smallest bin count (power of two)
    #[arg(long, default_value_t = DEFAULT_MIN_BINS)]
    min_bins: usize,
}

impl ScalingArgs {
    fn options(&self) -> Result<ScalingOptions> {
        Ok(ScalingOptions::new(self.max_bins, self.min_bins)?)
    }
}

impl CommonArgs {
    fn print_config(&self) -> PrintConfig {
        PrintConfig { fields: self.fields.clone(), verbose: self.verbose, basic: self.basic }
    }

    fn load(&self) -> Result<ndarray::Array2<f64>> {
        let fields = self.fields.as_deref().map(zero_based);
        let data = parse_ds(&self.file, fields.as_deref(), !self.quick)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        Ok(data)
    }
}

/// Parse one 1-indexed field number.
fn parse_field(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("fields are 1-indexed; 0 is not a valid field".to_string()),
        Ok(field) => Ok(field),
        Err(e) => Err(format!("invalid field {s:?}: {e}")),
    }
}

/// Convert validated 1-indexed CLI fields to loader indices.
fn zero_based(fields: &[usize]) -> Vec<usize> {
    fields.iter().map(|&one_based| one_based - 1).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Avs { common } => cmd_avs(&mut out, &common),
        Commands::Ave { common, actime, scaling } => cmd_ave(&mut out, &common, actime, &scaling),
        Commands::Jck { common, functional, scaling } => {
            cmd_jck(&mut out, &common, functional, &scaling)
        }
    }?;
    out.flush()?;
    Ok(())
}

fn cmd_avs(out: &mut impl Write, common: &CommonArgs) -> Result<()> {
    let data = common.load()?;
    let (stats, report) = avs(data.view(), common.skip)?;
    tracing::info!(%report, "avs done");
    print_avs(out, &stats, &report, &common.print_config())?;
    Ok(())
}

fn cmd_ave(
    out: &mut impl Write, common: &CommonArgs, actime: bool, scaling: &ScalingArgs,
) -> Result<()> {
    let options = scaling.options()?;
    let data = common.load()?;
    let (columns, actimes, report) = ave(data.view(), common.skip, actime, &options)?;
    tracing::info!(%report, scales = options.scale_count(), "ave done");
    print_ave(out, &columns, &actimes, &report, &common.print_config())?;
    Ok(())
}

fn cmd_jck(
    out: &mut impl Write, common: &CommonArgs, functional: FunctionalKind, scaling: &ScalingArgs,
) -> Result<()> {
    let options = scaling.options()?;
    let data = common.load()?;
    let (binned, report) = jck(data.view(), common.skip, &functional, &options)
        .with_context(|| format!("jackknife of {functional} failed"))?;
    tracing::info!(%report, %functional, "jck done");
    print_jck(out, &binned, &report, &common.print_config())?;
    Ok(())
}
