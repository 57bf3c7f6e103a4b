use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eurodiff_core::config::DiffusionConfig;
use eurodiff_core::territory::Territory;
use eurodiff_data::loader::{Format, load_config, load_scenario, parse_scenario};
use eurodiff_data::report::{render_json, render_text, run_all};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate euro coin diffusion between neighbouring countries", long_about = None)]
struct Args {
    /// Input file (.txt country list, or .ron/.toml/.json scenario). Use `-`
    /// to read the text format from stdin.
    input: PathBuf,

    /// Configuration file overriding the default constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config at {}", path.display()))?,
        None => DiffusionConfig::default(),
    };

    let cases = read_cases(&args.input, &config)?;
    info!(cases = cases.len(), "running cases");
    let reports = run_all(&cases, &config);

    let rendered = match args.format {
        ReportFormat::Text => render_text(&reports),
        ReportFormat::Json => render_json(&reports).context("Failed to render JSON report")?,
    };
    print!("{rendered}");
    if args.format == ReportFormat::Json {
        println!();
    }
    Ok(())
}

fn read_cases(input: &Path, config: &DiffusionConfig) -> Result<Vec<Vec<Territory>>> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read input from stdin")?;
        return parse_scenario(&content, Format::Text, input, config)
            .context("Failed to parse input from stdin");
    }
    load_scenario(input, config)
        .with_context(|| format!("Failed to load input at {}", input.display()))
}
