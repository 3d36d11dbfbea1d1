use std::path::PathBuf;

use anyhow::Context;
use caretrack::config::{DISEASE_SCORE, RISK_LEVEL};
use caretrack::{RiskColumns, RiskLevel, read_parquet, triage, write_parquet};
use clap::Parser;
use log::info;

/// Assign risk tiers to the patient records of a Parquet file
#[derive(Debug, Parser)]
#[command(name = "caretrack", version, about)]
struct Cli {
    /// Parquet file with a `disease_score` column
    input: PathBuf,

    /// Write the annotated dataset to this Parquet file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Apply the HIV uplift before classification
    #[arg(long)]
    hiv_adjust: bool,

    /// Score column to classify on; --hiv-adjust always classifies on
    /// adjusted_disease_score
    #[arg(long, default_value = DISEASE_SCORE, conflicts_with = "hiv_adjust")]
    score_col: String,

    /// Column to write risk labels to
    #[arg(long, default_value = RISK_LEVEL)]
    risk_col: String,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let columns = RiskColumns::default()
        .with_score_col(cli.score_col)
        .with_risk_col(cli.risk_col);

    let batches = read_parquet(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let outcome = triage(&batches, &columns, cli.hiv_adjust)
        .with_context(|| format!("Failed to triage {}", cli.input.display()))?;

    for level in RiskLevel::ALL {
        info!(
            "{level}: {} ({:.1}%)",
            outcome.summary.count(level),
            outcome.summary.percentage(level)
        );
    }

    if let Some(output) = &cli.output {
        write_parquet(output, &outcome.batches)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    Ok(())
}
