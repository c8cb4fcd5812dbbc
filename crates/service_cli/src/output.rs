//! Presentation sinks.
//!
//! Renders an ensemble and its summary as a text table with a bar
//! histogram, as a JSON document, or as CSV with one row per path.

use std::io::Write;
use std::str::FromStr;

use attack_engine::sim::Ensemble;
use attack_engine::stats::{Distribution, EnsembleSummary, SummaryStatistics};
use attack_models::ModelKind;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Widest histogram bar in the table format.
const BAR_WIDTH: usize = 40;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary and text histogram
    #[default]
    Table,
    /// Paths, distribution and statistics as JSON
    Json,
    /// One row per path
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}

/// Writes `ensemble` and `summary` to `out` in the requested format.
pub fn render(
    format: OutputFormat,
    ensemble: &Ensemble,
    summary: &EnsembleSummary,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(ensemble, summary, out),
        OutputFormat::Json => write_json(ensemble, summary, out),
        OutputFormat::Csv => write_csv(ensemble, out),
    }
}

fn write_table(ensemble: &Ensemble, summary: &EnsembleSummary, out: &mut dyn Write) -> Result<()> {
    let model = ensemble.model().map_or("custom", |m| m.name());
    let seed = ensemble
        .seed()
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    let stats = &summary.statistics;

    writeln!(out, "Model:     {}", model)?;
    writeln!(out, "Paths:     {}", ensemble.n_paths())?;
    writeln!(out, "Steps:     {}", ensemble.n_steps())?;
    writeln!(out, "Seed:      {}", seed)?;
    writeln!(out, "Mean:      {:.6}", stats.mean)?;
    writeln!(out, "Variance:  {:.6}", stats.variance)?;
    writeln!(out, "Std dev:   {:.6}", stats.std_dev())?;
    writeln!(out)?;

    let keys: Vec<String> = summary
        .distribution
        .iter()
        .map(|(key, _)| format!("{}", key))
        .collect();
    let key_width = keys.iter().map(String::len).max().unwrap_or(0).max(5);
    let max_count = summary.distribution.max_count().max(1);

    writeln!(out, "{:>width$} | count", "value", width = key_width)?;
    for (key, (_, count)) in keys.iter().zip(summary.distribution.iter()) {
        let bar = "#".repeat(count * BAR_WIDTH / max_count);
        writeln!(
            out,
            "{:>width$} | {:<bar_width$} {}",
            key,
            bar,
            count,
            width = key_width,
            bar_width = BAR_WIDTH
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: Option<ModelKind>,
    seed: Option<u64>,
    n_paths: usize,
    n_steps: usize,
    paths: Vec<&'a [f64]>,
    distribution: &'a Distribution,
    statistics: &'a SummaryStatistics,
}

fn write_json(ensemble: &Ensemble, summary: &EnsembleSummary, out: &mut dyn Write) -> Result<()> {
    let report = JsonReport {
        model: ensemble.model(),
        seed: ensemble.seed(),
        n_paths: ensemble.n_paths(),
        n_steps: ensemble.n_steps(),
        paths: ensemble.paths().collect(),
        distribution: &summary.distribution,
        statistics: &summary.statistics,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(ensemble: &Ensemble, out: &mut dyn Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let header = std::iter::once("path".to_string())
        .chain((0..=ensemble.n_steps()).map(|step| step.to_string()));
    writer.write_record(header)?;

    for (index, path) in ensemble.paths().enumerate() {
        let row = std::iter::once(index.to_string()).chain(path.iter().map(f64::to_string));
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}
