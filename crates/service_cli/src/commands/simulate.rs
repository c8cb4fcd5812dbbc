//! Simulate command implementation
//!
//! Generates an ensemble with attack_engine, summarises its final values and
//! writes both through the selected output format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use attack_engine::sim::{ConfigError as SimConfigError, PathSimulator, SimulationConfig};
use attack_engine::stats::{summarize, summarize_with, Binning};
use attack_models::{ModelKind, ModelParams};
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::output::{self, OutputFormat};
use crate::{CliError, Result};

const DEFAULT_PATHS: usize = 100;
const DEFAULT_STEPS: usize = 50;
const DEFAULT_PROBABILITY: f64 = 0.5;
const DEFAULT_RATE: f64 = 5.0;

/// Model flags and the parameter each one sets.
const MODEL_FLAGS: [(&str, &str); 4] = [
    ("--probability", "success_probability"),
    ("--relative", "relative"),
    ("--rate", "rate"),
    ("--jump-probability", "jump_probability"),
];

/// Arguments of `attacksim simulate`
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Model to simulate (bernoulli, walk, poisson, diffusion or the full name)
    #[arg(required_unless_present = "from_config")]
    pub model: Option<ModelKind>,

    /// Number of paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Number of steps per path
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Success probability (bernoulli, walk)
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Jump intensity (poisson)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Up-move probability (diffusion)
    #[arg(long)]
    pub jump_probability: Option<f64>,

    /// Record walk values divided by the step count
    #[arg(long)]
    pub relative: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Histogram bin width
    #[arg(long)]
    pub bin_width: Option<f64>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run the [simulation] table of the config file
    #[arg(
        long,
        conflicts_with_all = ["model", "paths", "steps", "probability", "rate", "jump_probability", "relative"]
    )]
    pub from_config: bool,
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, app: &AppConfig) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            execute(args, app, &mut out)?;
            out.flush()?;
            info!("Output written to {}", path.display());
            Ok(())
        }
        None => execute(args, app, &mut io::stdout().lock()),
    }
}

fn execute(args: &SimulateArgs, app: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let config = resolve_config(args, app)?;
    let binning = resolve_binning(args, app)?;

    info!(
        model = config.model().model_name(),
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        "Starting simulation"
    );

    let ensemble = PathSimulator::from_config(&config).generate(&config)?;
    let summary = match binning {
        Some(binning) => summarize_with(&ensemble, binning)?,
        None => summarize(&ensemble)?,
    };

    info!(
        seed = ensemble.seed(),
        mean = summary.statistics.mean,
        variance = summary.statistics.variance,
        "Simulation complete"
    );

    output::render(args.format.unwrap_or(app.format), &ensemble, &summary, out)
}

/// Builds the simulation request from flags or from the config file.
fn resolve_config(args: &SimulateArgs, app: &AppConfig) -> Result<SimulationConfig> {
    let config = if args.from_config {
        app.simulation
            .clone()
            .ok_or_else(|| CliError::invalid_argument("--from-config needs a [simulation] table"))?
    } else {
        build_config(args)?
    };

    let seed = args.seed.or(config.seed()).or(app.seed);
    Ok(config.with_seed(seed))
}

fn build_config(args: &SimulateArgs) -> Result<SimulationConfig> {
    let kind = args
        .model
        .ok_or_else(|| CliError::invalid_argument("a model is required"))?;
    reject_foreign_flags(kind, args)?;

    let probability = args.probability.unwrap_or(DEFAULT_PROBABILITY);
    let model = match kind {
        ModelKind::BernoulliAccumulation => ModelParams::bernoulli(probability),
        ModelKind::SymmetricRandomWalk => ModelParams::random_walk(probability, args.relative),
        ModelKind::PoissonJumpApproximation => {
            ModelParams::poisson(args.rate.unwrap_or(DEFAULT_RATE))
        }
        ModelKind::ScaledRandomWalkDiffusion => {
            ModelParams::diffusion(args.jump_probability.unwrap_or(DEFAULT_PROBABILITY))
        }
    }
    .map_err(SimConfigError::from)?;

    Ok(SimulationConfig::builder()
        .n_paths(args.paths.unwrap_or(DEFAULT_PATHS))
        .n_steps(args.steps.unwrap_or(DEFAULT_STEPS))
        .model(model)
        .build()?)
}

/// Rejects model flags the selected model does not read.
fn reject_foreign_flags(kind: ModelKind, args: &SimulateArgs) -> Result<()> {
    let present = [
        args.probability.is_some(),
        args.relative,
        args.rate.is_some(),
        args.jump_probability.is_some(),
    ];

    for ((flag, parameter), set) in MODEL_FLAGS.iter().zip(present) {
        if set && !kind.parameters().contains(parameter) {
            return Err(CliError::invalid_argument(format!(
                "{} is not used by {}",
                flag, kind
            )));
        }
    }
    Ok(())
}

fn resolve_binning(args: &SimulateArgs, app: &AppConfig) -> Result<Option<Binning>> {
    args.bin_width
        .or(app.bin_width)
        .map(|width| {
            Binning::fixed_width(width).ok_or_else(|| {
                CliError::invalid_argument(format!(
                    "bin width must be positive and finite, got {}",
                    width
                ))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attack_engine::sim::SimulationError;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SimulateArgs,
    }

    fn parse(argv: &[&str]) -> SimulateArgs {
        let argv = std::iter::once("simulate").chain(argv.iter().copied());
        TestCli::try_parse_from(argv).unwrap().args
    }

    fn run_to_string(args: &SimulateArgs, app: &AppConfig) -> Result<String> {
        let mut buffer = Vec::new();
        execute(args, app, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_bernoulli_certain_success_table() {
        let args = parse(&["bernoulli", "-n", "3", "-s", "5", "-p", "1.0", "--seed", "1"]);
        let text = run_to_string(&args, &AppConfig::default()).unwrap();

        assert!(text.contains("Model:     bernoulli_accumulation"));
        assert!(text.contains("Mean:      5.000000"));
        assert!(text.contains("Variance:  0.000000"));
        assert!(text.contains("Seed:      1"));
    }

    #[test]
    fn test_csv_output_one_row_per_path() {
        let args = parse(&["walk", "-n", "4", "-s", "3", "--format", "csv", "--seed", "9"]);
        let text = run_to_string(&args, &AppConfig::default()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "path,0,1,2,3");
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let args = parse(&["diffusion", "-n", "2", "-s", "4"]);
        let app = AppConfig {
            format: OutputFormat::Json,
            seed: Some(3),
            ..AppConfig::default()
        };
        let text = run_to_string(&args, &app).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["seed"], 3);
        assert_eq!(value["model"], "scaled_random_walk_diffusion");
    }

    #[test]
    fn test_seed_flag_beats_config_seed() {
        let args = parse(&["poisson", "--seed", "11"]);
        let app = AppConfig {
            seed: Some(3),
            ..AppConfig::default()
        };
        assert_eq!(resolve_config(&args, &app).unwrap().seed(), Some(11));
    }

    #[test]
    fn test_foreign_flag_rejected() {
        let args = parse(&["bernoulli", "--rate", "2.0"]);
        let err = build_config(&args).unwrap_err();
        assert!(err.to_string().contains("--rate"));

        let args = parse(&["diffusion", "--probability", "0.3"]);
        assert!(build_config(&args).is_err());

        let args = parse(&["poisson", "--relative"]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_invalid_parameter_rejected() {
        let args = parse(&["bernoulli", "-p", "1.5"]);
        assert!(matches!(
            build_config(&args),
            Err(CliError::InvalidSimulation(SimConfigError::Model(_)))
        ));

        let args = parse(&["walk", "-n", "0"]);
        assert!(matches!(
            build_config(&args),
            Err(CliError::InvalidSimulation(SimConfigError::InvalidPathCount(0)))
        ));
    }

    #[test]
    fn test_from_config() {
        let app = AppConfig {
            simulation: Some(
                SimulationConfig::builder()
                    .n_paths(3)
                    .n_steps(5)
                    .model(ModelParams::bernoulli(1.0).unwrap())
                    .build()
                    .unwrap(),
            ),
            ..AppConfig::default()
        };
        let args = parse(&["--from-config", "--format", "csv"]);
        let text = run_to_string(&args, &app).unwrap();

        assert_eq!(text.lines().nth(1), Some("0,0,1,2,3,4,5"));
    }

    #[test]
    fn test_from_config_without_table() {
        let args = parse(&["--from-config"]);
        assert!(matches!(
            resolve_config(&args, &AppConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_config_conflicts_with_model() {
        let argv = ["simulate", "bernoulli", "--from-config"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_bin_width() {
        let args = parse(&["diffusion", "--bin-width", "0.5"]);
        assert_eq!(
            resolve_binning(&args, &AppConfig::default()).unwrap(),
            Some(Binning::FixedWidth { width: 0.5 })
        );

        let args = parse(&["diffusion", "--bin-width", "0"]);
        assert!(resolve_binning(&args, &AppConfig::default()).is_err());

        let args = parse(&["diffusion"]);
        assert_eq!(resolve_binning(&args, &AppConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_bin_width_too_fine_is_an_error() {
        let args = parse(&["diffusion", "-n", "10", "-s", "8", "--bin-width", "1e-300"]);
        let result = run_to_string(&args, &AppConfig::default());

        assert!(matches!(
            result,
            Err(CliError::Simulation(SimulationError::TooManyBins { .. }))
        ));
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.csv");
        let mut args = parse(&["bernoulli", "-n", "2", "-s", "2", "-f", "csv"]);
        args.output = Some(path.clone());

        run(&args, &AppConfig::default()).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
