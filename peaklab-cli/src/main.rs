//! PeakLab CLI: detect, wrap and config commands.
//!
//! Commands:
//! - `detect`: find local extrema in a CSV column, the demo series, or a
//!   synthetic noisy sine; optional moving-average pre-smoothing
//! - `wrap`: classify wrap-around transitions of a cyclic-range series
//! - `config init`: write the default analysis config as TOML

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};

use peaklab_core::config::{AnalysisConfig, SmoothingConfig};
use peaklab_core::data::{demo_series, load_samples, noisy_sine, Column, SampleSource, SineSpec};
use peaklab_core::engine::{EdgePolicy, ExtremaDetector, PointDecision, PointOutcome, RejectReason, WindowMode};
use peaklab_core::filters::{MovingAverage, SampleFilter};
use peaklab_core::report::DetectionReport;
use peaklab_core::wrap::{WrapAroundDetector, WrapType};

#[derive(Parser)]
#[command(
    name = "peaklab",
    about = "PeakLab CLI: noise-tolerant local extrema detection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect local maxima and minima in a sample series.
    Detect {
        #[command(flatten)]
        input: InputArgs,

        /// Use the built-in demo series.
        #[arg(long, default_value_t = false)]
        demo: bool,

        /// Generate a synthetic noisy sine with this many samples.
        #[arg(long)]
        synthetic: Option<usize>,

        /// Seed for --synthetic.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Path to a TOML analysis config. Flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Search window radius (must be > 0).
        #[arg(long, allow_negative_numbers = true)]
        radius: Option<i64>,

        /// Minimum rise/fall on both sides of an extremum.
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Disable threshold confirmation.
        #[arg(long, default_value_t = false)]
        no_thresholding: bool,

        /// Require maxima and minima to alternate.
        #[arg(long, default_value_t = false)]
        alternate: bool,

        /// Search window mode.
        #[arg(long, value_enum)]
        window_mode: Option<WindowModeArg>,

        /// Let the first and last sample be reported as extrema.
        #[arg(long, default_value_t = false)]
        allow_edges: bool,

        /// Moving-average window applied before detection (must be > 0).
        #[arg(long, allow_negative_numbers = true)]
        smooth: Option<i64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the decision for every candidate sample to stderr.
        #[arg(long, default_value_t = false)]
        explain: bool,

        /// Write output to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Classify wrap-around transitions of a cyclic-range series.
    Wrap {
        #[command(flatten)]
        input: InputArgs,

        /// Size of the cyclic range, e.g. 360 for degrees.
        #[arg(long)]
        max_value: f64,
    },
    /// Analysis config file commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default analysis config as TOML.
    Init {
        /// Destination file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// CSV file with the samples.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Column to read: header name or zero-based index.
    #[arg(long, default_value = "0")]
    column: String,

    /// The CSV file has no header row.
    #[arg(long, default_value_t = false)]
    no_headers: bool,
}

impl InputArgs {
    fn source(&self) -> SampleSource {
        // Column parsing is infallible: digits select by index, anything else by name.
        let column = self.column.parse::<Column>().unwrap_or_default();
        let source = SampleSource::column(column);
        if self.no_headers {
            source.headerless()
        } else {
            source
        }
    }

    fn load(&self, path: &Path) -> Result<Vec<f64>> {
        load_samples(path, &self.source())
            .with_context(|| format!("failed to load samples from {}", path.display()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WindowModeArg {
    Dynamic,
    Fixed,
}

impl From<WindowModeArg> for WindowMode {
    fn from(arg: WindowModeArg) -> Self {
        match arg {
            WindowModeArg::Dynamic => WindowMode::Dynamic,
            WindowModeArg::Fixed => WindowMode::Fixed,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            demo,
            synthetic,
            seed,
            config,
            radius,
            threshold,
            no_thresholding,
            alternate,
            window_mode,
            allow_edges,
            smooth,
            format,
            explain,
            output,
        } => {
            let samples = load_detect_samples(&input, demo, synthetic, seed)?;
            let overrides = DetectorOverrides {
                radius,
                threshold,
                no_thresholding,
                alternate,
                window_mode: window_mode.map(WindowMode::from),
                allow_edges,
                smooth,
            };
            let analysis = build_analysis_config(config.as_deref(), &overrides)?;
            run_detect(&samples, &analysis, format, explain, output.as_deref())
        }
        Commands::Wrap { input, max_value } => run_wrap(&input, max_value),
        Commands::Config { action } => match action {
            ConfigAction::Init { output } => run_config_init(output.as_deref()),
        },
    }
}

fn load_detect_samples(
    input: &InputArgs,
    demo: bool,
    synthetic: Option<usize>,
    seed: u64,
) -> Result<Vec<f64>> {
    let chosen = [input.input.is_some(), demo, synthetic.is_some()]
        .iter()
        .filter(|&&b| b)
        .count();
    if chosen != 1 {
        bail!("exactly one of --input, --demo or --synthetic is required");
    }

    if let Some(path) = &input.input {
        let samples = input.load(path)?;
        info!("Loaded {} samples from {}", samples.len(), path.display());
        return Ok(samples);
    }
    if let Some(len) = synthetic {
        let spec = SineSpec {
            len,
            ..SineSpec::default()
        };
        info!("Generated {len} synthetic samples (seed {seed})");
        return Ok(noisy_sine(&spec, seed)?);
    }
    Ok(demo_series())
}

/// Command-line values that override the config file.
struct DetectorOverrides {
    radius: Option<i64>,
    threshold: Option<f64>,
    no_thresholding: bool,
    alternate: bool,
    window_mode: Option<WindowMode>,
    allow_edges: bool,
    smooth: Option<i64>,
}

fn build_analysis_config(path: Option<&Path>, overrides: &DetectorOverrides) -> Result<AnalysisConfig> {
    let mut analysis = match path {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    // Route overrides through the detector setters so validation matches the library.
    let mut detector = ExtremaDetector::with_config(analysis.detector.clone())?;
    if let Some(radius) = overrides.radius {
        detector.set_search_window_radius(radius)?;
    }
    if let Some(threshold) = overrides.threshold {
        detector.set_threshold_value(threshold);
    }
    if overrides.no_thresholding {
        detector.enable_thresholding(false);
    }
    if overrides.alternate {
        detector.enforce_alternate_extrema(true);
    }
    if let Some(mode) = overrides.window_mode {
        detector.set_window_mode(mode);
    }
    if overrides.allow_edges {
        detector.set_edge_policy(EdgePolicy::Allow);
    }
    analysis.detector = detector.config().clone();

    if let Some(window) = overrides.smooth {
        let filter = MovingAverage::new(window)?;
        analysis.smoothing = Some(SmoothingConfig {
            window_size: filter.window_size(),
        });
    }

    if analysis.detector.thresholding_enabled && analysis.detector.threshold_value <= 0.0 {
        warn!(
            "threshold {} <= 0 makes the threshold test permissive",
            analysis.detector.threshold_value
        );
    }
    Ok(analysis)
}

fn run_detect(
    samples: &[f64],
    analysis: &AnalysisConfig,
    format: OutputFormat,
    explain: bool,
    output: Option<&Path>,
) -> Result<()> {
    let analysed = match analysis.smoothing_window() {
        Some(window) => {
            let filter = MovingAverage::new(window as i64)?;
            info!("Smoothing with {}", filter.name());
            filter.apply(samples)
        }
        None => samples.to_vec(),
    };

    let mut detector = ExtremaDetector::with_config(analysis.detector.clone())?;
    let (result, decisions) = detector.detect_with_trace(&analysed);
    info!(
        "Found {} extrema ({} maxima, {} minima) in {} samples",
        result.count(),
        result.maxima().len(),
        result.minima().len(),
        analysed.len()
    );

    if explain {
        print_decisions(&decisions);
    }

    let report = DetectionReport::new(analysis, samples, &analysed, result.clone());
    let rendered = match format {
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Csv => report.points_csv()?,
        OutputFormat::Text => render_text(&report),
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Output saved to: {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn print_decisions(decisions: &[PointDecision]) {
    for d in decisions {
        match d.outcome {
            PointOutcome::Rejected {
                reason: RejectReason::NotWindowExtreme,
            } => {}
            PointOutcome::Confirmed { kind } => eprintln!("{:>6}  confirmed {kind}", d.index),
            PointOutcome::Rejected { reason } => eprintln!("{:>6}  rejected  {reason:?}", d.index),
        }
    }
}

fn render_text(report: &DetectionReport) -> String {
    let d = &report.config.detector;
    let mut out = String::new();
    out.push_str(&format!("Samples:     {}\n", report.sample_count));
    out.push_str(&format!(
        "Window:      {:?}, radius {}\n",
        d.window_mode, d.search_window_radius
    ));
    if d.thresholding_enabled {
        out.push_str(&format!("Threshold:   {}\n", d.threshold_value));
    } else {
        out.push_str("Threshold:   disabled\n");
    }
    out.push_str(&format!("Alternate:   {}\n", d.alternate_extrema));
    if let Some(window) = report.config.smoothing_window() {
        out.push_str(&format!("Smoothing:   moving average, {window} samples\n"));
    }
    out.push_str(&format!("Config hash: {}\n", &report.config_hash[..16]));
    out.push('\n');
    out.push_str(&format!("{:>8}  {:<8} {:>14}\n", "Index", "Kind", "Value"));
    out.push_str(&format!("{}\n", "-".repeat(32)));
    for p in &report.points {
        out.push_str(&format!("{:>8}  {:<8} {:>14.4}\n", p.index, p.kind.to_string(), p.value));
    }
    out.push_str(&format!(
        "\nTotal: {} ({} maxima, {} minima)\n",
        report.result.count(),
        report.result.maxima().len(),
        report.result.minima().len()
    ));
    out
}

fn run_wrap(input: &InputArgs, max_value: f64) -> Result<()> {
    let Some(path) = &input.input else {
        bail!("--input is required");
    };
    if max_value <= 0.0 {
        warn!("max value {max_value} <= 0; every transition will compare against a degenerate range");
    }
    let values = input.load(path)?;

    let mut detector = WrapAroundDetector::new(max_value);
    let classes = detector.classify(&values);

    println!("index,value,wrap");
    for (i, (value, class)) in values.iter().zip(&classes).enumerate() {
        println!("{i},{value},{}", class.as_str());
    }
    let wraps = classes
        .iter()
        .filter(|c| **c != WrapType::None)
        .count();
    info!("{wraps} wrap-around(s) in {} samples", values.len());
    Ok(())
}

fn run_config_init(output: Option<&Path>) -> Result<()> {
    let text = AnalysisConfig::default().to_toml()?;
    match output {
        Some(path) => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!("Default config written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
