use std::{fs, path::Path};

use clap::{Parser, ValueEnum};
use scamshield::{
    config::load_config,
    core::{
        engine::Engine,
        error::ScanError,
        history::ScanHistory,
        output::{write_reports, ReportFormat},
        types::ScanRequest,
    },
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "scamshield",
    about = "Scan messages and URLs for phishing, scams and brand impersonation"
)]
struct Cli {
    /// Messages or URLs to scan
    #[arg(required = true)]
    inputs: Vec<String>,
    /// Path to config file (TOML). Default: config/scamshield.toml
    #[arg(long)]
    config: Option<String>,
    /// Skip network steps (translation and redirect tracing)
    #[arg(long)]
    offline: bool,
    /// Increase verbosity (info, debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Optional log file path
    #[arg(long, default_value = "data/scamshield.log")]
    log_file: String,
    /// Output format for reports written with --output
    #[arg(long, default_value = "json", value_enum)]
    format: FormatArg,
    /// Output file path for reports; stdout when omitted
    #[arg(long)]
    output: Option<String>,
    /// Scan-history JSON file to load and append to
    #[arg(long)]
    history: Option<String>,
}

#[derive(ValueEnum, Clone, Debug)]
enum FormatArg {
    Json,
    Jsonl,
    Md,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Jsonl => ReportFormat::Jsonl,
            FormatArg::Md => ReportFormat::Markdown,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ScanError> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    let mut cfg = load_config(cli.config.as_deref())?;
    if cli.offline {
        cfg.offline = true;
    }
    let engine = Engine::new(cfg)?;

    let mut history = match &cli.history {
        Some(path) => ScanHistory::load(Path::new(path))
            .map_err(|e| ScanError::Config(e.to_string()))?,
        None => ScanHistory::new(),
    };

    let mut reports = Vec::new();
    for raw in &cli.inputs {
        let request = ScanRequest::new(raw.clone());
        let report = engine.scan(&request).await;
        tracing::info!(
            "scan finished: status={} scam_type={} confidence={}",
            report.assessment.status.as_str(),
            report.assessment.scam_type,
            report.assessment.confidence
        );
        history.record(report.clone());
        reports.push(report);
    }

    match &cli.output {
        Some(path) => {
            let out_path = Path::new(path);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| ScanError::Config(e.to_string()))?;
                }
            }
            write_reports(&reports, cli.format.into(), out_path)?;
            tracing::info!("wrote {} report(s) to {}", reports.len(), out_path.display());
        }
        None => {
            let json = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0]).map_err(|_| ScanError::Unknown)?
            } else {
                serde_json::to_string_pretty(&reports).map_err(|_| ScanError::Unknown)?
            };
            println!("{json}");
        }
    }

    if let Some(path) = &cli.history {
        history
            .save(Path::new(path))
            .map_err(|e| ScanError::Config(e.to_string()))?;
    }

    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<(), ScanError> {
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = Path::new(&cli.log_file);
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScanError::Config(e.to_string()))?;
    }
    if log_path.exists() {
        if let Ok(meta) = fs::metadata(log_path) {
            if meta.len() > 1_000_000 {
                let rotated = log_path.with_extension("log.1");
                let _ = fs::rename(log_path, rotated);
            }
        }
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| ScanError::Config(e.to_string()))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(false);

    let stdout_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| ScanError::Config(e.to_string()))
}
