use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use portdebt::{load_markers, write_json, Options};
use portdebt_core::config::Config;
use portdebt_feeds::{open_path, SourceKind};

#[derive(Parser)]
#[command(name = "portdebt", about = "Turn country debt statistics into map markers")]
struct Cli {
    /// CSV or JSON file of raw debt records.
    path: PathBuf,

    /// Input format. `auto` decides from the file extension.
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Lines above the CSV header to discard (overrides config).
    #[arg(long)]
    skip_rows: Option<usize>,

    /// Keep rows missing a country name or debt figure.
    #[arg(long)]
    keep_incomplete: bool,

    /// Fail if any numeric field had to be defaulted.
    #[arg(long)]
    strict: bool,

    /// Extra config file layered over ~/.config/portdebt/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Auto,
    Csv,
    Json,
}

impl Format {
    fn kind(self) -> Option<SourceKind> {
        match self {
            Format::Auto => None,
            Format::Csv => Some(SourceKind::Csv),
            Format::Json => Some(SourceKind::Json),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %cli.path.display(), "portdebt debug log started");
    }

    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(skip_rows) = cli.skip_rows {
        cfg.source.skip_rows = skip_rows;
    }

    let mut source = open_path(&cli.path, cli.format.kind(), &cfg.source)
        .with_context(|| format!("opening {}", cli.path.display()))?;
    let opts = Options {
        keep_incomplete: cli.keep_incomplete,
        strict: cli.strict,
    };
    let markers = load_markers(source.as_mut(), &cfg, opts)?;

    write_json(std::io::stdout().lock(), &markers, cli.pretty)?;
    Ok(())
}
