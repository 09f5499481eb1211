mod github;
mod render;
mod source;
mod summary;
mod tui;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ghmetrics_core::service::aggregator::MetricsAggregator;
use ghmetrics_core::{
    parse_overrides, parse_report_date, FileActivitySource, MetricsConfig, MetricsUseCase, RenderedMetrics,
};
use log::{info, warn};

use crate::source::{Source, SourceArgs};

#[derive(Parser)]
#[command(name = "ghmetrics")]
#[command(version, about = "Render GitHub contribution metrics as SVG cards", long_about = None)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config overrides as key:value (e.g. top:5 skin:signal)
    #[arg(long = "set", global = true, num_args = 1..)]
    overrides: Vec<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the metrics card and write it as SVG
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output SVG path
        #[arg(long, short)]
        out: PathBuf,

        /// Skin name or unique prefix (dashboard, signal)
        #[arg(long)]
        skin: Option<String>,

        /// Also write the fetched activity as a snapshot for --input
        #[arg(long)]
        dump: Option<PathBuf>,

        /// Also write the rendered metrics as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print the formatted metrics as a table
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Open the interactive terminal dashboard
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

fn load_config(path: Option<&Path>, overrides: &[String]) -> Result<MetricsConfig> {
    let mut config = MetricsConfig::load(path)?;
    let parsed = parse_overrides(overrides);
    for arg in &parsed.rejected {
        warn!("Ignoring '{}': overrides must be key:value", arg);
    }
    config.apply_overrides(&parsed)?;
    Ok(config)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing '{}'", path.display()))
}

fn render_command(
    config: &MetricsConfig,
    args: &SourceArgs,
    out: &Path,
    skin: Option<&str>,
    dump: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let skin = render::skin_named(skin.unwrap_or(&config.skin))?;
    let today = parse_report_date(&args.date)?;
    let source = Source::open(args)?;

    let rendered: RenderedMetrics = match dump {
        Some(dump) => {
            let snapshot = MetricsUseCase::new(&source, config).capture(today)?;
            snapshot.save(dump)?;
            info!("Wrote snapshot to {}", dump.display());
            let replay = FileActivitySource::from_snapshot(snapshot);
            MetricsUseCase::new(&replay, config).render(today)?
        }
        None => MetricsUseCase::new(&source, config).render(today)?,
    };

    write_file(out, &skin.render(&rendered))?;
    info!("Wrote {} card to {}", skin.name(), out.display());

    if let Some(json) = json {
        let body = serde_json::to_string_pretty(&rendered).context("serializing metrics")?;
        write_file(json, &body)?;
        info!("Wrote metrics JSON to {}", json.display());
    }

    println!("{}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = load_config(cli.config.as_deref(), &cli.overrides)?;

    match &cli.command {
        Commands::Render {
            source,
            out,
            skin,
            dump,
            json,
        } => render_command(
            &config,
            source,
            out,
            skin.as_deref(),
            dump.as_deref(),
            json.as_deref(),
        )?,
        Commands::Summary { source } => {
            let today = parse_report_date(&source.date)?;
            let source = Source::open(source)?;
            let rendered = MetricsUseCase::new(&source, &config).render(today)?;
            summary::show_summary(&rendered);
        }
        Commands::Dashboard { source } => {
            let today = parse_report_date(&source.date)?;
            let source = Source::open(source)?;
            let metrics = MetricsUseCase::new(&source, &config).aggregate(today)?;
            let rendered = MetricsAggregator::new(&config).render(&metrics, today);
            tui::run(metrics, rendered)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_flags_parse() {
        let cli = Cli::try_parse_from([
            "ghmetrics", "render", "--input", "snap.json", "--out", "out/card.svg", "--skin", "sig",
            "--set", "top:3", "bar:320",
        ])
        .unwrap();
        assert_eq!(cli.overrides, vec!["top:3", "bar:320"]);
        match cli.command {
            Commands::Render { source, out, skin, .. } => {
                assert_eq!(source.input, Some(PathBuf::from("snap.json")));
                assert_eq!(out, PathBuf::from("out/card.svg"));
                assert_eq!(skin.as_deref(), Some("sig"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "top_languages": 6 }"#).unwrap();

        let config = load_config(
            Some(file.path()),
            &["bar:320".to_string(), "nonsense".to_string()],
        )
        .unwrap();
        assert_eq!(config.top_languages, 6);
        assert_eq!(config.bar_width, 320);
    }

    #[test]
    fn test_render_from_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = dir.path().join("snapshot.json");
        ghmetrics_core::ActivitySnapshot {
            report: ghmetrics_core::ContributionReport::empty("ghost"),
            pages: Vec::new(),
        }
        .save(&snapshot_path)
        .unwrap();

        let args = SourceArgs {
            user: None,
            input: Some(snapshot_path),
            date: "2025-06-30".to_string(),
            token: None,
        };
        let out = dir.path().join("cards").join("ghost.svg");
        let json = dir.path().join("ghost.json");
        render_command(&MetricsConfig::default(), &args, &out, Some("signal"), None, Some(&json)).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains("ghost"));
        assert!(svg.contains("no streak yet"));
        let rendered: RenderedMetrics = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(rendered.kpis.stars.display, "0");
    }

    #[test]
    fn test_missing_token_without_input() {
        let args = SourceArgs {
            user: Some("octocat".to_string()),
            input: None,
            date: "today".to_string(),
            token: Some(String::new()),
        };
        assert!(Source::open(&args).is_err());
    }
}
