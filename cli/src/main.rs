//! CLI entrypoint for Lobby Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use lobby_application::{CompositeRoundObserver, RoundCoordinator, RoundObserver};
use lobby_domain::{ConfigIssue, Severity};
use lobby_infrastructure::{ConfigLoader, FileConfig, JsonlRoundLogger};
use lobby_presentation::{Cli, ConsoleRoundReporter, OutputConfig, ReplConfig, VoteRepl};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration, then let flags override it
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut file_config);

    // Keep the guard alive so buffered log lines are written on exit
    let _log_guard = init_logging(cli.verbose, file_config.logging.log_file.as_deref())?;

    info!("Starting Lobby Quorum");

    let (config, issues) = file_config.to_coordinator_config();
    report_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration; fix the errors above and try again");
    }

    let output = OutputConfig {
        format: file_config.output.resolve_format(cli.output.map(Into::into)),
        color: file_config.output.color && !cli.no_color,
        pretty_json: file_config.output.pretty_json,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    let repl_config = ReplConfig {
        prompt: file_config.repl.prompt.clone(),
        show_events: file_config.repl.show_events && !cli.quiet,
        show_votes: (file_config.repl.show_votes || cli.verbose > 0) && !cli.quiet,
        history_file: file_config.repl.history_file.as_ref().map(PathBuf::from),
    };

    // === Dependency Injection ===
    let mut observer = CompositeRoundObserver::default();
    if let Some(path) = &file_config.logging.events_file {
        match JsonlRoundLogger::new(path) {
            Some(logger) => {
                info!("Writing round events to {}", logger.path().display());
                observer.push(Arc::new(logger));
            }
            None => warn!("Round event log disabled"),
        }
    }
    if repl_config.show_events || repl_config.show_votes {
        observer.push(Arc::new(
            ConsoleRoundReporter::new()
                .with_events(repl_config.show_events)
                .with_votes(repl_config.show_votes),
        ));
    }

    let mut coordinator = RoundCoordinator::new(config);
    if !observer.is_empty() {
        let observer: Arc<dyn RoundObserver> = Arc::new(observer);
        coordinator = coordinator.with_observer(observer);
    }

    let repl = VoteRepl::new(coordinator.clone())
        .with_output(&output)
        .with_config(repl_config);

    let result = repl.run().await;

    // Stop the round driver before the event log is dropped
    coordinator.shutdown().await;
    result?;

    Ok(())
}

/// Initialize tracing, to stderr or to a log file
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(log_file);
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", log_file))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Flags take precedence over every configuration source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(required) = cli.required_voters {
        config.round.required_voters = required;
    }
    if let Some(secs) = cli.decision_delay {
        config.round.decision_delay_secs = secs;
    }
    if let Some(secs) = cli.total_duration {
        config.round.total_duration_secs = secs;
    }
    if let Some(policy) = cli.late_votes {
        config.round.late_votes = policy.to_string();
    }
    if let Some(mode) = cli.history {
        config.history.mode = mode.to_string();
    }
    if let Some(limit) = cli.history_limit {
        config.history.limit = Some(limit);
    }
    if let Some(path) = &cli.events_file {
        config.logging.events_file = Some(path.display().to_string());
    }
    if let Some(path) = &cli.log_file {
        config.logging.log_file = Some(path.display().to_string());
    }
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => eprintln!("error: {}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }
}
