//! `logcat` driver.
//!
//! Reads lines from stdin (or a single `--message`) and sends each through
//! the LogCat facade into the tracing subscriber. With `--config` and
//! `--watch`, edits to the config file are applied while running.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use logcat::config::watcher::ConfigWatcher;
use logcat::config::{load_config, LogCatConfig};
use logcat::logcat::TracingSink;
use logcat::observability::logging::init_tracing;
use logcat::{JsonOptions, Level, LogCat, LogOptions};

#[derive(Parser)]
#[command(name = "logcat")]
#[command(about = "Send text through the LogCat logging facade", long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload the config file when it changes.
    #[arg(long)]
    watch: bool,

    /// Level for every line (verbose, debug, info, warn, error, wtf).
    #[arg(short, long, default_value = "info")]
    level: Level,

    /// Tag override.
    #[arg(short, long)]
    tag: Option<String>,

    /// Pretty-print each line as JSON.
    #[arg(long)]
    json: bool,

    /// Log this message instead of reading stdin.
    #[arg(short, long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogCatConfig::default(),
    };

    init_tracing(&config.observability.log_level);
    tracing::info!("logcat v{} starting", env!("CARGO_PKG_VERSION"));

    let cat = Arc::new(LogCat::from_config(&config, Arc::new(TracingSink)));

    // Dropping the watcher stops it, so keep it for the whole run
    let _watcher = match (&cli.config, cli.watch) {
        (Some(path), true) => {
            let (watcher, mut updates) = ConfigWatcher::new(path);
            let handle = watcher.run()?;
            let cat = cat.clone();
            tokio::spawn(async move {
                while let Some(new_config) = updates.recv().await {
                    cat.apply_config(&new_config);
                }
            });
            Some(handle)
        }
        (None, true) => {
            tracing::warn!("--watch has no effect without --config");
            None
        }
        _ => None,
    };

    match &cli.message {
        Some(message) => emit(&cat, &cli, message),
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                emit(&cat, &cli, &line);
            }
        }
    }

    tracing::debug!("Input exhausted");
    Ok(())
}

/// Lines come from outside the program, so no call site is attached: the
/// text is logged as given and the tag is `--tag` or the configured default.
fn emit(cat: &LogCat, cli: &Cli, text: &str) {
    if cli.json {
        let mut opts = JsonOptions::new().level(cli.level);
        if let Some(tag) = &cli.tag {
            opts = opts.tag(tag.clone());
        }
        cat.json_with(Some(text), opts);
    } else {
        let mut opts = LogOptions::new();
        if let Some(tag) = &cli.tag {
            opts = opts.tag(tag.clone());
        }
        cat.log(cli.level, Some(text), opts);
    }
}
