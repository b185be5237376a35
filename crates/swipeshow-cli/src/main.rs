use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swipeshow_core::{AnimationEffect, AppConfig, SourceKind};

mod commands;

#[derive(Parser)]
#[command(name = "swipeshow")]
#[command(author, version, about = "Swipe-to-dismiss image slider for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: RunOverrides,
}

/// Per-invocation overrides of the config file
#[derive(clap::Args, Default)]
struct RunOverrides {
    /// Item source: placeholders or library
    #[arg(long, global = true)]
    source: Option<SourceKind>,

    /// Photo directory for the library source
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Entrance effect (see `swipeshow effects`)
    #[arg(short, long, global = true)]
    effect: Option<AnimationEffect>,

    /// Number of placeholder items
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the slider (default)
    Run,
    /// List the entrance effects and their off-stage poses
    Effects,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
}

impl RunOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(dir) = self.dir {
            config.source.library_dir = dir;
            // A directory only makes sense for the library
            if self.source.is_none() {
                config.source.kind = SourceKind::Library;
            }
        }
        if let Some(effect) = self.effect {
            config.slider.effect = effect;
        }
        if let Some(count) = self.count {
            config.source.placeholder_count = count;
        }
    }
}

/// Console logging for the plain subcommands
fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// File logging while the TUI owns the terminal
fn init_file_logging(config: &AppConfig) -> Result<PathBuf> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .init();

    Ok(log_path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run) | None => {
            cli.overrides.apply(&mut config);
            let log_path = init_file_logging(&config)?;
            tracing::info!("Logging to {}", log_path.display());
            commands::run::run(config).await
        }
        Some(Commands::Effects) => {
            init_stderr_logging(&config);
            commands::effects::run(&config);
            Ok(())
        }
        Some(Commands::Config { action }) => {
            init_stderr_logging(&config);
            match action {
                ConfigAction::Init { force } => commands::config::init(force),
                ConfigAction::Path => commands::config::path(),
                ConfigAction::Show => {
                    cli.overrides.apply(&mut config);
                    commands::config::show(&config)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_run() {
        let cli = Cli::try_parse_from(["swipeshow"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "swipeshow", "run", "--source", "library", "--effect", "fade-in", "-n", "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));

        let mut config = AppConfig::default();
        cli.overrides.apply(&mut config);
        assert_eq!(config.source.kind, SourceKind::Library);
        assert_eq!(config.slider.effect, AnimationEffect::FadeIn);
        assert_eq!(config.source.placeholder_count, 3);
    }

    #[test]
    fn test_dir_implies_library() {
        let cli = Cli::try_parse_from(["swipeshow", "--dir", "/tmp/photos"]).unwrap();
        let mut config = AppConfig::default();
        cli.overrides.apply(&mut config);
        assert_eq!(config.source.kind, SourceKind::Library);
        assert_eq!(config.source.library_dir, PathBuf::from("/tmp/photos"));
    }

    #[test]
    fn test_unknown_effect_rejected() {
        assert!(Cli::try_parse_from(["swipeshow", "--effect", "wobble"]).is_err());
    }
}
