use clap::Parser;
use tracing::warn;

use errnotify::cli::commands::{classify, config as config_cmd, demo, theme};
use errnotify::cli::{Cli, Commands, ConfigAction, ThemeAction};
use errnotify::config::{Config, ConfigError};
use errnotify::telemetry::{TracingConfig, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken file must not block `config init`, so errors surface per command.
    let loaded = Config::load();
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let _guard = init_tracing(&TracingConfig::from_logging(&logging, cli.debug))?;

    match cli.command {
        Some(Commands::Classify(args)) => {
            classify::handle_classify(args, &config_or_default(loaded)).await
        }
        Some(Commands::Demo {
            offline,
            auto_close_ms,
        }) => demo::handle_demo(offline, auto_close_ms, &config_or_default(loaded)).await,
        Some(Commands::Theme {
            action: ThemeAction::Toggle { dark },
        }) => theme::handle_toggle(dark, &config_or_default(loaded)),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { force, path } => config_cmd::handle_init(force, path).await,
            ConfigAction::Show => config_cmd::handle_show(&loaded?).await,
            ConfigAction::Validate => config_cmd::handle_validate(loaded).await,
        },
        None => {
            println!("errnotify - error classification and toast routing");
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}

fn config_or_default(loaded: Result<Config, ConfigError>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!(error = %err, "Failed to load config; using defaults");
        Config::default()
    })
}
