//! repolock - Entry Point
//!
//! Inspects and validates lock service configuration.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `repolock validate` | Load and validate the configuration, open the token store |
//! | `repolock show-config` | Print the effective configuration as TOML |

use anyhow::Context;
use clap::{Parser, Subcommand};
use repolock_domain::ports::TokenStore;
use repolock_infrastructure::config::loader::to_toml;
use repolock_infrastructure::config::{AppConfig, ConfigLoader, StoreProvider};
use repolock_infrastructure::logging::init_logging;
use repolock_providers::FilesystemTokenStore;
use std::path::PathBuf;
use tracing::info;

/// Command line interface for repolock
#[derive(Parser, Debug)]
#[command(name = "repolock")]
#[command(about = "repolock - Resource locking for versioned tree stores")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration and open the configured token store
    Validate,
    /// Print the effective configuration as TOML
    ShowConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("invalid configuration")?;

    match cli.command {
        Command::Validate => {
            init_logging(&config.logging).context("failed to initialize logging")?;
            validate(&config).await
        }
        Command::ShowConfig => {
            print!("{}", to_toml(&config)?);
            Ok(())
        }
    }
}

async fn validate(config: &AppConfig) -> anyhow::Result<()> {
    info!(
        store = config.store.provider.as_str(),
        token_bytes = config.locking.token_bytes,
        admins = config.locking.admin_principals.len(),
        "Configuration valid"
    );

    if config.store.provider == StoreProvider::Filesystem {
        let dir = config.store.lock_dir();
        let store = FilesystemTokenStore::open(&dir)
            .await
            .with_context(|| format!("cannot open lock directory {}", dir.display()))?;
        let locks = store.list().await?;
        info!(path = %store.base_path().display(), locks = locks.len(), "Token store readable");
    }

    println!("configuration OK ({} store)", config.store.provider.as_str());
    Ok(())
}
