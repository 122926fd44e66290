//! Backend selection flags shared by every command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use justica_adapter::open_store;
use justica_usecase::HeroRepository;
use shared::{AppConfig, BackendKind};
use tracing::debug;

use crate::Repository;

#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend: json or memory
    #[arg(short, long, global = true)]
    pub backend: Option<BackendKind>,

    /// Data file for the json backend
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

impl StoreArgs {
    /// Configuration file values, overridden by command-line flags
    pub fn resolve(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(path) = &self.data_file {
            config.hero_data_file = Some(path.clone());
        }

        debug!(
            backend = %config.backend,
            data_file = ?config.hero_data_file,
            explicit_config = self.config.is_some(),
            "Resolved store configuration"
        );
        Ok(config)
    }

    pub fn open(&self) -> anyhow::Result<Repository> {
        let config = self.resolve()?;
        let store = open_store(&config)
            .with_context(|| format!("Failed to open the {} hero store", config.backend))?;
        Ok(HeroRepository::new(store))
    }
}
