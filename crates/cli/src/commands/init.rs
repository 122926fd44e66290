//! justica init command

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use justica_adapter::JsonFileHeroStore;
use justica_domain::HeroStore;
use shared::{AppConfig, BackendKind, HERO_DATA_FILE};

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Configure the memory backend instead of a data file
    #[arg(long)]
    pub memory: bool,
}

impl InitCommand {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Initializing hero repository in {:?}", self.directory)?;
        std::fs::create_dir_all(&self.directory)?;

        let config = if self.memory {
            AppConfig {
                backend: BackendKind::Memory,
                ..AppConfig::default()
            }
        } else {
            let data_file = self.directory.join(HERO_DATA_FILE);
            let store = JsonFileHeroStore::open(&data_file)?;
            writeln!(
                out,
                "✓ Data file ready: {} ({} heroes)",
                store.path().display(),
                store.size()
            )?;
            AppConfig {
                backend: BackendKind::Json,
                hero_data_file: Some(data_file),
                ..AppConfig::default()
            }
        };

        let config_path = self.directory.join("config.json");
        std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

        writeln!(out, "✓ Configuration written to {}", config_path.display())?;
        Ok(())
    }
}
