//! Persistence Adapters - Store implementations
//!
//! These implement the `HeroStore` trait from justica-domain. The host
//! picks one at startup with [`open_store`].

pub mod in_memory;
pub mod json_file;

use justica_domain::repository::hero_store::{HeroStore, StoreError};
use shared::{AppConfig, BackendKind, JusticaError};
use thiserror::Error;
use tracing::info;

use self::in_memory::MemoryHeroStore;
use self::json_file::JsonFileHeroStore;

/// Failure to build the configured backend
#[derive(Debug, Error)]
pub enum OpenStoreError {
    #[error(transparent)]
    Config(#[from] JusticaError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build the backend named by the configuration
pub fn open_store(config: &AppConfig) -> Result<Box<dyn HeroStore>, OpenStoreError> {
    info!(backend = %config.backend, "Opening hero store");

    match config.backend {
        BackendKind::Json => {
            let path = config.data_file_path()?;
            Ok(Box::new(JsonFileHeroStore::open(path)?))
        }
        BackendKind::Memory => Ok(Box::new(MemoryHeroStore::with_capacity(
            config.initial_capacity,
        ))),
    }
}
