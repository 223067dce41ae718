//! System setup and initialization

use crate::cli::GlobalArgs;
use crate::error::CliError;
use pacos_config::{ConfigHandle, DefaultResolver};
use pacos_state::CoefficientStore;
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration and store wiring for a single command
pub struct SystemSetup {
    store: CoefficientStore,
}

impl SystemSetup {
    /// Load configuration and open the coefficient store
    ///
    /// Precedence for the database path: `--db-path`, then `PACOS_DB_PATH`,
    /// then the config file, then the built-in default.
    pub async fn initialize(global: &GlobalArgs) -> Result<Self, CliError> {
        let config = ConfigHandle::load(global.config.clone()).await?;
        debug!(source = ?config.source(), "configuration loaded");

        let db_path: PathBuf = global
            .db_path
            .clone()
            .unwrap_or_else(|| config.snapshot().db_path());

        let resolver = DefaultResolver::new().with_config(config);
        let store = CoefficientStore::open(&db_path, resolver).await?;
        info!(db_path = %db_path.display(), "coefficient store ready");

        Ok(Self { store })
    }

    /// Coefficient store
    pub fn store(&self) -> &CoefficientStore {
        &self.store
    }
}
