//! Shared configuration snapshot with explicit reload

use crate::Config;
use pacos_errors::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Cloneable handle to the current configuration
///
/// Every clone observes the same snapshot. Nothing is re-read implicitly;
/// callers that want fresh file or environment values call [`reload`].
///
/// [`reload`]: ConfigHandle::reload
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Config>>,
    source: Option<PathBuf>,
}

impl ConfigHandle {
    /// Wrap an already built configuration
    ///
    /// A later [`reload`](ConfigHandle::reload) rebuilds from the default
    /// config file location and the environment.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            source: None,
        }
    }

    /// Build the configuration from `source` (or the default location) and
    /// the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// environment holds an invalid value.
    pub async fn load(source: Option<PathBuf>) -> Result<Self, Error> {
        let config = build(source.as_deref()).await?;
        Ok(Self {
            inner: Arc::new(RwLock::new(config)),
            source,
        })
    }

    /// Copy of the current configuration
    #[must_use]
    pub fn snapshot(&self) -> Config {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Path of the file this handle reloads from, if one was given
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Discard the current snapshot and rebuild it from file and environment
    ///
    /// On failure the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the rebuilt configuration is invalid.
    pub async fn reload(&self) -> Result<(), Error> {
        let fresh = build(self.source.as_deref()).await?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if *guard == fresh {
            debug!("configuration reloaded without changes");
        } else {
            info!(db_path = %fresh.db_path().display(), "configuration reloaded");
        }
        *guard = fresh;
        Ok(())
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

async fn build(source: Option<&Path>) -> Result<Config, Error> {
    let mut config = Config::load_or_default(source).await?;
    config.merge_env()?;
    Ok(config)
}
