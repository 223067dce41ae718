//! Shared fixtures for trendline tests

#![allow(dead_code)]

use async_trait::async_trait;
use pacos_config::{CalibrationConfig, Config, ConfigHandle, DefaultResolver};
use pacos_errors::Error;
use pacos_state::CoefficientStore;
use pacos_trendline::CoefficientSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Store backed by a fresh database
///
/// `override_var` must never be set by any test, so seeding falls through to
/// the fallback coefficient.
pub async fn temp_store(override_var: &str) -> (CoefficientStore, TempDir) {
    open_store(DefaultResolver::with_override_var(override_var)).await
}

/// Store whose empty state seeds `default` from file configuration
pub async fn configured_store(override_var: &str, default: f64) -> (CoefficientStore, TempDir) {
    let config = Config {
        calibration: CalibrationConfig {
            default_coefficient: Some(default),
        },
        ..Config::default()
    };
    let resolver =
        DefaultResolver::with_override_var(override_var).with_config(ConfigHandle::new(config));
    open_store(resolver).await
}

async fn open_store(resolver: DefaultResolver) -> (CoefficientStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = CoefficientStore::open(&dir.path().join("pacos.sqlite3"), resolver)
        .await
        .unwrap();
    (store, dir)
}

/// Source that counts reads and returns a fixed value
#[derive(Clone, Default)]
pub struct CountingSource {
    pub reads: Arc<AtomicUsize>,
    pub value: f64,
}

impl CountingSource {
    pub fn new(value: f64) -> Self {
        Self {
            reads: Arc::new(AtomicUsize::new(0)),
            value,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoefficientSource for CountingSource {
    async fn coefficient(&self) -> Result<f64, Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.value)
    }
}
