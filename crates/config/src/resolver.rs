//! Default coefficient resolution

use crate::constants::{DEFAULT_COEFFICIENT_ENV, FALLBACK_COEFFICIENT};
use crate::ConfigHandle;
use tracing::debug;

/// Parse textual coefficient input
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a finite `f64`, so `"nan"` and `"inf"` are rejected like `"abc"`.
#[must_use]
pub fn parse_coefficient(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Derives the coefficient seeded into an empty store
///
/// Precedence, evaluated on every [`resolve`](DefaultResolver::resolve):
/// 1. the override environment variable, when it parses
/// 2. `calibration.default_coefficient` from the attached configuration
/// 3. [`FALLBACK_COEFFICIENT`]
#[derive(Debug, Clone)]
pub struct DefaultResolver {
    override_var: String,
    config: Option<ConfigHandle>,
}

impl DefaultResolver {
    /// Resolver reading `PACOS_TRENDLINE_DEFAULT` with no file configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_override_var(DEFAULT_COEFFICIENT_ENV)
    }

    /// Resolver reading the override from a different environment variable
    #[must_use]
    pub fn with_override_var(name: impl Into<String>) -> Self {
        Self {
            override_var: name.into(),
            config: None,
        }
    }

    /// Consult `config` when the environment override is absent
    #[must_use]
    pub fn with_config(mut self, config: ConfigHandle) -> Self {
        self.config = Some(config);
        self
    }

    /// Name of the environment variable holding the override
    #[must_use]
    pub fn override_var(&self) -> &str {
        &self.override_var
    }

    /// Current default coefficient
    ///
    /// Never fails: an unparsable override is treated as absent.
    #[must_use]
    pub fn resolve(&self) -> f64 {
        if let Ok(raw) = std::env::var(&self.override_var) {
            if let Some(value) = parse_coefficient(&raw) {
                return value;
            }
            debug!(
                var = %self.override_var,
                value = %raw,
                "ignoring unparsable default coefficient override"
            );
        }

        self.config
            .as_ref()
            .map_or(FALLBACK_COEFFICIENT, |handle| {
                handle.snapshot().default_coefficient()
            })
    }
}

impl Default for DefaultResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{CalibrationConfig, Config};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_TEST_MUTEX
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(parse_coefficient(" 3.5 "), Some(3.5));
        assert_eq!(parse_coefficient("-2"), Some(-2.0));
        assert_eq!(parse_coefficient("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_rejects_non_finite_and_garbage() {
        assert_eq!(parse_coefficient("abc"), None);
        assert_eq!(parse_coefficient(""), None);
        assert_eq!(parse_coefficient("NaN"), None);
        assert_eq!(parse_coefficient("inf"), None);
        assert_eq!(parse_coefficient("-infinity"), None);
    }

    #[test]
    fn unset_override_uses_fallback() {
        let _guard = env_lock();
        let resolver = DefaultResolver::with_override_var("PACOS_TEST_RESOLVER_UNSET");
        std::env::remove_var(resolver.override_var());
        assert_eq!(resolver.resolve(), FALLBACK_COEFFICIENT);
    }

    #[test]
    fn override_is_reread_on_every_call() {
        let _guard = env_lock();
        let resolver = DefaultResolver::with_override_var("PACOS_TEST_RESOLVER_LIVE");
        std::env::set_var(resolver.override_var(), "3.5");
        assert_eq!(resolver.resolve(), 3.5);

        std::env::set_var(resolver.override_var(), "4.25");
        assert_eq!(resolver.resolve(), 4.25);

        std::env::remove_var(resolver.override_var());
        assert_eq!(resolver.resolve(), FALLBACK_COEFFICIENT);
    }

    #[test]
    fn unparsable_override_falls_back_silently() {
        let _guard = env_lock();
        let resolver = DefaultResolver::with_override_var("PACOS_TEST_RESOLVER_GARBAGE");
        std::env::set_var(resolver.override_var(), "not-a-number");
        assert_eq!(resolver.resolve(), FALLBACK_COEFFICIENT);
        std::env::remove_var(resolver.override_var());
    }

    #[test]
    fn config_default_applies_below_override() {
        let _guard = env_lock();
        let config = Config {
            calibration: CalibrationConfig {
                default_coefficient: Some(0.75),
            },
            ..Config::default()
        };
        let resolver = DefaultResolver::with_override_var("PACOS_TEST_RESOLVER_CONFIG")
            .with_config(ConfigHandle::new(config));

        std::env::remove_var(resolver.override_var());
        assert_eq!(resolver.resolve(), 0.75);

        std::env::set_var(resolver.override_var(), "garbage");
        assert_eq!(resolver.resolve(), 0.75);

        std::env::set_var(resolver.override_var(), "9");
        assert_eq!(resolver.resolve(), 9.0);
        std::env::remove_var(resolver.override_var());
    }
}
