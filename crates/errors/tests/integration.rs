//! Integration tests for error types

#[cfg(test)]
mod tests {
    use pacos_errors::*;

    #[test]
    fn test_error_conversion() {
        let err: Error = CalibrationError::EmptySeries.into();
        assert!(matches!(
            err,
            Error::Calibration(CalibrationError::EmptySeries)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = CalibrationError::invalid_coefficient("abc");
        assert_eq!(
            err.to_string(),
            "invalid coefficient: \"abc\" is not a finite number"
        );
    }

    #[test]
    fn test_sqlx_error_maps_to_storage_unavailable() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(
            err,
            Error::Storage(StorageError::Unavailable { .. })
        ));
        assert!(err.is_retryable());
        assert_eq!(err.user_code(), Some("storage.unavailable"));
    }

    #[test]
    fn test_user_facing_codes() {
        let err: Error = CalibrationError::invalid_coefficient(f64::NAN).into();
        assert_eq!(err.user_code(), Some("calibration.invalid_coefficient"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_migrate_error_maps_to_migration_failed() {
        let err: Error = sqlx::migrate::MigrateError::VersionMissing(20_250_101_000_000).into();
        assert!(matches!(
            err,
            Error::Storage(StorageError::MigrationFailed { .. })
        ));
        assert_eq!(err.user_code(), Some("storage.migration_failed"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_config_errors_are_not_retryable() {
        let err: Error = ConfigError::NotFound {
            path: "/etc/pacos.toml".to_string(),
        }
        .into();
        assert!(!err.is_retryable());
        assert!(err.user_message().contains("/etc/pacos.toml"));
    }
}
