//! Integration tests for the calibration service

mod common;

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::common::{temp_store, CountingSource};
    use pacos_trendline::*;

    #[tokio::test]
    async fn test_apply_follows_coefficient_changes() {
        let (store, _dir) = temp_store("PACOS_TEST_SERVICE_APPLY").await;
        let service = CalibrationService::new(store.clone());

        assert_eq!(service.apply(&[1.0, 2.0, 3.0]).await.unwrap(), vec![1.0, 2.0, 3.0]);

        store.set(2.0).await.unwrap();
        assert_eq!(service.apply(&[1.0, 2.0, 3.0]).await.unwrap(), vec![2.0, 4.0, 6.0]);
    }

    #[tokio::test]
    async fn test_apply_preserves_order_and_length() {
        let service = CalibrationService::new(FixedCoefficient(0.5));
        let values = [8.0, -2.0, 0.0, 3.0, 8.0];

        let result = service.apply(&values).await.unwrap();
        assert_eq!(result, vec![4.0, -1.0, 0.0, 1.5, 4.0]);
        assert!(service.apply(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_reads_coefficient_once() {
        let source = CountingSource::new(3.0);
        let service = CalibrationService::new(source.clone());

        service.apply(&[1.0; 100]).await.unwrap();
        assert_eq!(source.reads(), 1);
    }

    #[tokio::test]
    async fn test_stream_is_lazy_and_reads_once() {
        let source = CountingSource::new(2.0);
        let service = CalibrationService::new(source.clone());

        let stream = service.stream(vec![1.0, 2.0, 3.0]).await.unwrap();
        assert_eq!(source.reads(), 1);
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!(source.reads(), 1);
    }

    #[tokio::test]
    async fn test_stream_holds_coefficient_for_its_iteration() {
        let (store, _dir) = temp_store("PACOS_TEST_SERVICE_STREAM").await;
        let service = CalibrationService::new(store.clone());

        let mut in_flight = service.stream([1.0, 2.0, 3.0]).await.unwrap();
        assert_eq!(in_flight.next(), Some(1.0));

        store.set(10.0).await.unwrap();
        assert_eq!(in_flight.coefficient(), 1.0);
        assert_eq!(in_flight.collect::<Vec<_>>(), vec![2.0, 3.0]);

        // A fresh stream re-reads the coefficient
        let restarted: Vec<f64> = service.stream([1.0, 2.0, 3.0]).await.unwrap().collect();
        assert_eq!(restarted, vec![10.0, 20.0, 30.0]);
    }

    #[tokio::test]
    async fn test_stream_reads_coefficient_before_first_item() {
        let (store, _dir) = temp_store("PACOS_TEST_SERVICE_STREAM_EARLY").await;
        let service = CalibrationService::new(store.clone());

        let pending = service.stream(vec![1.0, 2.0]).await.unwrap();
        store.set(5.0).await.unwrap();

        assert_eq!(pending.coefficient(), 1.0);
        assert_eq!(pending.collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_stream_over_unbounded_input() {
        let service = CalibrationService::new(FixedCoefficient(4.0));
        let taken: Vec<f64> = service
            .stream((1i32..).map(f64::from))
            .await
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(taken, vec![4.0, 8.0, 12.0]);
    }

    #[tokio::test]
    async fn test_stream_supports_reverse_iteration() {
        let service = CalibrationService::new(FixedCoefficient(-1.0));
        let reversed: Vec<f64> = service.stream(vec![1.0, 2.0]).await.unwrap().rev().collect();
        assert_eq!(reversed, vec![-2.0, -1.0]);
    }

    #[tokio::test]
    async fn test_shared_source_serves_service_and_calculator() {
        let source = CountingSource::new(2.0);
        let shared: std::sync::Arc<dyn CoefficientSource> = std::sync::Arc::new(source.clone());
        let service = CalibrationService::with_source(shared.clone());
        let calculator = TrendlineCalculator::with_source(shared);

        assert_eq!(service.apply(&[1.5]).await.unwrap(), vec![3.0]);
        let line = calculator
            .calculate(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .await
            .unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(source.reads(), 2);
    }
}
