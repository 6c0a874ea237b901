//! Test that the library is safe to use concurrently from multiple threads.

use std::sync::Arc;
use std::thread;

use pearson_resample::{bootstrap_pearsonr, permutation_pearsonr, ResampleConfig};

#[test]
fn concurrent_calls_agree_with_single_call() {
    let y_true: Arc<Vec<f64>> = Arc::new(
        (0..64)
            .map(|i| (i as f64).sin() + i as f64 / 16.0)
            .collect(),
    );
    let y_pred: Arc<Vec<f64>> = Arc::new(
        y_true
            .iter()
            .enumerate()
            .map(|(i, v)| v + ((i * 29) % 13) as f64 / 10.0)
            .collect(),
    );
    let config = ResampleConfig::new().samples(1500).seed(2024);

    let reference_interval = bootstrap_pearsonr(&y_true, &y_pred, &config).unwrap();
    let reference_test = permutation_pearsonr(&y_true, &y_pred, &config).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let y_true = Arc::clone(&y_true);
            let y_pred = Arc::clone(&y_pred);
            let config = config.clone();
            thread::spawn(move || {
                (
                    bootstrap_pearsonr(&y_true, &y_pred, &config).unwrap(),
                    permutation_pearsonr(&y_true, &y_pred, &config).unwrap(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (interval, test) = handle.join().expect("thread panicked");
        assert_eq!(interval, reference_interval);
        assert_eq!(test, reference_test);
    }
}
