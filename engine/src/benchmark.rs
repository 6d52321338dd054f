//! Repeated timing of a fixed invocation.

use std::hint::black_box;

use serde::Serialize;

use crate::report::Timer;

pub const DEFAULT_REPEATS: usize = 10;

/// Summary of a series of running times, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingStatistics {
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl TimingStatistics {
    pub fn from_samples(samples_ms: &[f64]) -> Option<Self> {
        if samples_ms.is_empty() {
            return None;
        }

        let n = samples_ms.len() as f64;
        let min = samples_ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples_ms.iter().sum::<f64>() / n;
        let variance = samples_ms.iter().map(|sample| (sample - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            samples: samples_ms.len(),
            min,
            max,
            // rounding can push the mean of identical samples marginally out of range
            mean: mean.clamp(min, max),
            std: variance.sqrt(),
        })
    }
}

/// Run `invocation` `repeats` times in a row and summarize the running times.
///
/// Every run recomputes its result from scratch; results are discarded.
pub fn measure<Out, F: FnMut() -> Out>(mut invocation: F, repeats: usize) -> TimingStatistics {
    let samples = measure_samples(&mut invocation, repeats);

    let statistics = TimingStatistics::from_samples(&samples).expect("at least one sample is measured");
    report!("running_time_ms", {
        "samples": statistics.samples,
        "min": statistics.min,
        "max": statistics.max,
        "mean": statistics.mean,
        "std": statistics.std,
    });

    statistics
}

/// The raw running times in milliseconds, one per run.
pub fn measure_samples<Out, F: FnMut() -> Out>(mut invocation: F, repeats: usize) -> Vec<f64> {
    assert!(repeats > 0, "Number of repetitions must be positive!");

    (0..repeats)
        .map(|_| {
            let timer = Timer::new();
            black_box(invocation());
            timer.get_passed_ms()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_of_known_samples() {
        let stats = TimingStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(stats.samples, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std, 2.0);
    }

    #[test]
    fn no_statistics_without_samples() {
        assert_eq!(TimingStatistics::from_samples(&[]), None);
    }

    #[test]
    fn single_sample_has_no_deviation() {
        let stats = TimingStatistics::from_samples(&[1.5]).unwrap();

        assert_eq!(stats.min, 1.5);
        assert_eq!(stats.max, 1.5);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn runs_invocation_once_per_repetition() {
        let mut calls = 0;
        let stats = measure(
            || {
                calls += 1;
                (0..1000u64).sum::<u64>()
            },
            7,
        );

        assert_eq!(calls, 7);
        assert_eq!(stats.samples, 7);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min >= 0.0);
    }

    #[test]
    #[should_panic]
    fn zero_repetitions_are_rejected() {
        measure(|| (), 0);
    }
}
