//! Summary statistics over trial samples.
//!
//! Samples are simulated durations in seconds. Standard deviation is the
//! population form (divide by `n`), since a trial sample is the whole set
//! of runs for one experiment rather than a draw from a larger one.

/// Arithmetic mean, or `None` for an empty sample.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation around `mean`, or `None` for an empty sample.
pub fn stddev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let variance: f64 = samples
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;

    Some(variance.sqrt())
}

/// Mean and standard deviation in one pass over the call site.
pub fn summarize(samples: &[f64]) -> Option<(f64, f64)> {
    let m = mean(samples)?;
    let sd = stddev(samples, m)?;
    Some((m, sd))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(a: f64, b: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_mean_basic() {
        assert_close(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5, "mean basic");
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(mean(&[]), None);
        assert_eq!(stddev(&[], 0.0), None);
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_stddev_population() {
        // Classic example: population stddev of this set is exactly 2
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&samples).unwrap();
        assert_close(m, 5.0, "mean");
        assert_close(stddev(&samples, m).unwrap(), 2.0, "population stddev");
    }

    #[test]
    fn test_stddev_constant_sample_is_zero() {
        let samples = [0.25; 5];
        let (m, sd) = summarize(&samples).unwrap();
        assert_close(m, 0.25, "mean");
        assert_close(sd, 0.0, "stddev");
    }

    #[test]
    fn test_single_sample() {
        let (m, sd) = summarize(&[0.002045]).unwrap();
        assert_close(m, 0.002045, "mean");
        assert_close(sd, 0.0, "stddev");
    }
}
