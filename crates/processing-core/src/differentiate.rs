//! Numerical differentiation over a sampled time base.
//!
//! Interior samples use the central difference over their two neighbours;
//! the first and last samples fall back to forward and backward
//! differences. The derivative at `i` therefore only reads samples
//! `i - 1`, `i`, and `i + 1`.

use gaitkin_common::{GaitkinError, GaitkinResult};

/// Fewest samples a derivative can be taken over.
pub const MIN_SAMPLES: usize = 2;

/// Indices `(lo, hi)` of the difference used at sample `i` of `n`.
pub fn stencil(i: usize, n: usize) -> (usize, usize) {
    if i == 0 {
        (0, 1)
    } else if i == n - 1 {
        (n - 2, n - 1)
    } else {
        (i - 1, i + 1)
    }
}

/// Differentiate `values` with respect to `times`.
///
/// Both slices must have the same length of at least [`MIN_SAMPLES`].
/// Times are assumed strictly increasing.
pub fn differentiate(values: &[f64], times: &[f64]) -> GaitkinResult<Vec<f64>> {
    if values.len() != times.len() {
        return Err(GaitkinError::length_mismatch(times.len(), values.len()));
    }
    let n = values.len();
    if n < MIN_SAMPLES {
        return Err(GaitkinError::insufficient_data(MIN_SAMPLES, n));
    }

    Ok((0..n)
        .map(|i| {
            let (lo, hi) = stencil(i, n);
            (values[hi] - values[lo]) / (times[hi] - times[lo])
        })
        .collect())
}

/// First and second derivative of a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivatives {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

/// Differentiate twice, the second pass running over the first's output.
pub fn differentiate_twice(values: &[f64], times: &[f64]) -> GaitkinResult<Derivatives> {
    let first = differentiate(values, times)?;
    let second = differentiate(&first, times)?;
    Ok(Derivatives { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_samples_share_one_difference() {
        let d = differentiate(&[1.0, 4.0], &[0.0, 0.5]).unwrap();
        assert_eq!(d, vec![6.0, 6.0]);
    }

    #[test]
    fn test_boundaries_and_interior() {
        let values = [0.10, 0.05, 0.02, 0.05, 0.10];
        let times = [0.00, 0.01, 0.02, 0.03, 0.04];
        let d = differentiate(&values, &times).unwrap();
        let expected = [-5.0, -4.0, 0.0, 4.0, 5.0];
        for (got, want) in d.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn test_uneven_time_base() {
        let values = [0.0, 1.0, 4.0];
        let times = [0.0, 1.0, 3.0];
        let d = differentiate(&values, &times).unwrap();
        assert_eq!(d, vec![1.0, 4.0 / 3.0, 1.5]);
    }

    #[test]
    fn test_linear_signal_has_exact_slope() {
        let times: Vec<f64> = (0..20).map(|i| i as f64 * 0.25).collect();
        let values: Vec<f64> = times.iter().map(|t| 3.0 * t - 1.0).collect();
        for d in differentiate(&values, &times).unwrap() {
            assert!((d - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_single_sample() {
        let err = differentiate(&[1.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            GaitkinError::InsufficientData {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            differentiate(&[], &[]),
            Err(GaitkinError::InsufficientData { actual: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = differentiate(&[1.0, 2.0, 3.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            GaitkinError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_second_derivative_of_parabola() {
        let times: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        let values: Vec<f64> = times.iter().map(|t| t * t).collect();
        let d = differentiate_twice(&values, &times).unwrap();
        // Away from the one-sided edges, both passes are exact for a parabola.
        for i in 2..9 {
            assert!((d.first[i] - 2.0 * times[i]).abs() < 1e-9);
            assert!((d.second[i] - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stencil() {
        assert_eq!(stencil(0, 5), (0, 1));
        assert_eq!(stencil(2, 5), (1, 3));
        assert_eq!(stencil(4, 5), (3, 4));
        assert_eq!(stencil(1, 2), (0, 1));
    }

    proptest! {
        #[test]
        fn constant_series_has_zero_derivative(
            value in -1.0e3f64..1.0e3,
            steps in proptest::collection::vec(0.001f64..0.1, 1..50),
        ) {
            let mut times = vec![0.0];
            for step in &steps {
                let last = *times.last().unwrap();
                times.push(last + step);
            }
            let values = vec![value; times.len()];
            for d in differentiate(&values, &times).unwrap() {
                prop_assert_eq!(d, 0.0);
            }
        }
    }
}
