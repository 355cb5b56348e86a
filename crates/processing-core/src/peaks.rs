//! Local extremum detection.

use serde::{Deserialize, Serialize};

/// A local maximum of a sampled signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub index: usize,
    pub height: f64,
}

/// Samples strictly greater than both immediate neighbours and at least
/// `min_height`, in ascending index order.
///
/// The first and last samples have only one neighbour and are never peaks.
/// Plateaus produce no peak.
pub fn find_local_maxima(signal: &[f64], min_height: f64) -> Vec<Peak> {
    signal
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2] && w[1] >= min_height)
        .map(|(i, w)| Peak {
            index: i + 1,
            height: w[1],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_peak() {
        let peaks = find_local_maxima(&[0.0, 1.0, 3.0, 1.0, 0.0], 0.0);
        assert_eq!(
            peaks,
            vec![Peak {
                index: 2,
                height: 3.0
            }]
        );
    }

    #[test]
    fn test_height_threshold() {
        let signal = [0.0, -1.0, -0.5, -1.0, 2.0, 0.0];
        let peaks = find_local_maxima(&signal, 0.0);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].index, 4);
    }

    #[test]
    fn test_edges_are_not_peaks() {
        assert!(find_local_maxima(&[5.0, 4.0, 0.0, -4.0, -5.0], 0.0).is_empty());
    }

    #[test]
    fn test_plateau_is_not_a_peak() {
        assert!(find_local_maxima(&[0.0, 2.0, 2.0, 0.0], 0.0).is_empty());
    }

    #[test]
    fn test_short_signals() {
        assert!(find_local_maxima(&[], 0.0).is_empty());
        assert!(find_local_maxima(&[1.0, 2.0], 0.0).is_empty());
    }

    #[test]
    fn test_nan_never_peaks() {
        assert!(find_local_maxima(&[0.0, f64::NAN, 0.0], f64::NEG_INFINITY).is_empty());
    }
}
