//! Peak detection over reflected traces, for identifying reflection events
//! from layer interfaces and concealed objects.

/// Indices of local maxima of `|signal|` above a fraction of its peak value.
pub fn detect_peaks(signal: ndarray::ArrayView1<f64>, threshold_ratio: f64) -> Vec<usize> {
    if signal.len() < 3 {
        return Vec::new();
    }

    let max_amplitude = signal.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    let threshold = threshold_ratio * max_amplitude;

    let mut peaks = Vec::new();
    for i in 1..signal.len() - 1 {
        let here = signal[i].abs();
        if here > threshold && here > signal[i - 1].abs() && here > signal[i + 1].abs() {
            peaks.push(i);
        }
    }

    peaks
}

/// Like [`detect_peaks`], but enforcing a minimum index spacing; of a run of
/// close peaks, the earliest survives.
pub fn detect_peaks_with_distance(
    signal: ndarray::ArrayView1<f64>,
    threshold_ratio: f64,
    min_distance: usize,
) -> Vec<usize> {
    let candidates = detect_peaks(signal, threshold_ratio);
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut filtered = vec![candidates[0]];
    for &index in &candidates[1..] {
        if index - filtered[filtered.len() - 1] >= min_distance {
            filtered.push(index);
        }
    }

    filtered
}

/// Signal values at the detected peak indices.
pub fn peak_amplitudes(signal: ndarray::ArrayView1<f64>, peaks: &[usize]) -> Vec<f64> {
    peaks.iter().map(|&i| signal[i]).collect()
}

/// Total energy `Σ s²`.
pub fn signal_energy(signal: ndarray::ArrayView1<f64>) -> f64 {
    signal.iter().map(|&v| v * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_peak_signal() -> ndarray::Array1<f64> {
        let mut signal = ndarray::Array1::zeros(100);
        signal[20] = 1.0;
        signal[19] = 0.4;
        signal[21] = 0.4;
        signal[60] = -0.6;
        signal[59] = -0.2;
        signal[61] = -0.2;
        signal
    }

    #[test]
    fn finds_both_polarities() {
        let signal = two_peak_signal();
        let peaks = detect_peaks(signal.view(), 0.2);
        assert_eq!(peaks, vec![20, 60]);
    }

    #[test]
    fn threshold_suppresses_small_peaks() {
        let signal = two_peak_signal();
        let peaks = detect_peaks(signal.view(), 0.8);
        assert_eq!(peaks, vec![20]);
    }

    #[test]
    fn short_signals_have_no_peaks() {
        let signal = ndarray::arr1(&[1.0, 2.0]);
        assert!(detect_peaks(signal.view(), 0.1).is_empty());
    }

    #[test]
    fn distance_filter_keeps_earliest() {
        let mut signal = ndarray::Array1::zeros(50);
        for &i in &[10usize, 14, 30] {
            signal[i] = 1.0;
        }
        let peaks = detect_peaks_with_distance(signal.view(), 0.2, 10);
        assert_eq!(peaks, vec![10, 30]);
    }

    #[test]
    fn amplitudes_and_energy() {
        let signal = two_peak_signal();
        let peaks = detect_peaks(signal.view(), 0.2);
        let amplitudes = peak_amplitudes(signal.view(), &peaks);

        assert_relative_eq!(amplitudes[0], 1.0);
        assert_relative_eq!(amplitudes[1], -0.6);
        assert_relative_eq!(
            signal_energy(signal.view()),
            1.0 + 2.0 * 0.16 + 0.36 + 2.0 * 0.04,
        );
    }
}
