//! Noise models that turn a clean solver trace into a realistic received
//! signal.
//!
//! The generator is injected, so runs are reproducible under a seeded RNG.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::Error;

/// Adds white Gaussian noise at the given signal-to-noise ratio (dB).
pub fn add_awgn<R: Rng>(
    signal: ndarray::ArrayView1<f64>,
    snr_db: f64,
    rng: &mut R,
) -> Result<ndarray::Array1<f64>, Error> {
    if snr_db <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "snr_db",
            message: format!("signal-to-noise ratio must be positive ( got {snr_db} )"),
        });
    }

    let signal_power = signal.iter().map(|&v| v * v).sum::<f64>() / signal.len().max(1) as f64;
    let noise_power = signal_power / 10.0_f64.powf(snr_db / 10.0);

    let normal = Normal::new(0.0, noise_power.sqrt()).map_err(|_| Error::InvalidParameter {
        name: "snr_db",
        message: format!("derived noise power {noise_power} is not a valid deviation"),
    })?;

    Ok(signal.mapv(|v| v + normal.sample(rng)))
}

/// Adds random impulse spikes scaled to the peak signal amplitude.
pub fn add_impulse_noise<R: Rng>(
    signal: ndarray::ArrayView1<f64>,
    probability: f64,
    amplitude_factor: f64,
    rng: &mut R,
) -> Result<ndarray::Array1<f64>, Error> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidParameter {
            name: "probability",
            message: format!("impulse probability must lie in [0, 1] ( got {probability} )"),
        });
    }

    let max_amplitude = signal.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    let spike = amplitude_factor * max_amplitude;

    Ok(signal.mapv(|v| {
        if rng.gen::<f64>() < probability {
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            v + sign * spike
        } else {
            v
        }
    }))
}

/// Adds a delayed, attenuated copy of the signal, a simple multipath model.
pub fn add_multipath(
    signal: ndarray::ArrayView1<f64>,
    delay_samples: usize,
    attenuation: f64,
) -> ndarray::Array1<f64> {
    let mut output = signal.to_owned();

    if delay_samples < signal.len() {
        for i in delay_samples..signal.len() {
            output[i] += attenuation * signal[i - delay_samples];
        }
    }

    output
}

/// Combined noise pipeline settings.
#[derive(Debug, Clone, Copy)]
pub struct NoiseDescriptor {
    pub snr_db: f64,
    pub impulse_probability: f64,
    pub multipath_delay: usize,
    pub multipath_attenuation: f64,
}

impl Default for NoiseDescriptor {
    fn default() -> Self {
        Self {
            snr_db: 20.0,
            impulse_probability: 0.005,
            multipath_delay: 15,
            multipath_attenuation: 0.2,
        }
    }
}

/// Applies AWGN, impulse spikes, and multipath in sequence.
pub fn apply_realistic_noise<R: Rng>(
    signal: ndarray::ArrayView1<f64>,
    desc: &NoiseDescriptor,
    rng: &mut R,
) -> Result<ndarray::Array1<f64>, Error> {
    let noisy = add_awgn(signal, desc.snr_db, rng)?;
    let noisy = add_impulse_noise(noisy.view(), desc.impulse_probability, 2.0, rng)?;

    Ok(add_multipath(
        noisy.view(),
        desc.multipath_delay,
        desc.multipath_attenuation,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ramp() -> ndarray::Array1<f64> {
        ndarray::Array1::from_iter((0..200).map(|i| (i as f64 * 0.1).sin()))
    }

    #[test]
    fn awgn_preserves_length_and_roughly_tracks_signal() {
        let mut rng = StdRng::seed_from_u64(7);
        let signal = ramp();
        let noisy = add_awgn(signal.view(), 20.0, &mut rng).unwrap();

        assert_eq!(noisy.len(), signal.len());
        // 20 dB SNR noise is small next to the signal
        let error_power = noisy
            .iter()
            .zip(signal.iter())
            .map(|(&n, &s)| (n - s) * (n - s))
            .sum::<f64>()
            / signal.len() as f64;
        let signal_power =
            signal.iter().map(|&v| v * v).sum::<f64>() / signal.len() as f64;
        assert!(error_power < signal_power / 10.0);
    }

    #[test]
    fn awgn_rejects_nonpositive_snr() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(add_awgn(ramp().view(), 0.0, &mut rng).is_err());
        assert!(add_awgn(ramp().view(), -3.0, &mut rng).is_err());
    }

    #[test]
    fn zero_probability_leaves_signal_untouched() {
        let mut rng = StdRng::seed_from_u64(11);
        let signal = ramp();
        let noisy = add_impulse_noise(signal.view(), 0.0, 2.0, &mut rng).unwrap();

        for (a, b) in noisy.iter().zip(signal.iter()) {
            assert_relative_eq!(a, b);
        }
    }

    #[test]
    fn impulse_probability_validated() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(add_impulse_noise(ramp().view(), 1.5, 2.0, &mut rng).is_err());
        assert!(add_impulse_noise(ramp().view(), -0.1, 2.0, &mut rng).is_err());
    }

    #[test]
    fn multipath_shifts_and_attenuates() {
        let mut signal = ndarray::Array1::zeros(50);
        signal[10] = 1.0;

        let output = add_multipath(signal.view(), 20, 0.3);
        assert_relative_eq!(output[10], 1.0);
        assert_relative_eq!(output[30], 0.3);
    }

    #[test]
    fn multipath_beyond_length_is_identity() {
        let signal = ramp();
        let output = add_multipath(signal.view(), 500, 0.3);
        for (a, b) in output.iter().zip(signal.iter()) {
            assert_relative_eq!(a, b);
        }
    }

    #[test]
    fn combined_pipeline_runs() {
        let mut rng = StdRng::seed_from_u64(3);
        let noisy =
            apply_realistic_noise(ramp().view(), &NoiseDescriptor::default(), &mut rng).unwrap();
        assert_eq!(noisy.len(), 200);
        assert!(noisy.iter().all(|v| v.is_finite()));
    }
}
