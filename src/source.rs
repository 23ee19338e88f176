//! Time-domain excitation waveforms.

use crate::Error;

/// Generates finite time-domain excitation sequences.
///
/// A stateless generator: each call samples a fresh waveform of exactly
/// `nt = floor(total_time / dt)` values at `t_k = k * dt`.
pub struct Source {
    dt: f64,
    total_time: f64,
    time: ndarray::Array1<f64>,
}

impl Source {
    pub fn new(dt: f64, total_time: f64) -> Result<Self, Error> {
        if dt <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "dt",
                message: format!("time step must be positive ( got {dt} )"),
            });
        }
        if total_time <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "total_time",
                message: format!("duration must be positive ( got {total_time} )"),
            });
        }

        let nt = (total_time / dt).floor() as usize;
        let time = ndarray::Array1::from_iter((0..nt).map(|k| k as f64 * dt));

        Ok(Self {
            dt,
            total_time,
            time,
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of samples every waveform call returns.
    pub fn nt(&self) -> usize {
        self.time.len()
    }

    /// Sample instants `t_k = k * dt`.
    pub fn time(&self) -> &ndarray::Array1<f64> {
        &self.time
    }

    /// Gaussian pulse `A exp(-(t - t0)² / 2 spread²)`.
    pub fn gaussian_pulse(
        &self,
        t0: f64,
        spread: f64,
        amplitude: f64,
    ) -> Result<ndarray::Array1<f64>, Error> {
        if spread <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "spread",
                message: format!("pulse width must be positive ( got {spread} )"),
            });
        }

        Ok(self
            .time
            .mapv(|t| amplitude * f64::exp(-(t - t0).powi(2) / (2.0 * spread * spread))))
    }

    /// Ricker wavelet with central frequency `f0`, the standard zero-mean
    /// broadband excitation for subsurface sounding.
    pub fn ricker_wavelet(&self, f0: f64, amplitude: f64) -> Result<ndarray::Array1<f64>, Error> {
        if f0 <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "f0",
                message: format!("central frequency must be positive ( got {f0} )"),
            });
        }

        Ok(self.time.mapv(|t| {
            let tau = t - 1.5 / f0;
            let u = (std::f64::consts::PI * f0 * tau).powi(2);
            amplitude * (1.0 - 2.0 * u) * f64::exp(-u)
        }))
    }

    /// Continuous sinusoid `A sin(2π f t)`.
    pub fn sine_wave(&self, frequency: f64, amplitude: f64) -> Result<ndarray::Array1<f64>, Error> {
        if frequency <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "frequency",
                message: format!("frequency must be positive ( got {frequency} )"),
            });
        }

        Ok(self
            .time
            .mapv(|t| amplitude * f64::sin(2.0 * std::f64::consts::PI * frequency * t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn sample_count_is_floor_of_ratio() {
        let source = Source::new(1e-12, 1e-9).unwrap();
        assert_eq!(source.nt(), 1000);

        // non-divisible duration truncates
        let source = Source::new(3e-12, 1e-9).unwrap();
        assert_eq!(source.nt(), 333);
        assert_eq!(source.gaussian_pulse(0.5e-9, 0.1e-9, 1.0).unwrap().len(), 333);
        assert_eq!(source.ricker_wavelet(1e9, 1.0).unwrap().len(), 333);
        assert_eq!(source.sine_wave(1e9, 1.0).unwrap().len(), 333);
    }

    #[test]
    fn gaussian_peaks_at_center() {
        let source = Source::new(1e-12, 2e-9).unwrap();
        let pulse = source.gaussian_pulse(1e-9, 0.2e-9, 2.5).unwrap();

        assert_relative_eq!(pulse[1000], 2.5, max_relative = 1e-9);
        assert!(pulse[0] < 2.5e-4);
    }

    #[test]
    fn ricker_wavelet_has_near_zero_mean() {
        let source = Source::new(5e-12, 5e-9).unwrap();
        let wavelet = source.ricker_wavelet(1e9, 1.0).unwrap();

        let mean = wavelet.sum() / wavelet.len() as f64;
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-6);
        assert_relative_eq!(wavelet.iter().cloned().fold(f64::MIN, f64::max), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn sine_wave_amplitude() {
        let source = Source::new(1e-11, 1e-8).unwrap();
        let wave = source.sine_wave(1e8, 0.5).unwrap();
        let max = wave.iter().cloned().fold(f64::MIN, f64::max);
        assert_relative_eq!(max, 0.5, max_relative = 1e-2);
    }

    #[test]
    fn invalid_generators_rejected() {
        let source = Source::new(1e-12, 1e-9).unwrap();
        assert!(source.ricker_wavelet(0.0, 1.0).is_err());
        assert!(source.sine_wave(-1e9, 1.0).is_err());
        assert!(source.gaussian_pulse(1e-9, 0.0, 1.0).is_err());
    }

    #[test]
    fn invalid_timing_rejected() {
        assert!(Source::new(0.0, 1e-9).is_err());
        assert!(Source::new(1e-12, 0.0).is_err());
        assert!(Source::new(-1e-12, 1e-9).is_err());
    }
}
