//! Attenuation of a plane wave in a lossy medium.
//!
//! The complex propagation constant `gamma = alpha + j*beta` comes from the
//! exact frequency-domain analysis; alpha (Np/m) sets the amplitude decay and
//! beta (rad/m) the phase advance.

use num_complex::Complex64;

use crate::physics::PhysicalConstants;
use crate::Error;

/// Complex propagation constant `sqrt(jωμ (σ + jωε))`.
pub fn propagation_constant(
    frequency: f64,
    epsilon_r: f64,
    mu_r: f64,
    sigma: f64,
    consts: &PhysicalConstants,
) -> Result<Complex64, Error> {
    if frequency <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "frequency",
            message: format!("frequency must be positive ( got {frequency} )"),
        });
    }

    let omega = 2.0 * std::f64::consts::PI * frequency;
    let epsilon = consts.epsilon_0 * epsilon_r;
    let mu = consts.mu_0 * mu_r;

    let jwm = Complex64::new(0.0, omega * mu);
    let admittance = Complex64::new(sigma, omega * epsilon);

    Ok((jwm * admittance).sqrt())
}

/// Attenuation constant alpha (Np/m).
pub fn attenuation_constant(
    frequency: f64,
    epsilon_r: f64,
    mu_r: f64,
    sigma: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    Ok(propagation_constant(frequency, epsilon_r, mu_r, sigma, consts)?.re)
}

/// Phase constant beta (rad/m).
pub fn phase_constant(
    frequency: f64,
    epsilon_r: f64,
    mu_r: f64,
    sigma: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    Ok(propagation_constant(frequency, epsilon_r, mu_r, sigma, consts)?.im)
}

/// Skin depth `1 / alpha` (m); infinite in a lossless medium.
pub fn skin_depth(
    frequency: f64,
    epsilon_r: f64,
    mu_r: f64,
    sigma: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    let alpha = attenuation_constant(frequency, epsilon_r, mu_r, sigma, consts)?;

    if alpha == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(1.0 / alpha)
}

/// Good-conductor approximation `alpha ≈ sqrt(π f μ σ)`.
pub fn good_conductor_attenuation(
    frequency: f64,
    sigma: f64,
    mu_r: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    if frequency <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "frequency",
            message: format!("frequency must be positive ( got {frequency} )"),
        });
    }

    let mu = consts.mu_0 * mu_r;

    Ok(f64::sqrt(std::f64::consts::PI * frequency * mu * sigma))
}
