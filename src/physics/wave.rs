//! Update-coefficient and stability calculations for the leapfrog scheme.

use crate::physics::PhysicalConstants;
use crate::Error;

/// Per-cell E-field update coefficients for a lossy medium.
///
/// `ceze` multiplies the previous E value, `cezh` the spatial H difference.
/// Conduction current is averaged over the step, which keeps the loss term
/// stable for any nonnegative conductivity.
pub struct UpdateCoefficients {
    pub ceze: ndarray::Array1<f64>,
    pub cezh: ndarray::Array1<f64>,
}

/// Computes a stable time step from the Courant condition.
///
/// The factor must be strictly below one; the returned step is bounded by the
/// vacuum wave speed, which is the fastest speed any dielectric cell allows.
pub fn courant_time_step(
    dx: f64,
    courant_factor: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    if dx <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "dx",
            message: format!("spatial step must be positive ( got {dx} )"),
        });
    }
    if courant_factor <= 0.0 || courant_factor >= 1.0 {
        return Err(Error::InvalidParameter {
            name: "courant_factor",
            message: format!("stability factor must lie in (0, 1) ( got {courant_factor} )"),
        });
    }

    Ok(courant_factor * dx / consts.c0)
}

/// Computes the E-field update coefficients from the material arrays.
pub fn update_coefficients(
    epsilon_r: ndarray::ArrayView1<f64>,
    sigma: ndarray::ArrayView1<f64>,
    dt: f64,
    dx: f64,
    consts: &PhysicalConstants,
) -> Result<UpdateCoefficients, Error> {
    check_steps(dt, dx)?;

    let mut ceze = ndarray::Array1::<f64>::zeros(epsilon_r.len());
    let mut cezh = ndarray::Array1::<f64>::zeros(epsilon_r.len());

    ndarray::Zip::from(&mut ceze)
        .and(&mut cezh)
        .and(&epsilon_r)
        .and(&sigma)
        .for_each(|ceze, cezh, &eps_r, &sig| {
            let epsilon = consts.epsilon_0 * eps_r;
            let loss = sig * dt / (2.0 * epsilon);

            *ceze = (1.0 - loss) / (1.0 + loss);
            *cezh = (dt / (epsilon * dx)) / (1.0 + loss);
        });

    Ok(UpdateCoefficients { ceze, cezh })
}

/// Computes the H-field update coefficient (non-magnetic, lossless for H).
pub fn magnetic_coefficient(dt: f64, dx: f64, consts: &PhysicalConstants) -> Result<f64, Error> {
    check_steps(dt, dx)?;

    Ok(dt / (consts.mu_0 * dx))
}

fn check_steps(dt: f64, dx: f64) -> Result<(), Error> {
    if dt <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "dt",
            message: format!("time step must be positive ( got {dt} )"),
        });
    }
    if dx <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "dx",
            message: format!("spatial step must be positive ( got {dx} )"),
        });
    }

    Ok(())
}
