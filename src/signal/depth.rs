//! Time-of-flight depth estimation for detected reflection events.

use crate::physics::PhysicalConstants;
use crate::Error;

/// Converts a trace sample index to a time (s).
pub fn index_to_time(index: usize, dt: f64) -> f64 {
    index as f64 * dt
}

/// Wave velocity `c0 / sqrt(epsilon_r mu_r)` in a material (m/s).
pub fn wave_velocity(epsilon_r: f64, mu_r: f64, consts: &PhysicalConstants) -> Result<f64, Error> {
    if epsilon_r <= 0.0 || mu_r <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "epsilon_r/mu_r",
            message: format!(
                "material parameters must be positive ( got epsilon_r: {epsilon_r}, mu_r: {mu_r} )"
            ),
        });
    }

    Ok(consts.c0 / f64::sqrt(epsilon_r * mu_r))
}

/// Depth from a two-way travel time, assuming a homogeneous medium.
pub fn estimate_depth(
    time_of_flight: f64,
    epsilon_r: f64,
    mu_r: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    let velocity = wave_velocity(epsilon_r, mu_r, consts)?;

    Ok(velocity * time_of_flight / 2.0)
}

/// Full pipeline: sample index to estimated depth.
pub fn estimate_depth_from_index(
    index: usize,
    dt: f64,
    epsilon_r: f64,
    mu_r: f64,
    consts: &PhysicalConstants,
) -> Result<f64, Error> {
    estimate_depth(index_to_time(index, dt), epsilon_r, mu_r, consts)
}

/// Depths for every detected peak index.
pub fn estimate_multiple_depths(
    peaks: &[usize],
    dt: f64,
    epsilon_r: f64,
    mu_r: f64,
    consts: &PhysicalConstants,
) -> Result<Vec<f64>, Error> {
    peaks
        .iter()
        .map(|&index| estimate_depth_from_index(index, dt, epsilon_r, mu_r, consts))
        .collect()
}
