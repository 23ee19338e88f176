//! Electromagnetic wave physics.
//!
//! The closed-form results in this module stand on their own: the update
//! coefficients feed the time-stepping engine, while the reflection and
//! attenuation formulas are independent utilities usable to validate a run
//! against theory.

mod attenuation;
mod constants;
mod reflection;
mod wave;

pub use attenuation::{
    attenuation_constant, good_conductor_attenuation, phase_constant, propagation_constant,
    skin_depth,
};
pub use constants::PhysicalConstants;
pub use reflection::{
    intrinsic_impedance, power_reflection_coefficient, power_transmission_coefficient,
    reflection_coefficient, transmission_coefficient,
};
pub use wave::{courant_time_step, magnetic_coefficient, update_coefficients, UpdateCoefficients};
