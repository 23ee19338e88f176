use serde::Serialize;

use crate::physics::PhysicalConstants;
use crate::Error;

/// An electromagnetic material.
///
/// Immutable once constructed; regions of a [`Grid`](crate::medium::Grid)
/// copy values out of it rather than holding a reference. Serializes to a
/// plain field-value mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    name: String,
    epsilon_r: f64,
    mu_r: f64,
    sigma: f64,
}

impl Material {
    /// Creates a validated material record.
    pub fn new(
        name: impl Into<String>,
        epsilon_r: f64,
        mu_r: f64,
        sigma: f64,
    ) -> Result<Self, Error> {
        if epsilon_r <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon_r",
                message: format!("relative permittivity must be positive ( got {epsilon_r} )"),
            });
        }
        if mu_r <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "mu_r",
                message: format!("relative permeability must be positive ( got {mu_r} )"),
            });
        }
        if sigma < 0.0 {
            return Err(Error::InvalidParameter {
                name: "sigma",
                message: format!("conductivity must be nonnegative ( got {sigma} )"),
            });
        }

        Ok(Self {
            name: name.into(),
            epsilon_r,
            mu_r,
            sigma,
        })
    }

    /// Lossless vacuum.
    pub fn free_space() -> Self {
        Self {
            name: "Free Space".to_string(),
            epsilon_r: 1.0,
            mu_r: 1.0,
            sigma: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn epsilon_r(&self) -> f64 {
        self.epsilon_r
    }

    pub fn mu_r(&self) -> f64 {
        self.mu_r
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Absolute permittivity (F/m).
    pub fn epsilon(&self) -> f64 {
        PhysicalConstants::SI.epsilon_0 * self.epsilon_r
    }

    /// Absolute permeability (H/m).
    pub fn mu(&self) -> f64 {
        PhysicalConstants::SI.mu_0 * self.mu_r
    }

    /// Wave propagation velocity `1 / sqrt(mu epsilon)` (m/s).
    pub fn velocity(&self) -> f64 {
        1.0 / f64::sqrt(self.mu() * self.epsilon())
    }

    /// Intrinsic impedance `sqrt(mu / epsilon)` (Ohms).
    pub fn impedance(&self) -> f64 {
        f64::sqrt(self.mu() / self.epsilon())
    }
}
