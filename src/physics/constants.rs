/// Vacuum constants used by the coefficient and analysis routines.
///
/// Passed by value or reference into whatever needs them, so alternate unit
/// systems can be substituted without touching global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light in vacuum (m/s).
    pub c0: f64,
    /// Vacuum permittivity (F/m).
    pub epsilon_0: f64,
    /// Vacuum permeability (H/m).
    pub mu_0: f64,
}

impl PhysicalConstants {
    /// SI values.
    pub const SI: Self = Self {
        c0: 299_792_458.0,
        epsilon_0: 8.854_187_817e-12,
        mu_0: 4.0 * std::f64::consts::PI * 1e-7,
    };

    /// Free-space impedance (Ohms).
    #[inline]
    pub fn eta_0(&self) -> f64 {
        f64::sqrt(self.mu_0 / self.epsilon_0)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}
