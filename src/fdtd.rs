//! The staggered-grid leapfrog field engine.
//!
//! E-field samples live at integer cell centers, H-field samples at half-cell
//! offsets, updated in alternating half time steps.

mod fdtd_solver;

pub use fdtd_solver::{FdtdSolver, FdtdSolverDescriptor};

/// Edge-truncation policy applied to the E field once per time step.
///
/// The variant set is small and closed, so a tagged enum dispatched through
/// [`apply`](Boundary::apply) replaces any deeper abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// `E[0] = E[1]`, `E[n-1] = E[n-2]`: a first-order Mur-style absorbing
    /// truncation. Only approximately absorbing; a small residual reflection
    /// remains and grows for non-normal or dispersive propagation. That
    /// residual is an accepted limitation of the scheme.
    #[default]
    FirstOrderAbc,
    /// Short-circuit termination: both edge cells forced to exactly zero.
    Pec,
}

impl Boundary {
    /// Mutates the two boundary cells of `field` in place.
    pub fn apply(&self, field: &mut ndarray::Array1<f64>) {
        let n = field.len();
        if n < 2 {
            return;
        }

        match self {
            Boundary::FirstOrderAbc => {
                field[0] = field[1];
                field[n - 1] = field[n - 2];
            }
            Boundary::Pec => {
                field[0] = 0.0;
                field[n - 1] = 0.0;
            }
        }
    }
}
