//! Includes commonly used library components.

pub use crate::{
    ComputeDescriptor,
    EchoTrace,
    Error,
    RunDescriptor,
    SaveSettings,
    SaveType,
    Simulation,
    Solver,
};

pub use crate::fdtd::{Boundary, FdtdSolver, FdtdSolverDescriptor};
pub use crate::medium::{Grid, Material};
pub use crate::physics::PhysicalConstants;
pub use crate::source::Source;
