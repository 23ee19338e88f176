//! A framework for simulating 1-dimensional electromagnetic pulse propagation
//! through layered, lossy dielectric media.
//!
//! A transmitted pulse travels through stacked materials, partially reflects
//! at impedance discontinuities, and the echo recorded at the transmit/receive
//! cell can be analyzed to infer the depth of buried interfaces and objects.
//!
//! To get started, refer to the `\demos` directory in the main repository.

mod simulation;

pub mod catalog;
pub mod fdtd;
pub mod medium;
pub mod physics;
pub mod prelude;
pub mod signal;
pub mod source;

pub use simulation::{RunDescriptor, SaveSettings, SaveType, Simulation};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },
    #[error("invalid range [{start}, {end}]: {message}")]
    InvalidRange {
        start: f64,
        end: f64,
        message: String,
    },
    #[error("cell index {index} is outside the grid ( grid cells: {ncells} )")]
    IndexOutOfRange { index: usize, ncells: usize },
    #[error("source signal does not have expected length \
        ( signal length: {input_length}, \
        expected length: {expected_length} )")]
    LengthMismatch {
        input_length: usize,
        expected_length: usize,
    },
    #[error("unknown material preset `{0}`")]
    UnknownMaterial(String),
    #[error(transparent)]
    H5Error(#[from] hdf5::Error),
}

/// Manages actual computations.
pub trait Solver {
    /// Steps the field state through every sample of the source signal.
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<EchoTrace, Error>;

    fn ncells(&self) -> usize;

    fn nsteps(&self) -> usize;

    fn time_step(&self) -> f64;

    fn cell_size(&self) -> f64;
}

/// Describes how a `Solver` should do computations.
pub struct ComputeDescriptor<'a, 'b> {
    pub source_signal: ndarray::ArrayView1<'a, f64>,
    pub bar: &'b Option<indicatif::ProgressBar>,
}

/// The output of a computational run.
pub struct EchoTrace {
    /// The field recorded at the probe cell, one sample per time step.
    pub reflected_signal: ndarray::Array1<f64>,
    /// The full `(nt, nx)` space-time field, when history retention is on.
    pub field_history: Option<ndarray::Array2<f64>>,
}
