//! Post-processing of recorded echo traces.
//!
//! Everything here consumes the solver's output sequence; nothing reaches
//! back into field state.

mod depth;
mod noise;
mod peaks;

pub use depth::{
    estimate_depth, estimate_depth_from_index, estimate_multiple_depths, index_to_time,
    wave_velocity,
};
pub use noise::{add_awgn, add_impulse_noise, add_multipath, apply_realistic_noise, NoiseDescriptor};
pub use peaks::{detect_peaks, detect_peaks_with_distance, peak_amplitudes, signal_energy};
