use std::path::Path;

use crate::{ComputeDescriptor, EchoTrace, Error, Solver};

/// Describes a simulation run.
pub struct RunDescriptor<'a, P: AsRef<Path>> {
    /// The waveform injected at the solver's source cell, one sample per step.
    pub source_signal: ndarray::ArrayView1<'a, f64>,
    /// Whether or not to print information to the console.
    pub verbose: bool,
    /// What, if any, information to save to file.
    pub save_settings: Option<SaveSettings<P>>,
}

/// How data should be saved to file.
#[derive(Debug)]
pub struct SaveSettings<P: AsRef<Path>> {
    /// The path to the save file.
    pub filename: P,
    /// What information to save.
    pub save_type: SaveType,
    /// Whether or not to overwrite any possible saved data.
    pub overwrite: bool,
}

/// Represents what data to save.
#[derive(PartialEq, Debug)]
pub enum SaveType {
    /// Save only the probe trace.
    Trace,
    /// Save the probe trace and the full space-time field history.
    Full,
}

/// The main `struct` of the framework.
///
/// Wraps a [`Solver`] and handles the run-level concerns around it: console
/// progress reporting and HDF5 persistence of the recorded data.
pub struct Simulation<S: Solver> {
    solver: S,
}

impl<S: Solver> Simulation<S> {
    #[inline]
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Does a computational run.
    #[inline]
    pub fn run<P: AsRef<Path>>(&mut self, desc: RunDescriptor<'_, P>) -> Result<EchoTrace, Error> {
        let nsteps = self.solver.nsteps();

        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", nsteps);
            Some(indicatif::ProgressBar::new(nsteps as u64))
        } else {
            None
        };

        let trace = self.solver.compute(ComputeDescriptor {
            source_signal: desc.source_signal,
            bar: &bar,
        })?;

        if let Some(ref bar) = bar {
            bar.finish();
        }

        if let Some(SaveSettings {
            ref filename,
            ref save_type,
            overwrite,
        }) = desc.save_settings
        {
            self.save(filename.as_ref(), save_type, overwrite, &trace)?;
        }

        Ok(trace)
    }

    fn save(
        &self,
        filename: &Path,
        save_type: &SaveType,
        overwrite: bool,
        trace: &EchoTrace,
    ) -> Result<(), Error> {
        let nsteps = trace.reflected_signal.len();
        let ncells = self.solver.ncells();

        if *save_type == SaveType::Full && trace.field_history.is_none() {
            return Err(Error::InvalidParameter {
                name: "save_type",
                message: "full save requires a solver with history retention enabled".to_string(),
            });
        }

        if filename.exists() && !overwrite {
            let file = hdf5::File::append(filename)?;

            let previous_size = file.dataset("trace/reflected")?.shape()[0];

            // resize trace dataset and append after the saved steps
            file.dataset("trace/reflected")?.resize(previous_size + nsteps)?;
            file.dataset("trace/reflected")?.write_slice(
                trace.reflected_signal.view(),
                ndarray::s![previous_size..(previous_size + nsteps)],
            )?;

            if let Some(ref history) = trace.field_history {
                if *save_type == SaveType::Full {
                    if let Ok(full_group) = file.group("field") {
                        let previous_full = full_group.dataset("ez")?.shape()[0];
                        full_group
                            .dataset("ez")?
                            .resize((previous_full + nsteps, ncells))?;
                        full_group.dataset("ez")?.write_slice(
                            history.view(),
                            ndarray::s![previous_full..(previous_full + nsteps), ..],
                        )?;
                    } else {
                        let full_group = file.create_group("field")?;
                        full_group
                            .new_dataset::<f64>()
                            .shape((hdf5::Extent::resizable(nsteps), ncells))
                            .create("ez")?;
                        full_group
                            .dataset("ez")?
                            .write_slice(history.view(), ndarray::s![0..nsteps, ..])?;
                    }
                }
            }

            file.close()?;
        } else {
            let file = hdf5::File::create(filename)?;

            let trace_group = file.create_group("trace")?;
            trace_group
                .new_dataset::<f64>()
                .shape(hdf5::Extent::resizable(nsteps))
                .create("reflected")?;
            trace_group
                .dataset("reflected")?
                .write_slice(trace.reflected_signal.view(), ndarray::s![0..nsteps])?;

            if let Some(ref history) = trace.field_history {
                if *save_type == SaveType::Full {
                    let full_group = file.create_group("field")?;
                    full_group
                        .new_dataset::<f64>()
                        .shape((hdf5::Extent::resizable(nsteps), ncells))
                        .create("ez")?;
                    full_group
                        .dataset("ez")?
                        .write_slice(history.view(), ndarray::s![0..nsteps, ..])?;
                }
            }

            // save deltas as file attributes
            let dt_attr = file
                .new_attr::<f64>()
                .shape(hdf5::Extents::Scalar)
                .create("time_step");
            if let Ok(attr) = dt_attr {
                attr.write_scalar(&self.solver.time_step())?;
            }
            let dx_attr = file
                .new_attr::<f64>()
                .shape(hdf5::Extents::Scalar)
                .create("cell_size");
            if let Ok(attr) = dx_attr {
                attr.write_scalar(&self.solver.cell_size())?;
            }

            file.close()?;
        }

        Ok(())
    }
}
