use crate::fdtd::Boundary;
use crate::medium::Grid;
use crate::physics::{self, PhysicalConstants};
use crate::{ComputeDescriptor, EchoTrace, Error, Solver};

/// Describes the composition of an `FdtdSolver`.
pub struct FdtdSolverDescriptor {
    pub grid: Grid,
    pub dt: f64,
    pub total_time: f64,
    /// Cell where the waveform is injected and the echo is recorded.
    pub source_position: usize,
    pub boundary: Boundary,
    /// Retain the full `(nt, nx)` Ez history in addition to the probe trace.
    pub record_history: bool,
}

/// Single-threaded Ez/Hy leapfrog engine over a lossy layered medium.
///
/// Update coefficients are precomputed once from the grid's material arrays.
/// The source is injected softly (added to the field) at the probe cell, so
/// the recorded trace carries the injected waveform mixed with the returning
/// echo; separating the two is a post-processing concern.
///
/// The engine never checks the Courant condition. An unstable time step
/// silently produces unbounded or non-finite field values; use
/// [`physics::courant_time_step`](crate::physics::courant_time_step) as a
/// pre-flight check.
pub struct FdtdSolver {
    grid: Grid,
    dt: f64,
    nt: usize,
    source_position: usize,
    boundary: Boundary,
    ez: ndarray::Array1<f64>,
    hy: ndarray::Array1<f64>,
    ceze: ndarray::Array1<f64>,
    cezh: ndarray::Array1<f64>,
    chye: f64,
    reflected_signal: ndarray::Array1<f64>,
    field_history: Option<ndarray::Array2<f64>>,
}

impl FdtdSolver {
    pub fn new(desc: FdtdSolverDescriptor) -> Result<Self, Error> {
        let nx = desc.grid.nx();

        if desc.source_position >= nx {
            return Err(Error::IndexOutOfRange {
                index: desc.source_position,
                ncells: nx,
            });
        }
        if nx < 2 {
            return Err(Error::InvalidParameter {
                name: "grid",
                message: format!("grid must span at least two cells ( got {nx} )"),
            });
        }
        if desc.dt <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "dt",
                message: format!("time step must be positive ( got {} )", desc.dt),
            });
        }
        if desc.total_time <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "total_time",
                message: format!("duration must be positive ( got {} )", desc.total_time),
            });
        }

        let nt = (desc.total_time / desc.dt).floor() as usize;
        let consts = PhysicalConstants::SI;

        let coefficients = physics::update_coefficients(
            desc.grid.epsilon_r().view(),
            desc.grid.sigma().view(),
            desc.dt,
            desc.grid.dx(),
            &consts,
        )?;
        let chye = physics::magnetic_coefficient(desc.dt, desc.grid.dx(), &consts)?;

        Ok(Self {
            dt: desc.dt,
            nt,
            source_position: desc.source_position,
            boundary: desc.boundary,
            ez: ndarray::Array1::zeros(nx),
            hy: ndarray::Array1::zeros(nx - 1),
            ceze: coefficients.ceze,
            cezh: coefficients.cezh,
            chye,
            reflected_signal: ndarray::Array1::zeros(nt),
            field_history: desc
                .record_history
                .then(|| ndarray::Array2::zeros((nt, nx))),
            grid: desc.grid,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of time steps a run executes.
    pub fn nt(&self) -> usize {
        self.nt
    }

    pub fn source_position(&self) -> usize {
        self.source_position
    }

    /// The probe trace recorded by the last run.
    pub fn reflected_signal(&self) -> &ndarray::Array1<f64> {
        &self.reflected_signal
    }

    /// The `(nt, nx)` Ez history of the last run, when retention is on.
    pub fn field_history(&self) -> Option<&ndarray::Array2<f64>> {
        self.field_history.as_ref()
    }

    /// Runs the full time loop, recording the field at the probe cell.
    ///
    /// The signal length must equal [`nt`](FdtdSolver::nt) exactly; no
    /// partial run is attempted. Field state carries over between runs, so a
    /// fresh solver should be constructed per scenario.
    pub fn run(
        &mut self,
        source_signal: ndarray::ArrayView1<f64>,
    ) -> Result<&ndarray::Array1<f64>, Error> {
        self.advance(source_signal, &None)?;

        Ok(&self.reflected_signal)
    }

    fn advance(
        &mut self,
        source_signal: ndarray::ArrayView1<f64>,
        bar: &Option<indicatif::ProgressBar>,
    ) -> Result<(), Error> {
        if source_signal.len() != self.nt {
            return Err(Error::LengthMismatch {
                input_length: source_signal.len(),
                expected_length: self.nt,
            });
        }

        let nx = self.ez.len();
        let chye = self.chye;

        for n in 0..self.nt {
            // H update: depends on the current E values only.
            ndarray::Zip::from(&mut self.hy)
                .and(self.ez.windows(2))
                .for_each(|hy, ez| *hy += chye * (ez[1] - ez[0]));

            // E update: just-updated H against the pre-update E at each cell,
            // the defining leapfrog relation.
            ndarray::Zip::from(self.ez.slice_mut(ndarray::s![1..nx - 1]))
                .and(self.ceze.slice(ndarray::s![1..nx - 1]))
                .and(self.cezh.slice(ndarray::s![1..nx - 1]))
                .and(self.hy.windows(2))
                .for_each(|ez, &ceze, &cezh, hy| {
                    *ez = ceze * *ez + cezh * (hy[1] - hy[0]);
                });

            // soft source: added on top of the interior update
            self.ez[self.source_position] += source_signal[n];

            self.boundary.apply(&mut self.ez);

            self.reflected_signal[n] = self.ez[self.source_position];

            if let Some(history) = &mut self.field_history {
                history.row_mut(n).assign(&self.ez);
            }

            if let Some(bar) = bar {
                bar.inc(1);
            }
        }

        Ok(())
    }
}

impl Solver for FdtdSolver {
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<EchoTrace, Error> {
        self.advance(desc.source_signal, desc.bar)?;

        Ok(EchoTrace {
            reflected_signal: self.reflected_signal.clone(),
            field_history: self.field_history.clone(),
        })
    }

    fn ncells(&self) -> usize {
        self.grid.nx()
    }

    fn nsteps(&self) -> usize {
        self.nt
    }

    fn time_step(&self) -> f64 {
        self.dt
    }

    fn cell_size(&self) -> f64 {
        self.grid.dx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use approx::assert_relative_eq;

    fn vacuum_solver(nx: usize, nt: usize, boundary: Boundary) -> (FdtdSolver, Source) {
        let dx = 1e-3;
        let dt = 0.99 * dx / PhysicalConstants::SI.c0;
        // half-step margin keeps floor(total_time / dt) at exactly nt
        let total_time = (nt as f64 + 0.5) * dt;

        let solver = FdtdSolver::new(FdtdSolverDescriptor {
            grid: Grid::free_space(nx, dx).unwrap(),
            dt,
            total_time,
            source_position: nx / 2,
            boundary,
            record_history: false,
        })
        .unwrap();
        let source = Source::new(dt, total_time).unwrap();

        (solver, source)
    }

    #[test]
    fn source_position_must_be_on_grid() {
        let dx = 1e-3;
        let result = FdtdSolver::new(FdtdSolverDescriptor {
            grid: Grid::free_space(100, dx).unwrap(),
            dt: 1e-12,
            total_time: 1e-10,
            source_position: 100,
            boundary: Boundary::default(),
            record_history: false,
        });

        assert!(matches!(
            result,
            Err(Error::IndexOutOfRange {
                index: 100,
                ncells: 100,
            })
        ));
    }

    #[test]
    fn run_rejects_wrong_signal_length() {
        let (mut solver, _) = vacuum_solver(100, 200, Boundary::default());
        let short = ndarray::Array1::<f64>::zeros(199);

        assert!(matches!(
            solver.run(short.view()),
            Err(Error::LengthMismatch {
                input_length: 199,
                expected_length: 200,
            })
        ));
    }

    #[test]
    fn trace_has_one_sample_per_step() {
        let (mut solver, source) = vacuum_solver(100, 150, Boundary::default());
        let signal = source.ricker_wavelet(1e9, 1.0).unwrap();

        let trace = solver.run(signal.view()).unwrap();
        assert_eq!(trace.len(), 150);
    }

    #[test]
    fn pec_keeps_edges_at_zero() {
        let dx = 1e-3;
        let dt = 0.99 * dx / PhysicalConstants::SI.c0;
        let nt = 300;

        let mut solver = FdtdSolver::new(FdtdSolverDescriptor {
            grid: Grid::free_space(100, dx).unwrap(),
            dt,
            total_time: (nt as f64 + 0.5) * dt,
            source_position: 50,
            boundary: Boundary::Pec,
            record_history: true,
        })
        .unwrap();
        let source = Source::new(dt, (nt as f64 + 0.5) * dt).unwrap();
        let signal = source.ricker_wavelet(2e9, 1.0).unwrap();

        solver.run(signal.view()).unwrap();

        let history = solver.field_history().unwrap();
        for n in 0..nt {
            assert_relative_eq!(history[[n, 0]], 0.0);
            assert_relative_eq!(history[[n, 99]], 0.0);
        }
    }

    #[test]
    fn abc_edges_copy_neighbors() {
        let dx = 1e-3;
        let dt = 0.99 * dx / PhysicalConstants::SI.c0;
        let nt = 300;

        let mut solver = FdtdSolver::new(FdtdSolverDescriptor {
            grid: Grid::free_space(100, dx).unwrap(),
            dt,
            total_time: (nt as f64 + 0.5) * dt,
            source_position: 50,
            boundary: Boundary::FirstOrderAbc,
            record_history: true,
        })
        .unwrap();
        let source = Source::new(dt, (nt as f64 + 0.5) * dt).unwrap();
        let signal = source.ricker_wavelet(2e9, 1.0).unwrap();

        solver.run(signal.view()).unwrap();

        let history = solver.field_history().unwrap();
        for n in 0..nt {
            assert_relative_eq!(history[[n, 0]], history[[n, 1]]);
            assert_relative_eq!(history[[n, 99]], history[[n, 98]]);
        }
    }

    #[test]
    fn history_matches_probe_trace() {
        let dx = 1e-3;
        let dt = 0.99 * dx / PhysicalConstants::SI.c0;
        let nt = 120;

        let mut solver = FdtdSolver::new(FdtdSolverDescriptor {
            grid: Grid::free_space(80, dx).unwrap(),
            dt,
            total_time: (nt as f64 + 0.5) * dt,
            source_position: 40,
            boundary: Boundary::default(),
            record_history: true,
        })
        .unwrap();
        let source = Source::new(dt, (nt as f64 + 0.5) * dt).unwrap();
        let signal = source.gaussian_pulse(30.0 * dt, 8.0 * dt, 1.0).unwrap();

        solver.run(signal.view()).unwrap();

        let history = solver.field_history().unwrap();
        assert_eq!(history.dim(), (nt, 80));
        for n in 0..nt {
            assert_relative_eq!(history[[n, 40]], solver.reflected_signal()[n]);
        }
    }
}
