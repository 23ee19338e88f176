use gprscope::catalog;
use gprscope::physics;
use gprscope::prelude::*;

fn main() {
    // standard 400-cell GPR domain split into air over dry soil
    let preset = catalog::GRID_PRESETS
        .iter()
        .find(|preset| preset.name == "Standard GPR")
        .unwrap();

    let mut grid = Grid::new(preset.nx, preset.dx, catalog::material("Air").unwrap()).unwrap();
    catalog::apply_profile(&mut grid, catalog::profile("Air-Soil").unwrap()).unwrap();

    let dt = physics::courant_time_step(
        preset.dx,
        catalog::CFL_SAFETY_FACTOR,
        &PhysicalConstants::SI,
    )
    .unwrap();
    let total_time = (preset.nt as f64 + 0.5) * dt;

    let (_, f0) = catalog::RADAR_FREQUENCIES
        .iter()
        .find(|(label, _)| label.starts_with("High Frequency"))
        .unwrap();

    let source = Source::new(dt, total_time).unwrap();
    let waveform = source.ricker_wavelet(*f0, 1.0).unwrap();

    let solver = FdtdSolver::new(FdtdSolverDescriptor {
        grid,
        dt,
        total_time,
        source_position: 10,
        boundary: Boundary::FirstOrderAbc,
        record_history: true,
    })
    .unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        # of cells:   {}\n\
        Δx:           {:<9.2e} m\n\
        Δt:           {:<9.2e} s\n",
        preset.nx, preset.dx, dt,
    );

    let mut simulation = Simulation::new(solver);
    simulation
        .run(RunDescriptor {
            source_signal: waveform.view(),
            verbose: true,
            save_settings: Some(SaveSettings {
                filename: "data/layered_scan.h5",
                save_type: SaveType::Full,
                overwrite: true,
            }),
        })
        .unwrap();
}
