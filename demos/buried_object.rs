use rand::rngs::StdRng;
use rand::SeedableRng;

use gprscope::catalog;
use gprscope::physics;
use gprscope::prelude::*;
use gprscope::signal;

fn main() {
    let nx = 400;
    let dx = 1e-3;
    let source_position = 10;

    // aluminum pipe buried 0.19 m deep in dry sand
    let sand = catalog::material("Dry Sand").unwrap();
    let pipe = catalog::material("Aluminum").unwrap();
    let mut grid = Grid::new(nx, dx, sand.clone()).unwrap();
    grid.embed_object(0.200, 0.020, &pipe).unwrap();

    let dt = physics::courant_time_step(dx, catalog::CFL_SAFETY_FACTOR, &PhysicalConstants::SI)
        .unwrap();
    let total_time = 900.5 * dt;

    let source = Source::new(dt, total_time).unwrap();
    let waveform = source.ricker_wavelet(2e9, 1.0).unwrap();

    let mut solver = FdtdSolver::new(FdtdSolverDescriptor {
        grid,
        dt,
        total_time,
        source_position,
        boundary: Boundary::FirstOrderAbc,
        record_history: false,
    })
    .unwrap();

    let trace = solver.run(waveform.view()).unwrap().clone();

    // distort the clean trace the way a real receiver would see it
    let mut rng = StdRng::seed_from_u64(42);
    let received = signal::apply_realistic_noise(
        trace.view(),
        &signal::NoiseDescriptor {
            snr_db: 25.0,
            ..Default::default()
        },
        &mut rng,
    )
    .unwrap();

    let peaks = signal::detect_peaks_with_distance(received.view(), 0.15, 50);
    let depths = signal::estimate_multiple_depths(
        &peaks,
        dt,
        sand.epsilon_r(),
        sand.mu_r(),
        &PhysicalConstants::SI,
    )
    .unwrap();

    println!("\n-- Detection Results --");
    for (peak, depth) in peaks.iter().zip(depths.iter()) {
        println!(
            "peak at sample {:<5} -> apparent depth {:>7.3} m",
            peak, depth,
        );
    }
    println!(
        "\n( first peak is the transmit pulse itself; \
        the echo pair brackets the pipe face )"
    );
}
