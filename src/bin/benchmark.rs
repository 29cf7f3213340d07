//! Step timing: serial scan vs parallel rows

use std::time::Instant;
use toroidal_life::{Algorithm, Dimensions, Grid, presets};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, toroidal_life::GridError> {
    let mut grid = Grid::randomize(Dimensions::new(size, size)?, 0xC0FFEE);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Run each preset for a few generations with every algorithm and report
/// whether they agree
fn check_patterns() -> Result<(), toroidal_life::GridError> {
    let dims = Dimensions::new(32, 32)?;
    for pattern in presets::all_patterns() {
        let start = pattern.to_grid(dims, 8, 8);
        let finals: Vec<Grid> = Algorithm::all()
            .iter()
            .map(|algorithm| (0..16).fold(start.clone(), |grid, _| algorithm.step(&grid)))
            .collect();
        let agree = finals.windows(2).all(|pair| pair[0] == pair[1]);
        println!(
            "{:>10} {:<32} {:>4} cells after 16 gens  {}",
            pattern.name,
            pattern.description,
            finals[0].population(),
            if agree { "ok" } else { "MISMATCH" }
        );
    }
    Ok(())
}

fn main() -> Result<(), toroidal_life::GridError> {
    println!("=== Game of Life Step Benchmark ===\n");

    check_patterns()?;
    println!();

    let sizes = [100, 230, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    println!(
        "\nParallel at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
        size,
        size,
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
