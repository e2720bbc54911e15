//! Performance benchmark comparing serial and parallel stepping

use std::time::Instant;
use toroidal_life::Universe;

fn benchmark_tick(size: u32, iterations: u32) -> f64 {
    let mut universe = Universe::new(size, size);
    universe.randomise();

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_tick_parallel(size: u32, iterations: u32) -> f64 {
    let mut universe = Universe::new(size, size);
    universe.randomise();

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Universe Stepping Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_tick(size, iterations);
        let parallel_ms = benchmark_tick_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2048x2048 ===\n");

    let cells = 2048u64 * 2048;
    let parallel_ms = benchmark_tick_parallel(2048, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
