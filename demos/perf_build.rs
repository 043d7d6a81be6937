//! Performance profiling example for tree building
//!
//! This example focuses exclusively on benchmarking the build phase.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf_build
//! ```

use point_search::prelude::*;
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();

    println!("Point Search Build Performance Benchmark");
    println!("========================================\n");

    println!("Generating 1,000,000 random points...");
    let mut points = Vec::with_capacity(1_000_000);
    let mut rng = 12345u64; // Simple LCG random number generator

    for id in 0..1_000_000 {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let x = ((rng >> 40) as f32 / (1u32 << 24) as f32) * 1000.0;

        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let y = ((rng >> 40) as f32 / (1u32 << 24) as f32) * 1000.0;

        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let rank = (rng >> 44) as i32;

        points.push(Point::new(id, rank, x, y));
    }

    println!("Running build phase benchmark 20 times for profiling...\n");

    let num_runs = 20;
    let mut total_build_time = Duration::ZERO;
    let mut height = 0;

    let overall_start = Instant::now();
    for _ in 0..num_runs {
        let build_start = Instant::now();
        let tree = KdTree::build(&points);
        total_build_time += build_start.elapsed();
        height = tree.height();
    }
    let overall_duration = overall_start.elapsed();

    println!("Build Summary ({} runs):", num_runs);
    println!("  Tree height:      {}", height);
    println!("  Total Build time: {:.2}ms", total_build_time.as_secs_f64() * 1000.0);
    println!("  Average Build:    {:.2}ms", total_build_time.as_secs_f64() * 1000.0 / num_runs as f64);
    println!("  Overall time:     {:.2}ms", overall_duration.as_secs_f64() * 1000.0);
}
