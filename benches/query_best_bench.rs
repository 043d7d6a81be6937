//! Benchmark for build and `find_best` performance
//!
//! Builds a `KdTree` over 1M randomly placed, randomly ranked points and runs
//! best-K queries with rectangles covering 10%, 1% and 0.01% of the space.

use point_search::{KdTree, Point, Rect};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate a random query rectangle with side `side`
/// Coordinate space: 100x100
fn random_rect<R: Rng>(rng: &mut R, side: f32) -> Rect {
    let lx = rng.random_range(0.0..(100.0 - side));
    let ly = rng.random_range(0.0..(100.0 - side));
    Rect::new(lx, ly, lx + side, ly + side)
}

/// Benchmark best-K queries for one rectangle size
fn bench_search(tree: &KdTree, rects: &[Rect], k: usize, percentage_str: &str) {
    let mut out = vec![Point::default(); k];
    let max_count = i32::try_from(k).unwrap_or(i32::MAX);
    let mut total_found = 0;
    let start = Instant::now();

    for rect in rects {
        if let Ok(written) = tree.find_best(rect, max_count, &mut out) {
            total_found += written;
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} searches {}% (k={}): {}ms, {} points kept",
        rects.len(),
        percentage_str,
        k,
        elapsed.as_millis(),
        total_found
    );
}

fn main() {
    println!("Point Search kd-tree Benchmark");
    println!("==============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let points: Vec<Point> = (0..num_items)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0..1_000_000),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
            )
        })
        .collect();

    // Query sides: sqrt(0.1) * 100, sqrt(0.01) * 100, sqrt(0.0001) * 100
    let rects_10: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 31.62)).collect();
    let rects_1: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 10.0)).collect();
    let rects_001: Vec<Rect> = (0..num_tests).map(|_| random_rect(&mut rng, 1.0)).collect();

    let start = Instant::now();
    let tree = KdTree::build(&points);
    println!("build {} points: {}ms (height {})", tree.len(), start.elapsed().as_millis(), tree.height());

    for k in [20, 200] {
        bench_search(&tree, &rects_10, k, "10");
        bench_search(&tree, &rects_1, k, "1");
        bench_search(&tree, &rects_001, k, "0.01");
    }
}
