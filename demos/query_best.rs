//! Find the best-ranked points inside a rectangle.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example query_best
//! ```
use point_search::prelude::*;

fn main() {
    env_logger::init();

    // id = rank = i, placed on the diagonal (i, -i)
    let points: Vec<Point> = (0..7).map(|i| Point::new(i, i, i as f32, -i as f32)).collect();
    let context = SearchContext::new(&points);

    let root = context.tree().root_node().map(|node| node.point().id);
    println!("Root point id: {:?}", root);

    let mut out = [Point::default(); 3];
    let written = context.search(&Rect::new(-100.0, -100.0, 100.0, 100.0), 3, &mut out);
    println!("Best {} points: {:?}", written, &out[..written]);

    let ids: Vec<i32> = out[..written].iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 1, 2], "Expected the three lowest ranks in order");

    // Half of the diagonal, edges included
    let written = context.search(&Rect::new(3.0, -6.0, 6.0, -3.0), 3, &mut out);
    println!("Best {} points in the lower half: {:?}", written, &out[..written]);
    assert_eq!(out[0].id, 3, "Rank 3 is the best point with x >= 3");
}
