//! Basic example demonstrating bimeans-rs usage
//!
//! Run with: cargo run --example basic

use bimeans_rs::{
    AddOutcome, GroupingConfig, GroupingSession, Point, SessionConfig, SessionOutcome, Verbosity,
};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== bimeans-rs example ===\n");

    // Two blobs of points, like clicks on a 400x400 canvas
    let n_points = 40;
    let centers = [[100.0f64, 100.0], [300.0, 280.0]];
    let noise = Array2::random((n_points, 2), Uniform::new(-30.0f64, 30.0));

    let config = SessionConfig::new(400.0)
        .with_max_points(400)
        .with_seed(42)
        .with_grouping(GroupingConfig::new(10).with_verbosity(Verbosity::Info));
    let mut session = GroupingSession::new(config)?;

    for i in 0..n_points {
        let center = centers[i % 2];
        let point = Point::new(
            (center[0] + noise[[i, 0]]).round(),
            (center[1] + noise[[i, 1]]).round(),
        );
        if session.add_point(point)? == AddOutcome::MaxReached {
            println!("Max points reached");
            break;
        }
    }
    println!("Added {} points", session.points().len());

    match session.group()? {
        SessionOutcome::NeedMorePoints => println!("Add more points..."),
        SessionOutcome::Grouped(result) => {
            for (group, center) in result.centers().iter().enumerate() {
                if !result.is_default(group) {
                    println!(
                        "Center {}: {} Total: {:03}",
                        group + 1,
                        center,
                        result.member_count(group)
                    );
                }
            }

            println!("\nFirst 10 point assignments:");
            for (point, group) in session.points().iter().zip(result.assignments()).take(10) {
                println!("  {} -> Group {}", point, group + 1);
            }
        }
    }

    println!("\n=== Done! ===");
    Ok(())
}
