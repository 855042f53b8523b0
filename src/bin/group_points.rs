//! Group the points of a .npy file around two centers
//!
//! Reads an (n, 2) f64 array, seeds two centers at random within the data's
//! extent, runs the grouper and writes the resulting (2, 2) centers array.
//!
//! Usage: `group-points <input.npy> <output.npy> <rounds> <seed>`
//!
//! Set `RUST_LOG=info` (or `trace`) to see per-round progress.

use bimeans_rs::{GroupingConfig, Point, PointGrouper, Verbosity};
use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!("Usage: {} <input.npy> <output.npy> <rounds> <seed>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let rounds: usize = args[3].parse()?;
    let seed: u64 = args[4].parse()?;

    let reader = BufReader::new(File::open(input_path)?);
    let data: Array2<f64> = Array2::read_npy(reader)?;
    if data.ncols() != 2 {
        return Err(format!("expected an (n, 2) array, got shape {:?}", data.shape()).into());
    }

    let points: Vec<Point> = data
        .outer_iter()
        .filter_map(|row| Point::from_row(&row))
        .collect();

    let bound = data.iter().cloned().fold(1.0f64, f64::max);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let seeds = [
        Point::random_seed(bound, &mut rng),
        Point::random_seed(bound, &mut rng),
    ];

    let verbosity = if log::log_enabled!(log::Level::Trace) {
        Verbosity::Trace
    } else if log::log_enabled!(log::Level::Info) {
        Verbosity::Info
    } else {
        Verbosity::Quiet
    };
    let config = GroupingConfig::new(rounds).with_verbosity(verbosity);

    let grouper = PointGrouper::with_config(config);
    let result = grouper.group_points(&points, &seeds)?;

    for (point, group) in points.iter().zip(result.assignments()) {
        println!("{} -> {}", point, group);
    }
    for (group, center) in result.centers().iter().enumerate() {
        let total = result.member_count(group);
        if result.is_default(group) {
            println!("Center {}: - Total: {:03}", group + 1, total);
        } else {
            println!("Center {}: {} Total: {:03}", group + 1, center, total);
        }
    }

    let centers = Array2::from_shape_vec(
        (2, 2),
        result
            .centers()
            .iter()
            .flat_map(|c| c.to_array())
            .collect(),
    )?;
    let writer = File::create(output_path)?;
    centers.write_npy(writer)?;

    eprintln!("Saved centers to {}", output_path);

    Ok(())
}
