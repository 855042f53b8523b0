use crate::error::GroupingError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Euclidean distance between two rows of equal length
#[inline]
fn euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| {
            let d = p - q;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

fn check_dimensions(
    refs: &ArrayView2<f64>,
    queries: &ArrayView2<f64>,
) -> Result<(), GroupingError> {
    if refs.nrows() > 0 && queries.nrows() > 0 && refs.ncols() != queries.ncols() {
        return Err(GroupingError::InvalidDimensions(format!(
            "reference points have {} coordinates, query points have {}",
            refs.ncols(),
            queries.ncols()
        )));
    }
    Ok(())
}

/// Compute the Euclidean distance from every query point to every reference point
///
/// Distances are computed directly as `sqrt(sum((q - r)^2))` rather than through
/// the norm expansion, so two exactly equidistant references produce bit-equal
/// distances.
///
/// # Arguments
/// * `refs` - Reference points, typically the centers (m, n_features)
/// * `queries` - Query points (n, n_features)
///
/// # Returns
/// * `distances` - Matrix of shape (n, m). Empty inputs give 0 rows or 0 columns.
pub fn pairwise_distances(
    refs: &ArrayView2<f64>,
    queries: &ArrayView2<f64>,
) -> Result<Array2<f64>, GroupingError> {
    check_dimensions(refs, queries)?;

    let mut distances = Array2::zeros((queries.nrows(), refs.nrows()));
    for (i, query) in queries.outer_iter().enumerate() {
        for (j, reference) in refs.outer_iter().enumerate() {
            distances[[i, j]] = euclidean(&query, &reference);
        }
    }

    Ok(distances)
}

/// Parallel version of [`pairwise_distances`], one query row per rayon task
///
/// Each element is computed by the same scalar expression as the serial version,
/// so results are bit-identical.
pub fn pairwise_distances_parallel(
    refs: &ArrayView2<f64>,
    queries: &ArrayView2<f64>,
) -> Result<Array2<f64>, GroupingError> {
    check_dimensions(refs, queries)?;

    let n_refs = refs.nrows();
    let mut distances = Array2::zeros((queries.nrows(), n_refs));
    if n_refs == 0 {
        return Ok(distances);
    }

    match distances.as_slice_mut() {
        Some(flat) => flat
            .par_chunks_mut(n_refs)
            .enumerate()
            .for_each(|(i, out)| {
                let query = queries.row(i);
                for (j, reference) in refs.outer_iter().enumerate() {
                    out[j] = euclidean(&query, &reference);
                }
            }),
        None => return pairwise_distances(refs, queries),
    }

    Ok(distances)
}

/// Index of the nearest reference for each row of a distance matrix
///
/// Scans with a strict less-than, so on exact ties the lowest index wins.
/// Rows without columns map to 0.
pub fn nearest_centers(distances: &ArrayView2<f64>) -> Array1<usize> {
    distances
        .outer_iter()
        .map(|row| {
            let mut best_label = 0;
            let mut best_dist = f64::INFINITY;
            for (j, &dist) in row.iter().enumerate() {
                if dist < best_dist {
                    best_dist = dist;
                    best_label = j;
                }
            }
            best_label
        })
        .collect()
}
