use crate::error::GroupingError;
use crate::group::MIN_GROUP_SIZE;
use ndarray::{Array1, ArrayView2, Axis};

/// Coordinate-wise arithmetic mean of a set of points (n, n_features)
///
/// Sets smaller than [`MIN_GROUP_SIZE`] have no meaningful mean and are rejected;
/// the grouping engine never calls this with fewer points.
pub fn centroid(points: &ArrayView2<f64>) -> Result<Array1<f64>, GroupingError> {
    let n = points.nrows();
    if n < MIN_GROUP_SIZE {
        return Err(GroupingError::UndersizedCluster(n));
    }

    points
        .mean_axis(Axis(0))
        .ok_or(GroupingError::UndersizedCluster(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_centroid_mean() {
        let points = array![[5.0, 5.0], [5.0, 6.0], [5.0, 7.0]];
        let c = centroid(&points.view()).unwrap();

        assert_relative_eq!(c[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(c[1], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_any_dimension() {
        let points = array![[0.0, 0.0, 3.0], [2.0, 4.0, 3.0]];
        let c = centroid(&points.view()).unwrap();
        assert_eq!(c.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_centroid_undersized() {
        let one = array![[1.0, 2.0]];
        assert_eq!(
            centroid(&one.view()),
            Err(GroupingError::UndersizedCluster(1))
        );

        let none = Array2::<f64>::zeros((0, 2));
        assert_eq!(
            centroid(&none.view()),
            Err(GroupingError::UndersizedCluster(0))
        );
    }
}
