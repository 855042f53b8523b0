use ndarray::{Array2, ArrayView1};
use rand::Rng;
use std::fmt;

/// An immutable 2-D point. Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Build a point from the first two entries of a row
    ///
    /// Returns `None` if the row has fewer than two entries.
    pub fn from_row(row: &ArrayView1<f64>) -> Option<Self> {
        match (row.get(0), row.get(1)) {
            (Some(&x), Some(&y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Random point with whole-number coordinates uniform in `[0, max]`.
    ///
    /// Used by callers to pick first-time seed centers.
    pub fn random_seed<R: Rng + ?Sized>(max: f64, rng: &mut R) -> Self {
        let x = (rng.gen::<f64>() * max).round();
        let y = (rng.gen::<f64>() * max).round();
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for Point {
    /// Renders as `(xxx.xx, yyy.yy)`, each coordinate zero-padded to width 6
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:06.2}, {:06.2})", round2(self.x), round2(self.y))
    }
}

/// Copy points into an owned `(n, 2)` array, row `i` holding point `i`
pub fn points_to_array(points: &[Point]) -> Array2<f64> {
    Array2::from_shape_fn((points.len(), 2), |(i, d)| {
        let p = points[i];
        if d == 0 {
            p.x
        } else {
            p.y
        }
    })
}
