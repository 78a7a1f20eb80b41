//! Cubic sampling grid centered at the origin.

use crate::helper::linspace;
use nalgebra::Vector3;
use rayon::prelude::*;

/// Samples per axis used for every orbital request.
pub const GRID_POINTS: usize = 50;
/// Half-width of the sampled cube, in Angstrom.
pub const GRID_EXTENT: f64 = 10.0;

/// Scalar values on an `n x n x n` lattice spanning `[-extent, extent]` per
/// axis. Values are stored with x as the slowest axis and z as the fastest.
#[derive(Debug, Clone)]
pub struct ScalarGrid {
    pub points_per_axis: usize,
    pub extent: f64,
    pub values: Vec<f64>,
    axis: Vec<f64>,
}

impl ScalarGrid {
    /// Evaluate `f` at every lattice point.
    pub fn sample<F>(points_per_axis: usize, extent: f64, f: F) -> Self
    where
        F: Fn(&Vector3<f64>) -> f64 + Sync,
    {
        let n = points_per_axis.max(2);
        let axis = linspace(-extent, extent, n);

        // pointwise and independent, collect keeps lattice order
        let values: Vec<f64> = (0..n * n * n)
            .into_par_iter()
            .map(|idx| {
                let (i, j, k) = (idx / (n * n), (idx / n) % n, idx % n);
                f(&Vector3::new(axis[i], axis[j], axis[k]))
            })
            .collect();

        Self {
            points_per_axis: n,
            extent,
            values,
            axis,
        }
    }

    /// The fixed 50^3 grid over +-10 used for orbital fields.
    pub fn standard<F>(f: F) -> Self
    where
        F: Fn(&Vector3<f64>) -> f64 + Sync,
    {
        Self::sample(GRID_POINTS, GRID_EXTENT, f)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        2.0 * self.extent / (self.points_per_axis - 1) as f64
    }

    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let n = self.points_per_axis;
        (i * n + j) * n + k
    }

    pub fn coords(&self, idx: usize) -> (usize, usize, usize) {
        let n = self.points_per_axis;
        (idx / (n * n), (idx / n) % n, idx % n)
    }

    pub fn value(&self, i: usize, j: usize, k: usize) -> f64 {
        self.values[self.index(i, j, k)]
    }

    pub fn position(&self, i: usize, j: usize, k: usize) -> Vector3<f64> {
        Vector3::new(self.axis[i], self.axis[j], self.axis[k])
    }

    pub fn position_at(&self, idx: usize) -> Vector3<f64> {
        let (i, j, k) = self.coords(idx);
        self.position(i, j, k)
    }

    /// Largest absolute sample value, 0 for an all-zero field.
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_grid_shape() {
        let grid = ScalarGrid::standard(|_| 1.0);
        assert_eq!(grid.len(), 50 * 50 * 50);
        assert_relative_eq!(grid.spacing(), 20.0 / 49.0, epsilon = 1e-12);
        assert_relative_eq!(grid.position(0, 0, 0), Vector3::new(-10.0, -10.0, -10.0));
        assert_relative_eq!(
            grid.position(49, 49, 49),
            Vector3::new(10.0, 10.0, 10.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_index_round_trip() {
        let grid = ScalarGrid::sample(7, 1.0, |_| 0.0);
        for idx in [0, 1, 6, 7, 48, 49, 200, 342] {
            let (i, j, k) = grid.coords(idx);
            assert_eq!(grid.index(i, j, k), idx);
        }
    }

    #[test]
    fn test_parallel_sampling_keeps_lattice_order() {
        let grid = ScalarGrid::sample(9, 2.0, |p| p.x + 10.0 * p.y + 100.0 * p.z);
        for i in 0..9 {
            for j in 0..9 {
                for k in 0..9 {
                    let p = grid.position(i, j, k);
                    assert_relative_eq!(
                        grid.value(i, j, k),
                        p.x + 10.0 * p.y + 100.0 * p.z,
                        epsilon = 1e-12
                    );
                }
            }
        }
    }

    #[test]
    fn test_max_abs_takes_negative_values() {
        let grid = ScalarGrid::sample(5, 1.0, |p| -3.0 * p.x);
        assert_relative_eq!(grid.max_abs(), 3.0, epsilon = 1e-12);
    }
}
