//! Isosurface extraction by marching tetrahedra.
//!
//! Every grid cell is split into six tetrahedra sharing the cell diagonal,
//! so the case table reduces to "one vertex inside", "two inside" and
//! "three inside". Points on a shared grid edge are emitted once.

use crate::grid::ScalarGrid;
use itertools::iproduct;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const CUBE_CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

// six tetrahedra around the 0-6 diagonal
const CUBE_TETRAHEDRA: [[usize; 4]; 6] = [
    [0, 5, 1, 6],
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
];

/// Triangle mesh: shared points plus index triples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub points: Vec<Vector3<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn n_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Scale every point about the origin.
    pub fn scale(&mut self, factor: f64) {
        for p in self.points.iter_mut() {
            *p *= factor;
        }
    }

    pub fn translate(&mut self, offset: &Vector3<f64>) {
        for p in self.points.iter_mut() {
            *p += offset;
        }
    }

    pub fn translated(&self, offset: &Vector3<f64>) -> Mesh {
        let mut mesh = self.clone();
        mesh.translate(offset);
        mesh
    }
}

struct Extractor<'a> {
    grid: &'a ScalarGrid,
    level: f64,
    mesh: Mesh,
    edge_points: HashMap<(usize, usize), usize>,
}

impl<'a> Extractor<'a> {
    fn new(grid: &'a ScalarGrid, level: f64) -> Self {
        Self {
            grid,
            level,
            mesh: Mesh::default(),
            edge_points: HashMap::new(),
        }
    }

    /// Inside means on the lobe side: above a positive level, below a negative one.
    fn is_inside(&self, idx: usize) -> bool {
        let value = self.grid.values[idx];
        if self.level >= 0.0 {
            value >= self.level
        } else {
            value <= self.level
        }
    }

    /// Point where the field crosses the level on a grid edge.
    fn edge_point(&mut self, inside: usize, outside: usize) -> usize {
        let key = (inside.min(outside), inside.max(outside));
        if let Some(&point) = self.edge_points.get(&key) {
            return point;
        }

        let (fa, fb) = (self.grid.values[inside], self.grid.values[outside]);
        // exactly one of fa, fb is on the lobe side, so fa != fb
        let t = (self.level - fa) / (fb - fa);
        let pa = self.grid.position_at(inside);
        let pb = self.grid.position_at(outside);
        self.mesh.points.push(pa + (pb - pa) * t);

        let point = self.mesh.points.len() - 1;
        self.edge_points.insert(key, point);
        point
    }

    fn push_triangle(&mut self, mut tri: [usize; 3], outward: &Vector3<f64>) {
        let a = self.mesh.points[tri[0]];
        let b = self.mesh.points[tri[1]];
        let c = self.mesh.points[tri[2]];
        if (b - a).cross(&(c - a)).dot(outward) < 0.0 {
            tri.swap(1, 2);
        }
        self.mesh.triangles.push(tri);
    }

    fn polygonize(&mut self, tet: [usize; 4]) {
        let (inside, outside): (Vec<usize>, Vec<usize>) =
            tet.iter().copied().partition(|&idx| self.is_inside(idx));
        if inside.is_empty() || outside.is_empty() {
            return;
        }

        let centroid = |ids: &[usize]| {
            ids.iter()
                .map(|&idx| self.grid.position_at(idx))
                .sum::<Vector3<f64>>()
                / ids.len() as f64
        };
        // triangles face away from the lobe
        let outward = centroid(&outside) - centroid(&inside);

        match inside.len() {
            1 => {
                let tri = [
                    self.edge_point(inside[0], outside[0]),
                    self.edge_point(inside[0], outside[1]),
                    self.edge_point(inside[0], outside[2]),
                ];
                self.push_triangle(tri, &outward);
            }
            3 => {
                let tri = [
                    self.edge_point(inside[0], outside[0]),
                    self.edge_point(inside[1], outside[0]),
                    self.edge_point(inside[2], outside[0]),
                ];
                self.push_triangle(tri, &outward);
            }
            _ => {
                let p0 = self.edge_point(inside[0], outside[0]);
                let p1 = self.edge_point(inside[0], outside[1]);
                let p2 = self.edge_point(inside[1], outside[1]);
                let p3 = self.edge_point(inside[1], outside[0]);
                self.push_triangle([p0, p1, p2], &outward);
                self.push_triangle([p0, p2, p3], &outward);
            }
        }
    }

    fn run(mut self) -> Mesh {
        let n = self.grid.points_per_axis;
        for (i, j, k) in iproduct!(0..n - 1, 0..n - 1, 0..n - 1) {
            let corners = CUBE_CORNERS.map(|[di, dj, dk]| self.grid.index(i + di, j + dj, k + dk));
            for tet in CUBE_TETRAHEDRA {
                self.polygonize(tet.map(|c| corners[c]));
            }
        }
        self.mesh
    }
}

/// Extract the surface where the sampled field equals `level`.
///
/// For a negative level the lobe is the region below it, so a field that
/// never goes negative yields nothing there. Returns an empty mesh when the
/// level is never crossed.
pub fn extract(grid: &ScalarGrid, level: f64) -> Mesh {
    Extractor::new(grid, level).run()
}
