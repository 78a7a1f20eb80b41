//! Idealized coordination polyhedra around a central atom.
//!
//! A steric number of 3 gives a triangle, 4 gives a tetrahedron. Known
//! neighbour positions anchor the shape; missing vertices are filled in.
//! Every result is translated so that its vertex centroid sits on the
//! central atom.

use itertools::Itertools;
use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// Circumradius used when no neighbour fixes the size.
pub const DEFAULT_RADIUS: f64 = 1.5;
pub const EDGE_COLOR: &str = "#00C800";

const TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];
const TETRAHEDRON_EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [2, 3], [3, 1]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolyhedronKind {
    Triangle,
    Tetrahedron,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyhedron {
    pub kind: PolyhedronKind,
    pub vertices: Vec<Vector3<f64>>,
}

impl Polyhedron {
    /// Edge list for line drawing. Edges touching a missing vertex are left out.
    pub fn edges(&self) -> Vec<[usize; 2]> {
        let all: &[[usize; 2]] = match self.kind {
            PolyhedronKind::Triangle => &TRIANGLE_EDGES,
            PolyhedronKind::Tetrahedron => &TETRAHEDRON_EDGES,
        };
        let n = self.vertices.len();
        all.iter()
            .copied()
            .filter(|&[a, b]| a < n && b < n)
            .collect()
    }

    pub fn centroid(&self) -> Vector3<f64> {
        centroid(&self.vertices)
    }
}

/// Build the polyhedron for `steric_number` around `center`.
///
/// `neighbors` are absolute positions of the bonded atoms, in bond order.
/// Returns `None` for steric numbers other than 3 and 4.
pub fn build_polyhedron(
    steric_number: usize,
    center: &Vector3<f64>,
    neighbors: &[Vector3<f64>],
    radius: f64,
) -> Option<Polyhedron> {
    let (kind, vertices) = match steric_number {
        3 => (PolyhedronKind::Triangle, regular_triangle(center, neighbors, radius)),
        4 => (PolyhedronKind::Tetrahedron, regular_tetrahedron(center, neighbors, radius)),
        _ => return None,
    };
    debug!(
        "SN {} polyhedron from {} neighbours: {} vertices",
        steric_number,
        neighbors.len(),
        vertices.len()
    );
    Some(Polyhedron { kind, vertices })
}

fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    if points.is_empty() {
        return Vector3::zeros();
    }
    points.iter().sum::<Vector3<f64>>() / points.len() as f64
}

/// Shift `points` so their centroid lands on `center`.
fn recenter(points: Vec<Vector3<f64>>, center: &Vector3<f64>) -> Vec<Vector3<f64>> {
    let shift = center - centroid(&points);
    points.into_iter().map(|p| p + shift).collect()
}

fn unit_or(v: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(1e-12).unwrap_or(fallback)
}

/// `v x primary`, or `v x secondary` when that is shorter than `tol`.
fn cross_with_fallback(
    v: &Vector3<f64>,
    primary: &Vector3<f64>,
    secondary: &Vector3<f64>,
    tol: f64,
) -> Vector3<f64> {
    let c = v.cross(primary);
    if c.norm() < tol {
        v.cross(secondary)
    } else {
        c
    }
}

fn regular_triangle(
    center: &Vector3<f64>,
    neighbors: &[Vector3<f64>],
    radius: f64,
) -> Vec<Vector3<f64>> {
    let n = neighbors.len().min(3);
    let mut verts: Vec<Vector3<f64>> = neighbors[..n].iter().map(|p| p - center).collect();

    if n < 3 {
        let (normal, seed) = match n {
            0 => (Vector3::z(), Vector3::x() * radius),
            1 => {
                let v = unit_or(&verts[0], Vector3::x());
                let normal = cross_with_fallback(&v, &Vector3::z(), &Vector3::y(), 1e-4);
                (normal, v * radius)
            }
            _ => {
                let v1 = unit_or(&verts[0], Vector3::x());
                let v2 = unit_or(&verts[1], Vector3::y());
                let mut normal = v1.cross(&v2);
                if normal.norm() < 1e-4 {
                    normal = Vector3::z();
                }
                // opposite bonds have no bisector, use the in-plane perpendicular
                let bisector = (v1 + v2)
                    .try_normalize(1e-6)
                    .or_else(|| normal.cross(&v1).try_normalize(1e-6))
                    .unwrap_or_else(Vector3::x);
                (normal, bisector * radius)
            }
        };

        // fill vertices turn clockwise about the normal
        let axis = Unit::new_normalize(normal);
        for k in 1..=(3 - n) {
            let rotation = Rotation3::from_axis_angle(&axis, -2.0 * PI / 3.0 * k as f64);
            verts.push(rotation * seed);
        }
    }

    recenter(verts, center)
}

fn regular_tetrahedron(
    center: &Vector3<f64>,
    neighbors: &[Vector3<f64>],
    radius: f64,
) -> Vec<Vector3<f64>> {
    match neighbors.len() {
        2 => best_fit_tetrahedron(center, &neighbors[0], &neighbors[1]),
        3 => complete_tetrahedron(center, neighbors, radius),
        4 => recenter(neighbors.iter().map(|p| p - center).collect(), center),
        n => {
            let scale = radius / 3f64.sqrt();
            let verts = [
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(1.0, -1.0, -1.0),
                Vector3::new(-1.0, 1.0, -1.0),
                Vector3::new(-1.0, -1.0, 1.0),
            ]
            .into_iter()
            .take(n)
            .map(|v| v * scale)
            .collect();
            recenter(verts, center)
        }
    }
}

/// Three known vertices; the fourth goes on the far side of their face,
/// beyond the central atom.
fn complete_tetrahedron(
    center: &Vector3<f64>,
    neighbors: &[Vector3<f64>],
    radius: f64,
) -> Vec<Vector3<f64>> {
    let mut verts: Vec<Vector3<f64>> = neighbors.iter().map(|p| p - center).collect();
    // side of the face the bonds point to, seen from the central atom
    let bond_side = centroid(&verts);
    verts.push(Vector3::new(0.0, 0.0, -radius));
    let mut verts = recenter(verts, center);

    let (p1, p2, p3) = (verts[0], verts[1], verts[2]);
    let face_center = (p1 + p2 + p3) / 3.0;
    let mut normal = unit_or(&(p2 - p1).cross(&(p3 - p1)), Vector3::z());
    if normal.dot(&bond_side) < 0.0 {
        normal = -normal;
    }
    verts[3] = face_center - normal * (face_center - center).norm() * 3.0;

    recenter(verts, center)
}

/// Regular tetrahedron with edge `edge`, centred on the origin.
fn canonical_tetrahedron(edge: f64) -> [Vector3<f64>; 4] {
    let h = edge / (2.0 * 2f64.sqrt());
    [
        Vector3::new(edge / 2.0, 0.0, -h),
        Vector3::new(-edge / 2.0, 0.0, -h),
        Vector3::new(0.0, edge / 2.0, h),
        Vector3::new(0.0, -edge / 2.0, h),
    ]
}

/// Rotation taking the direction of `from` onto the direction of `to`.
///
/// Uses the Rodrigues form `I + K + K^2 (1 - c) / s^2` built from the cross
/// and dot products. Antiparallel vectors get a half turn about an axis
/// perpendicular to `from`.
pub fn rotation_between(from: &Vector3<f64>, to: &Vector3<f64>) -> Matrix3<f64> {
    let a = unit_or(from, Vector3::x());
    let b = unit_or(to, Vector3::x());
    let v = a.cross(&b);
    let c = a.dot(&b);
    let s = v.norm();

    if s < 1e-8 {
        if c > 0.0 {
            return Matrix3::identity();
        }
        let axis = cross_with_fallback(&a, &Vector3::x(), &Vector3::y(), 1e-6).normalize();
        return 2.0 * axis * axis.transpose() - Matrix3::identity();
    }

    let k = v.cross_matrix();
    Matrix3::identity() + k + k * k * ((1.0 - c) / (s * s))
}

/// Two known vertices: try all 12 ways of laying a canonical tetrahedron
/// edge onto the known pair and keep the one that moves them least after
/// recentring.
fn best_fit_tetrahedron(
    center: &Vector3<f64>,
    a: &Vector3<f64>,
    b: &Vector3<f64>,
) -> Vec<Vector3<f64>> {
    let base = canonical_tetrahedron((a - b).norm());

    let mut best: Option<(f64, Vec<Vector3<f64>>)> = None;
    for (i, j) in (0..4).tuple_combinations() {
        for (p, q) in [(a, b), (b, a)] {
            let rotation = rotation_between(&(base[j] - base[i]), &(q - p));
            let placed = base.iter().map(|v| rotation * (v - base[i]) + p).collect();
            let verts = recenter(placed, center);

            let error = (verts[i] - p).norm() + (verts[j] - q).norm();
            if best.as_ref().map_or(true, |(e, _)| error < *e) {
                best = Some((error, verts));
            }
        }
    }

    match best {
        Some((error, verts)) => {
            debug!("best tetrahedron fit residual {:.4e}", error);
            verts
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pairwise_distances(verts: &[Vector3<f64>]) -> Vec<f64> {
        verts
            .iter()
            .tuple_combinations()
            .map(|(p, q)| (p - q).norm())
            .collect()
    }

    fn regular_tetrahedron_around(center: Vector3<f64>, radius: f64) -> Vec<Vector3<f64>> {
        let s = radius / 3f64.sqrt();
        [
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
        ]
        .iter()
        .map(|v| center + v * s)
        .collect()
    }

    #[test]
    fn test_unsupported_steric_numbers() {
        let c = Vector3::zeros();
        assert!(build_polyhedron(2, &c, &[], DEFAULT_RADIUS).is_none());
        assert!(build_polyhedron(5, &c, &[], DEFAULT_RADIUS).is_none());
    }

    #[test]
    fn test_free_triangle_is_equilateral() {
        let center = Vector3::new(1.0, -2.0, 0.5);
        let tri = build_polyhedron(3, &center, &[], DEFAULT_RADIUS).unwrap();
        assert_eq!(tri.kind, PolyhedronKind::Triangle);
        assert_eq!(tri.vertices.len(), 3);
        assert_relative_eq!(tri.centroid(), center, epsilon = 1e-12);

        let d = pairwise_distances(&tri.vertices);
        for x in &d {
            assert_relative_eq!(*x, DEFAULT_RADIUS * 3f64.sqrt(), epsilon = 1e-12);
        }
        for v in &tri.vertices {
            assert_relative_eq!((v - center).norm(), DEFAULT_RADIUS, epsilon = 1e-12);
        }
        assert_eq!(tri.edges(), vec![[0, 1], [1, 2], [2, 0]]);
    }

    #[test]
    fn test_triangle_from_one_neighbor_keeps_it() {
        let center = Vector3::new(0.0, 0.0, 1.0);
        // neighbour along z exercises the y-axis fallback
        let neighbor = center + Vector3::new(0.0, 0.0, DEFAULT_RADIUS);
        let tri = build_polyhedron(3, &center, &[neighbor], DEFAULT_RADIUS).unwrap();

        assert_relative_eq!(tri.vertices[0], neighbor, epsilon = 1e-12);
        assert_relative_eq!(tri.centroid(), center, epsilon = 1e-12);
        let d = pairwise_distances(&tri.vertices);
        assert_relative_eq!(d[0], d[1], epsilon = 1e-12);
        assert_relative_eq!(d[1], d[2], epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_from_two_neighbors() {
        let r = DEFAULT_RADIUS;
        let v1 = Vector3::new(r, 0.0, 0.0);
        let v2 = Vector3::new(-r / 2.0, r * 3f64.sqrt() / 2.0, 0.0);
        let tri = build_polyhedron(3, &Vector3::zeros(), &[v1, v2], r).unwrap();

        // bisector at 60 degrees, turned by -120 about +z, lands at
        // (r/2, -r*sqrt(3)/2, 0); the centroid (r/3, 0, 0) then moves to the origin
        let shift = Vector3::new(-r / 3.0, 0.0, 0.0);
        assert_relative_eq!(tri.vertices[0], v1 + shift, epsilon = 1e-12);
        assert_relative_eq!(tri.vertices[1], v2 + shift, epsilon = 1e-12);
        assert_relative_eq!(
            tri.vertices[2],
            Vector3::new(r / 6.0, -r * 3f64.sqrt() / 2.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_triangle_from_opposite_neighbors_is_finite() {
        let nbrs = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0)];
        let tri = build_polyhedron(3, &Vector3::zeros(), &nbrs, DEFAULT_RADIUS).unwrap();
        assert!(tri.vertices.iter().all(|v| v.iter().all(|x| x.is_finite())));
        assert_relative_eq!(tri.centroid(), Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_full_tetrahedron_is_unchanged() {
        let center = Vector3::new(0.3, 0.2, -1.0);
        let nbrs = regular_tetrahedron_around(center, 1.1);
        let tet = build_polyhedron(4, &center, &nbrs, DEFAULT_RADIUS).unwrap();
        assert_eq!(tet.kind, PolyhedronKind::Tetrahedron);
        for (got, want) in tet.vertices.iter().zip(&nbrs) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
        assert_eq!(tet.edges().len(), 6);
    }

    #[test]
    fn test_two_neighbors_on_canonical_edge() {
        let edge = 1.6;
        let base = canonical_tetrahedron(edge);
        let tet = build_polyhedron(4, &Vector3::zeros(), &base[..2], DEFAULT_RADIUS).unwrap();
        // the identity placement has zero residual and is tried first
        for (got, want) in tet.vertices.iter().zip(base.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_neighbors_on_turned_far_edge() {
        // canonical tetrahedron, edge 1.6, turned a quarter about z and moved to c;
        // the known pair is its (2, 3) edge
        let (e, h) = (1.6, 1.6 / (2.0 * 2f64.sqrt()));
        let c = Vector3::new(0.5, -1.0, 2.0);
        let expected = [
            c + Vector3::new(0.0, e / 2.0, -h),
            c + Vector3::new(0.0, -e / 2.0, -h),
            c + Vector3::new(-e / 2.0, 0.0, h),
            c + Vector3::new(e / 2.0, 0.0, h),
        ];
        let tet = build_polyhedron(4, &c, &expected[2..], DEFAULT_RADIUS).unwrap();

        assert_eq!(tet.vertices.len(), 4);
        for want in &expected {
            let closest = tet
                .vertices
                .iter()
                .map(|v| (v - want).norm())
                .fold(f64::INFINITY, f64::min);
            assert!(closest < 1e-9, "no vertex at {:?}", want);
        }
    }

    #[test]
    fn test_two_neighbors_give_rigid_tetrahedron() {
        let center = Vector3::new(-0.5, 1.0, 2.0);
        let a = center + Vector3::new(0.6, 0.8, -0.4);
        let b = center + Vector3::new(-0.9, 0.1, -0.5);
        let edge = (a - b).norm();
        let tet = build_polyhedron(4, &center, &[a, b], DEFAULT_RADIUS).unwrap();

        assert_eq!(tet.vertices.len(), 4);
        assert_relative_eq!(tet.centroid(), center, epsilon = 1e-12);
        for d in pairwise_distances(&tet.vertices) {
            assert_relative_eq!(d, edge, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_three_neighbors_put_fourth_opposite() {
        let center = Vector3::zeros();
        let full = regular_tetrahedron_around(center, 1.0);
        let tet = build_polyhedron(4, &center, &full[..3], 1.0).unwrap();

        assert_eq!(tet.vertices.len(), 4);
        assert_relative_eq!(tet.centroid(), center, epsilon = 1e-12);
        let face = (tet.vertices[0] + tet.vertices[1] + tet.vertices[2]) / 3.0;
        let apex = tet.vertices[3];
        // apex and face centre on opposite sides of the centre
        assert!(face.dot(&apex) < 0.0);
        // the known three only move rigidly
        let d_in = pairwise_distances(&full[..3]);
        let d_out = pairwise_distances(&tet.vertices[..3]);
        for (x, y) in d_in.iter().zip(&d_out) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fallback_tetrahedron() {
        let center = Vector3::new(1.0, 1.0, 1.0);
        let one = build_polyhedron(4, &center, &[Vector3::zeros()], DEFAULT_RADIUS).unwrap();
        assert_eq!(one.vertices.len(), 1);
        assert_relative_eq!(one.vertices[0], center, epsilon = 1e-12);
        assert!(one.edges().is_empty());

        let five = vec![Vector3::zeros(); 5];
        let full = build_polyhedron(4, &center, &five, DEFAULT_RADIUS).unwrap();
        assert_eq!(full.vertices.len(), 4);
        for v in &full.vertices {
            assert_relative_eq!((v - center).norm(), DEFAULT_RADIUS, epsilon = 1e-12);
        }

        assert!(build_polyhedron(4, &center, &[], DEFAULT_RADIUS)
            .unwrap()
            .vertices
            .is_empty());
    }

    #[test]
    fn test_rotation_between() {
        let cases = [
            (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0)),
            (Vector3::new(1.0, 2.0, 3.0), Vector3::new(-3.0, 0.5, 1.0)),
            (Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 4.0)),
            (Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0)),
        ];
        for (from, to) in cases {
            let r = rotation_between(&from, &to);
            assert_relative_eq!(r * from.normalize(), to.normalize(), epsilon = 1e-12);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-12);
        }
    }
}
