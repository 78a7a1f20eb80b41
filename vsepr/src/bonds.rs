//! Bond lengths, bond angles and where to put their labels.

use crate::molecule::Molecule;
use itertools::Itertools;
use nalgebra::Vector3;
use serde::Serialize;

/// Distance of an angle label from the plane of its two bonds.
pub const ANGLE_LABEL_OFFSET: f64 = 0.5;
/// Distance of a length label from its bond axis.
pub const LENGTH_LABEL_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondAngle {
    /// Atom at the apex of the angle.
    pub vertex: usize,
    pub neighbors: (usize, usize),
    pub degrees: f64,
    pub anchor: Vector3<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BondGeometry {
    pub pairs: Vec<(usize, usize)>,
    pub midpoints: Vec<Vector3<f64>>,
    pub lengths: Vec<f64>,
    pub angles: Vec<BondAngle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub anchor: Vector3<f64>,
}

/// Angle between two bond vectors, in degrees.
pub fn bond_angle(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    let denom = v1.norm() * v2.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (v1.dot(v2) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Label point for the angle between `v1` and `v2` at `origin`, lifted off
/// the bond plane along its normal. Colinear bonds lift along z.
pub fn angle_anchor(
    origin: &Vector3<f64>,
    v1: &Vector3<f64>,
    v2: &Vector3<f64>,
    offset: f64,
) -> Vector3<f64> {
    let mut normal = v1.cross(v2);
    if normal.norm() < 1e-6 {
        normal = Vector3::z();
    }
    origin + (v1 + v2) / 4.0 + normal.normalize() * offset
}

pub fn analyze(molecule: &Molecule) -> BondGeometry {
    analyze_with_offset(molecule, ANGLE_LABEL_OFFSET)
}

/// Lengths for every bond and angles for every neighbour pair at atoms
/// with two or more bonds.
pub fn analyze_with_offset(molecule: &Molecule, angle_offset: f64) -> BondGeometry {
    let atoms = molecule.atoms();
    let mut geometry = BondGeometry::default();

    for bond in molecule.bonds() {
        let (p1, p2) = (atoms[bond.i].position, atoms[bond.j].position);
        geometry.pairs.push((bond.i, bond.j));
        geometry.midpoints.push((p1 + p2) / 2.0);
        geometry.lengths.push((p1 - p2).norm());
    }

    for atom in atoms.iter().filter(|a| a.is_center()) {
        for (n1, n2) in atom.neighbors.iter().copied().tuple_combinations() {
            let v1 = atoms[n1].position - atom.position;
            let v2 = atoms[n2].position - atom.position;
            geometry.angles.push(BondAngle {
                vertex: atom.index,
                neighbors: (n1, n2),
                degrees: bond_angle(&v1, &v2),
                anchor: angle_anchor(&atom.position, &v1, &v2, angle_offset),
            });
        }
    }

    geometry
}

/// Length label points, pushed off each bond away from the molecule's centre.
///
/// The push direction is `bond x (centroid - midpoint)`, falling back to the
/// x and then the y axis when the bond points at the centroid.
pub fn length_label_anchors(molecule: &Molecule, offset: f64) -> Vec<Vector3<f64>> {
    let atoms = molecule.atoms();
    let centroid = molecule.centroid();

    molecule
        .bonds()
        .iter()
        .map(|bond| {
            let (p1, p2) = (atoms[bond.i].position, atoms[bond.j].position);
            let midpoint = (p1 + p2) / 2.0;
            let dir = (p2 - p1).try_normalize(1e-12).unwrap_or_else(Vector3::x);

            let mut perp = dir.cross(&(centroid - midpoint));
            if perp.norm() < 1e-6 {
                perp = dir.cross(&Vector3::x());
                if perp.norm() < 1e-6 {
                    perp = dir.cross(&Vector3::y());
                }
            }
            midpoint + perp.normalize() * offset
        })
        .collect()
}

pub fn format_length(length: f64) -> String {
    format!("{:.2}Å", length)
}

pub fn format_angle(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

pub fn length_labels(molecule: &Molecule, geometry: &BondGeometry, offset: f64) -> Vec<Label> {
    geometry
        .lengths
        .iter()
        .zip(length_label_anchors(molecule, offset))
        .map(|(&length, anchor)| Label {
            text: format_length(length),
            anchor,
        })
        .collect()
}

pub fn angle_labels(geometry: &BondGeometry) -> Vec<Label> {
    geometry
        .angles
        .iter()
        .map(|angle| Label {
            text: format_angle(angle.degrees),
            anchor: angle.anchor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::Bond;
    use approx::assert_relative_eq;

    fn molecule(atoms: &[(&str, Vector3<f64>)], bonds: &[(usize, usize)]) -> Molecule {
        let bonds = bonds
            .iter()
            .map(|&(i, j)| Bond::new(i, j, 1.0).unwrap())
            .collect();
        Molecule::new(atoms, bonds).unwrap()
    }

    #[test]
    fn test_opposite_bonds_are_straight() {
        let v1 = Vector3::new(1.3, 0.0, 0.0);
        let v2 = Vector3::new(-0.7, 0.0, 0.0);
        assert_relative_eq!(bond_angle(&v1, &v2), 180.0, epsilon = 1e-12);
        assert_eq!(bond_angle(&v1, &v1), 0.0);
        assert_relative_eq!(bond_angle(&v1, &Vector3::y()), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_carbon_dioxide() {
        let co2 = molecule(
            &[
                ("C", Vector3::zeros()),
                ("O", Vector3::new(1.16, 0.0, 0.0)),
                ("O", Vector3::new(-1.16, 0.0, 0.0)),
            ],
            &[(0, 1), (0, 2)],
        );
        let geometry = analyze(&co2);
        assert_eq!(geometry.pairs, vec![(0, 1), (0, 2)]);
        assert_relative_eq!(geometry.lengths[0], 1.16, epsilon = 1e-12);
        assert_relative_eq!(geometry.midpoints[1], Vector3::new(-0.58, 0.0, 0.0));

        assert_eq!(geometry.angles.len(), 1);
        let angle = &geometry.angles[0];
        assert_eq!(angle.vertex, 0);
        assert_eq!(angle.neighbors, (1, 2));
        assert_relative_eq!(angle.degrees, 180.0, epsilon = 1e-12);
        // colinear bonds: anchor lifted along z
        assert_relative_eq!(angle.anchor, Vector3::new(0.0, 0.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_methane_angles() {
        let s = 1.09 / 3f64.sqrt();
        let ch4 = molecule(
            &[
                ("C", Vector3::zeros()),
                ("H", Vector3::new(s, s, s)),
                ("H", Vector3::new(s, -s, -s)),
                ("H", Vector3::new(-s, s, -s)),
                ("H", Vector3::new(-s, -s, s)),
            ],
            &[(0, 1), (0, 2), (0, 3), (0, 4)],
        );
        let geometry = analyze(&ch4);
        assert_eq!(geometry.angles.len(), 6);
        for angle in &geometry.angles {
            assert_relative_eq!(angle.degrees, 109.4712206, epsilon = 1e-6);
        }
        let labels = angle_labels(&geometry);
        assert_eq!(labels[0].text, "109.5°");
    }

    #[test]
    fn test_angle_anchor() {
        let v1 = Vector3::new(2.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 2.0, 0.0);
        let anchor = angle_anchor(&Vector3::new(1.0, 1.0, 1.0), &v1, &v2, 0.5);
        assert_relative_eq!(anchor, Vector3::new(1.5, 1.5, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_length_labels_leave_the_molecule_plane() {
        let water = molecule(
            &[
                ("O", Vector3::zeros()),
                ("H", Vector3::new(0.9572, 0.0, 0.0)),
                ("H", Vector3::new(-0.2399872, 0.92662721, 0.0)),
            ],
            &[(0, 1), (0, 2)],
        );
        let geometry = analyze(&water);
        let labels = length_labels(&water, &geometry, LENGTH_LABEL_OFFSET);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "0.96Å");

        for (label, midpoint) in labels.iter().zip(&geometry.midpoints) {
            // in-plane molecule: perp is the plane normal
            assert_relative_eq!((label.anchor - midpoint).norm(), 0.5, epsilon = 1e-9);
            assert_relative_eq!(label.anchor.x, midpoint.x, epsilon = 1e-9);
            assert_relative_eq!(label.anchor.y, midpoint.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_length_label_fallback_axes() {
        // diatomic: centroid equals the midpoint
        let h2 = molecule(
            &[("H", Vector3::zeros()), ("H", Vector3::new(0.0, 0.0, 0.74))],
            &[(0, 1)],
        );
        let anchors = length_label_anchors(&h2, 0.5);
        // z x x = y
        assert_relative_eq!(anchors[0], Vector3::new(0.0, 0.5, 0.37), epsilon = 1e-12);

        let x_axis = molecule(
            &[("H", Vector3::zeros()), ("H", Vector3::new(0.74, 0.0, 0.0))],
            &[(0, 1)],
        );
        let anchors = length_label_anchors(&x_axis, 0.5);
        // x x x = 0, then x x y = z
        assert_relative_eq!(anchors[0], Vector3::new(0.37, 0.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_length(1.0), "1.00Å");
        assert_eq!(format_angle(104.4776), "104.5°");
    }
}
