//! Steric number and hybridization of a single atom.
//!
//! Lone pairs come from a fixed (group, bond count) table. Groups 1-14 and
//! 18, which include the transition metals, always get zero lone pairs; no
//! expanded-octet rules are applied beyond group 17 with seven bonds.

use crate::elements;
use crate::error::Result;
use crate::molecule::Molecule;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MolecularShape {
    Linear,
    TrigonalPlanar,
    BentType1,
    Tetrahedral,
    TrigonalPyramidal,
    BentType2,
}

impl MolecularShape {
    pub fn name(&self) -> &'static str {
        match self {
            MolecularShape::Linear => "linear",
            MolecularShape::TrigonalPlanar => "trigonal-planar",
            MolecularShape::BentType1 => "bent-type-1",
            MolecularShape::Tetrahedral => "tetrahedral",
            MolecularShape::TrigonalPyramidal => "trigonal-pyramidal",
            MolecularShape::BentType2 => "bent-type-2",
        }
    }
}

impl fmt::Display for MolecularShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hybridization {
    Sp,
    Sp2,
    Sp3,
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Hybridization::Sp => "sp",
            Hybridization::Sp2 => "sp2",
            Hybridization::Sp3 => "sp3",
        };
        f.write_str(tag)
    }
}

/// Classification of one atom, recomputed on every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalGeometry {
    pub atom_index: Option<usize>,
    pub bond_count: usize,
    pub lone_pairs: usize,
    pub steric_number: usize,
    pub shape: Option<MolecularShape>,
    pub hybridization: Option<Hybridization>,
}

impl fmt::Display for LocalGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.shape.map_or("None".to_string(), |s| s.to_string());
        let hybrid = self.hybridization.map_or("None".to_string(), |h| h.to_string());
        writeln!(
            f,
            "bonds: {}, lone pairs: {}, SN: {}",
            self.bond_count, self.lone_pairs, self.steric_number
        )?;
        write!(f, "structure: {}, hybridization: {}", shape, hybrid)
    }
}

pub fn lone_pair_count(group: Option<u8>, bond_count: usize) -> usize {
    match (group, bond_count) {
        (Some(15), 1) => 2,
        (Some(15), 2 | 3) => 1,
        (Some(16), 1 | 2) => 2,
        (Some(16), 3 | 4) => 1,
        (Some(17), 1 | 2) => 3,
        (Some(17), 3 | 4) => 2,
        (Some(17), 5 | 6) => 1,
        _ => 0,
    }
}

fn shape_for(steric_number: usize, lone_pairs: usize) -> Option<(MolecularShape, Hybridization)> {
    use Hybridization::*;
    use MolecularShape::*;

    match (steric_number, lone_pairs) {
        (2, _) => Some((Linear, Sp)),
        (3, 0) => Some((TrigonalPlanar, Sp2)),
        (3, 1) => Some((BentType1, Sp2)),
        (4, 0) => Some((Tetrahedral, Sp3)),
        (4, 1) => Some((TrigonalPyramidal, Sp3)),
        (4, 2) => Some((BentType2, Sp3)),
        _ => None,
    }
}

/// Classify from a group number and bond count. `None` when there are no bonds.
pub fn classify(group: Option<u8>, bond_count: usize) -> Option<LocalGeometry> {
    if bond_count == 0 {
        return None;
    }

    let lone_pairs = lone_pair_count(group, bond_count);
    let steric_number = bond_count + lone_pairs;
    let (shape, hybridization) = shape_for(steric_number, lone_pairs).unzip();

    Some(LocalGeometry {
        atom_index: None,
        bond_count,
        lone_pairs,
        steric_number,
        shape,
        hybridization,
    })
}

/// Classify atom `index` of `molecule`, taking its group from the periodic table.
pub fn classify_atom(molecule: &Molecule, index: usize) -> Result<Option<LocalGeometry>> {
    let atom = molecule.atom(index)?;
    let group = elements::group_number(&atom.symbol);
    Ok(classify(group, atom.bond_count()).map(|geometry| LocalGeometry {
        atom_index: Some(index),
        ..geometry
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::Bond;
    use nalgebra::Vector3;

    #[test]
    fn test_groups_without_lone_pairs() {
        let groups = (1..=14).chain(std::iter::once(18));
        for group in groups {
            for bonds in 1..=8 {
                let geometry = classify(Some(group), bonds).unwrap();
                assert_eq!(geometry.lone_pairs, 0);
                assert_eq!(geometry.steric_number, bonds);
            }
        }
    }

    #[test]
    fn test_bent_oxygen() {
        let geometry = classify(Some(16), 2).unwrap();
        assert_eq!(geometry.lone_pairs, 2);
        assert_eq!(geometry.steric_number, 4);
        assert_eq!(geometry.shape, Some(MolecularShape::BentType2));
        assert_eq!(geometry.hybridization, Some(Hybridization::Sp3));
        assert_eq!(geometry.shape.unwrap().name(), "bent-type-2");
    }

    #[test]
    fn test_pyramidal_nitrogen() {
        let geometry = classify(Some(15), 3).unwrap();
        assert_eq!(geometry.lone_pairs, 1);
        assert_eq!(geometry.steric_number, 4);
        assert_eq!(geometry.shape, Some(MolecularShape::TrigonalPyramidal));
        assert_eq!(geometry.hybridization, Some(Hybridization::Sp3));
    }

    #[test]
    fn test_lone_pair_table() {
        assert_eq!(lone_pair_count(Some(15), 1), 2);
        assert_eq!(lone_pair_count(Some(15), 5), 0);
        assert_eq!(lone_pair_count(Some(15), 9), 0);
        assert_eq!(lone_pair_count(Some(16), 4), 1);
        assert_eq!(lone_pair_count(Some(16), 6), 0);
        assert_eq!(lone_pair_count(Some(17), 1), 3);
        assert_eq!(lone_pair_count(Some(17), 4), 2);
        assert_eq!(lone_pair_count(Some(17), 6), 1);
        assert_eq!(lone_pair_count(Some(17), 7), 0);
        assert_eq!(lone_pair_count(None, 2), 0);
    }

    #[test]
    fn test_shapes() {
        // SN 2 is linear whatever the lone pairs
        assert_eq!(classify(Some(14), 2).unwrap().shape, Some(MolecularShape::Linear));
        assert_eq!(classify(Some(13), 3).unwrap().shape, Some(MolecularShape::TrigonalPlanar));
        assert_eq!(classify(Some(16), 3).unwrap().steric_number, 4);
        assert_eq!(classify(Some(14), 4).unwrap().shape, Some(MolecularShape::Tetrahedral));

        let hcl = classify(Some(17), 1).unwrap();
        assert_eq!(hcl.steric_number, 4);
        assert_eq!(hcl.shape, None);
        assert_eq!(hcl.hybridization, None);

        let single = classify(Some(1), 1).unwrap();
        assert_eq!(single.steric_number, 1);
        assert_eq!(single.shape, None);

        assert_eq!(classify(Some(6), 6).unwrap().shape, None);
        assert!(classify(Some(16), 0).is_none());
    }

    #[test]
    fn test_display() {
        let text = classify(Some(16), 2).unwrap().to_string();
        assert_eq!(
            text,
            "bonds: 2, lone pairs: 2, SN: 4\nstructure: bent-type-2, hybridization: sp3"
        );
        let text = classify(Some(1), 1).unwrap().to_string();
        assert!(text.ends_with("structure: None, hybridization: None"));
    }

    #[test]
    fn test_classify_atom_uses_periodic_group() {
        let atoms = [
            ("N", Vector3::new(0.0, 0.0, 0.0)),
            ("H", Vector3::new(0.94, 0.0, -0.38)),
            ("H", Vector3::new(-0.47, 0.81, -0.38)),
            ("H", Vector3::new(-0.47, -0.81, -0.38)),
        ];
        let bonds = (1..4).map(|i| Bond::new(0, i, 1.0).unwrap()).collect();
        let ammonia = Molecule::new(&atoms, bonds).unwrap();

        let geometry = classify_atom(&ammonia, 0).unwrap().unwrap();
        assert_eq!(geometry.atom_index, Some(0));
        assert_eq!(geometry.shape, Some(MolecularShape::TrigonalPyramidal));

        let hydrogen = classify_atom(&ammonia, 1).unwrap().unwrap();
        assert_eq!(hydrogen.steric_number, 1);
        assert!(classify_atom(&ammonia, 7).is_err());
    }
}
