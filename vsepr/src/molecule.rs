//! Molecule snapshot: atoms with positions, bonds with integer orders.
//!
//! Neighbour sets are derived from the bond list when the molecule is built
//! and never edited afterwards.

use crate::elements;
use crate::error::{Error, Result};
use itertools::Itertools;
use nalgebra::Vector3;
use periodic_table_on_an_enum::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub index: usize,
    pub symbol: String,
    pub position: Vector3<f64>,
    /// Bonded atom indices, ascending.
    pub neighbors: BTreeSet<usize>,
}

impl Atom {
    pub fn bond_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Atoms bonded to two or more others have bond angles and a local geometry.
    pub fn is_center(&self) -> bool {
        self.bond_count() >= 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondOrder {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn display_color(&self) -> &'static str {
        match self {
            BondOrder::Single => "#78909C",
            BondOrder::Double => "#AED581",
            BondOrder::Triple => "#33691E",
        }
    }
}

impl TryFrom<f64> for BondOrder {
    type Error = Error;

    /// Fractional orders (1.5 for aromatic bonds) round to the nearest integer.
    fn try_from(order: f64) -> Result<Self> {
        match order.round() {
            o if o == 1.0 => Ok(BondOrder::Single),
            o if o == 2.0 => Ok(BondOrder::Double),
            o if o == 3.0 => Ok(BondOrder::Triple),
            _ => Err(Error::InvalidBondOrder(order)),
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> u8 {
        order.as_u8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(i: usize, j: usize, order: f64) -> Result<Self> {
        if i == j {
            return Err(Error::SelfBond(i));
        }
        Ok(Self {
            i,
            j,
            order: BondOrder::try_from(order)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Build a molecule from `(symbol, position)` records and a bond list.
    ///
    /// Symbols must name a real element; bond endpoints must be in range.
    pub fn new<S: AsRef<str>>(atoms: &[(S, Vector3<f64>)], bonds: Vec<Bond>) -> Result<Self> {
        let mut atoms = atoms
            .iter()
            .enumerate()
            .map(|(index, (symbol, position))| {
                let symbol = symbol.as_ref().trim();
                let canonical = Element::from_symbol(symbol)
                    .map(|e| e.get_symbol().to_string())
                    .or_else(|| elements::lookup(symbol).map(|p| p.symbol.to_string()))
                    .ok_or_else(|| Error::UnknownElement(symbol.to_string()))?;
                Ok(Atom {
                    index,
                    symbol: canonical,
                    position: *position,
                    neighbors: BTreeSet::new(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let len = atoms.len();
        for bond in &bonds {
            for index in [bond.i, bond.j] {
                if index >= len {
                    return Err(Error::AtomIndexOutOfRange { index, len });
                }
            }
            if bond.i == bond.j {
                return Err(Error::SelfBond(bond.i));
            }
            atoms[bond.i].neighbors.insert(bond.j);
            atoms[bond.j].neighbors.insert(bond.i);
        }

        Ok(Self { atoms, bonds })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atom(&self, index: usize) -> Result<&Atom> {
        self.atoms.get(index).ok_or(Error::AtomIndexOutOfRange {
            index,
            len: self.atoms.len(),
        })
    }

    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.symbol.as_str()).collect()
    }

    /// Mean atom position, origin for an empty molecule.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.atoms.is_empty() {
            return Vector3::zeros();
        }
        self.atoms.iter().map(|a| a.position).sum::<Vector3<f64>>() / self.atoms.len() as f64
    }

    /// Positions of the atoms bonded to `index`, in neighbour order.
    pub fn neighbor_positions(&self, index: usize) -> Result<Vec<Vector3<f64>>> {
        let atom = self.atom(index)?;
        Ok(atom
            .neighbors
            .iter()
            .map(|&n| self.atoms[n].position)
            .collect())
    }

    /// Index of the atom closest to a picked point.
    pub fn nearest_atom(&self, point: &Vector3<f64>) -> Option<usize> {
        self.atoms
            .iter()
            .map(|a| (a.index, (a.position - point).norm()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// One line per element, most frequent first, ties by symbol.
    pub fn atom_summary(&self) -> Vec<String> {
        self.atoms
            .iter()
            .map(|a| a.symbol.as_str())
            .counts()
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(symbol, count)| match elements::lookup(symbol) {
                Some(props) => format!("{}({}): {}", symbol, count, props.property_line()),
                None => format!("{}({}): EN(?), R(?), IE1(?), EA(?)", symbol, count),
            })
            .collect()
    }
}
