//! Per-element reference data.
//!
//! One immutable record per element, built once and shared for the whole
//! process. Group numbers are read off the periodic-table grid rather than
//! stored, so the two can never disagree.

mod table;

use nalgebra::Vector3;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Radius assumed for an element missing from the table.
pub const DEFAULT_RADIUS: f64 = 1.5;
pub const DEFAULT_COLOR: &str = "#9E9E9E";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Nonmetal,
    Metal,
    Metalloid,
    TransitionMetal,
    Lanthanide,
    Actinide,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Nonmetal => "nonmetal",
            Classification::Metal => "metal",
            Classification::Metalloid => "metalloid",
            Classification::TransitionMetal => "transition metal",
            Classification::Lanthanide => "lanthanide",
            Classification::Actinide => "actinide",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BondingFlags {
    pub multiple_bonds: bool,
    pub variable_valence: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementProperties {
    pub symbol: &'static str,
    pub atomic_number: u8,
    /// Van der Waals style radius used for display sizing and layout.
    pub radius: f64,
    pub electronegativity: Option<f64>,
    /// First ionization energy, eV.
    pub ionization_energy: Option<f64>,
    /// Electron affinity, eV.
    pub electron_affinity: Option<f64>,
    pub color: &'static str,
    /// Occupied subshells in filling order.
    pub orbitals: &'static [&'static str],
    pub atomic_radius: f64,
    pub bonding: BondingFlags,
    pub classification: Classification,
}

impl ElementProperties {
    pub fn group(&self) -> Option<u8> {
        group_number(self.symbol)
    }

    /// Sphere radius used when drawing the atom.
    pub fn display_radius(&self) -> f64 {
        display_radius_for(self.radius)
    }

    /// `EN(x), R(x), IE1(x), EA(x)`, with `None` for missing values.
    pub fn property_line(&self) -> String {
        format!(
            "EN({}), R({:?}), IE1({}), EA({})",
            OptionalValue(self.electronegativity),
            self.radius,
            OptionalValue(self.ionization_energy),
            OptionalValue(self.electron_affinity),
        )
    }
}

struct OptionalValue(Option<f64>);

impl fmt::Display for OptionalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:?}", v),
            None => write!(f, "None"),
        }
    }
}

/// Periodic table as drawn: 7 periods, then the lanthanide and actinide rows.
#[rustfmt::skip]
pub const PERIODIC_TABLE_GRID: [[&str; 18]; 9] = [
    ["H",  "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "He"],
    ["Li", "Be", "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "B",  "C",  "N",  "O",  "F",  "Ne"],
    ["Na", "Mg", "",   "",   "",   "",   "",   "",   "",   "",   "",   "",   "Al", "Si", "P",  "S",  "Cl", "Ar"],
    ["K",  "Ca", "Sc", "Ti", "V",  "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr"],
    ["Rb", "Sr", "Y",  "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I",  "Xe"],
    ["Cs", "Ba", "",   "Hf", "Ta", "W",  "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn"],
    ["Fr", "Ra", "",   "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og"],
    ["",   "",   "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", ""],
    ["",   "",   "Ac", "Th", "Pa", "U",  "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", ""],
];

/// Gap between neighbouring spheres when bare atoms are lined up.
pub const ROW_GAP: f64 = 2.5;

const LANTHANIDE_ROW: usize = 7;
const ACTINIDE_ROW: usize = 8;
/// Layout spacing in units of the francium radius.
const LAYOUT_SPACING_FACTOR: f64 = 2.2;

struct ElementTable {
    by_symbol: HashMap<&'static str, usize>,
}

static TABLE: OnceLock<ElementTable> = OnceLock::new();

fn table() -> &'static ElementTable {
    TABLE.get_or_init(|| ElementTable {
        by_symbol: table::ELEMENTS
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol, i))
            .collect(),
    })
}

/// Reference record for `symbol`, `None` for unknown symbols.
pub fn lookup(symbol: &str) -> Option<&'static ElementProperties> {
    table()
        .by_symbol
        .get(symbol)
        .map(|&i| &table::ELEMENTS[i])
}

/// All elements in order of atomic number.
pub fn all() -> &'static [ElementProperties] {
    &table::ELEMENTS
}

fn grid_position(symbol: &str) -> Option<(usize, usize)> {
    PERIODIC_TABLE_GRID.iter().enumerate().find_map(|(row, line)| {
        line.iter()
            .position(|&s| !s.is_empty() && s == symbol)
            .map(|col| (row, col))
    })
}

/// Group 1..=18 from the grid column; f-block elements have none.
pub fn group_number(symbol: &str) -> Option<u8> {
    match grid_position(symbol)? {
        (LANTHANIDE_ROW, _) | (ACTINIDE_ROW, _) => None,
        (_, col) => Some(col as u8 + 1),
    }
}

pub fn display_radius_for(radius: f64) -> f64 {
    0.35 + 0.35 * (radius - 1.0) / (2.2 - 1.0)
}

/// Display radius and colour, with defaults for unknown symbols.
pub fn display_style(symbol: &str) -> (f64, &'static str) {
    match lookup(symbol) {
        Some(props) => (props.display_radius(), props.color),
        None => (display_radius_for(DEFAULT_RADIUS), DEFAULT_COLOR),
    }
}

/// Every element placed on the drawn periodic table, in grid order.
pub fn periodic_layout() -> Vec<(&'static str, Vector3<f64>)> {
    let spacing = lookup("Fr").map_or(DEFAULT_RADIUS, |fr| fr.radius) * LAYOUT_SPACING_FACTOR;

    let mut positions = Vec::with_capacity(table::ELEMENTS.len());
    for (row, line) in PERIODIC_TABLE_GRID.iter().enumerate() {
        // f-block rows hang below period 7
        let y = match row {
            LANTHANIDE_ROW => 8.0 * spacing,
            ACTINIDE_ROW => 9.0 * spacing,
            _ => row as f64 * spacing,
        };
        for (col, &symbol) in line.iter().enumerate() {
            if symbol.is_empty() || lookup(symbol).is_none() {
                continue;
            }
            positions.push((symbol, Vector3::new(col as f64 * spacing, -y, 0.0)));
        }
    }
    positions
}

/// Bare atoms lined up along x, spheres of radius R separated by [`ROW_GAP`]
/// and the row centred on the origin. `None` if any symbol is unknown.
pub fn row_layout<S: AsRef<str>>(symbols: &[S]) -> Option<Vec<(&'static str, Vector3<f64>)>> {
    let props = symbols
        .iter()
        .map(|s| lookup(s.as_ref()))
        .collect::<Option<Vec<_>>>()?;

    let width = props.iter().map(|p| 2.0 * p.radius).sum::<f64>()
        + ROW_GAP * props.len().saturating_sub(1) as f64;
    let mut x = -width / 2.0;
    let mut positions = Vec::with_capacity(props.len());
    for p in props {
        x += p.radius;
        positions.push((p.symbol, Vector3::new(x, 0.0, 0.0)));
        x += p.radius + ROW_GAP;
    }
    Some(positions)
}
