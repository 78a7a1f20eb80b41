//! Reference orbital radii.
//!
//! The hydrogen field is drawn at its natural size; for any other element
//! it is rescaled by element radius / hydrogen radius of the same orbital.

use crate::error::{OrbitalError, Result};
use crate::orbital::OrbitalType;

// (symbol, s radius, p radius). p is None when the element has no tabulated p shell.
const ELEMENT_ORBITAL_RADII: [(&str, f64, Option<f64>); 102] = [
    ("H", 0.53, None),
    ("He", 0.31, None),
    ("Li", 1.67, None),
    ("Be", 1.12, None),
    ("B", 0.87, Some(0.80)),
    ("C", 0.67, Some(0.57)),
    ("N", 0.56, Some(0.51)),
    ("O", 0.48, Some(0.45)),
    ("F", 0.42, Some(0.40)),
    ("Ne", 0.38, Some(0.38)),
    ("Na", 1.90, None),
    ("Mg", 1.45, None),
    ("Al", 1.18, Some(1.18)),
    ("Si", 1.11, Some(1.11)),
    ("P", 0.98, Some(0.98)),
    ("S", 0.88, Some(0.88)),
    ("Cl", 0.79, Some(0.79)),
    ("Ar", 0.71, Some(0.71)),
    ("K", 2.43, None),
    ("Ca", 1.94, None),
    ("Sc", 1.70, None),
    ("Ti", 1.60, None),
    ("V", 1.53, None),
    ("Cr", 1.39, None),
    ("Mn", 1.39, None),
    ("Fe", 1.32, None),
    ("Co", 1.26, None),
    ("Ni", 1.24, None),
    ("Cu", 1.28, None),
    ("Zn", 1.39, None),
    ("Ga", 1.26, Some(1.26)),
    ("Ge", 1.22, Some(1.22)),
    ("As", 1.21, Some(1.21)),
    ("Se", 1.16, Some(1.16)),
    ("Br", 1.14, Some(1.14)),
    ("Kr", 1.10, Some(1.10)),
    ("Rb", 2.65, None),
    ("Sr", 2.19, None),
    ("Y", 2.12, None),
    ("Zr", 2.06, None),
    ("Nb", 1.98, None),
    ("Mo", 1.90, None),
    ("Tc", 1.83, None),
    ("Ru", 1.78, None),
    ("Rh", 1.73, None),
    ("Pd", 1.69, None),
    ("Ag", 1.65, None),
    ("Cd", 1.61, None),
    ("In", 1.56, Some(1.56)),
    ("Sn", 1.45, Some(1.45)),
    ("Sb", 1.33, Some(1.33)),
    ("Te", 1.23, Some(1.23)),
    ("I", 1.15, Some(1.15)),
    ("Xe", 1.08, Some(1.08)),
    ("Cs", 2.98, None),
    ("Ba", 2.53, None),
    ("La", 2.17, None),
    ("Hf", 2.08, None),
    ("Ta", 2.00, None),
    ("W", 1.93, None),
    ("Re", 1.88, None),
    ("Os", 1.85, None),
    ("Ir", 1.80, None),
    ("Pt", 1.77, None),
    ("Au", 1.74, None),
    ("Hg", 1.71, None),
    ("Tl", 1.56, Some(1.56)),
    ("Pb", 1.54, Some(1.54)),
    ("Bi", 1.43, Some(1.43)),
    ("Po", 1.35, Some(1.35)),
    ("At", 1.27, Some(1.27)),
    ("Rn", 1.20, Some(1.20)),
    ("Fr", 3.48, None),
    ("Ra", 2.83, None),
    ("Ac", 2.23, None),
    ("Th", 2.08, None),
    ("Pa", 2.00, None),
    ("U", 1.96, None),
    ("Np", 1.90, None),
    ("Pu", 1.87, None),
    ("Am", 1.80, None),
    ("Cm", 1.69, None),
    ("Bk", 1.68, None),
    ("Cf", 1.68, None),
    ("Es", 1.65, None),
    ("Fm", 1.67, None),
    ("Md", 1.73, None),
    ("No", 1.76, None),
    ("Lr", 1.61, None),
    ("Rf", 1.57, None),
    ("Db", 1.49, None),
    ("Sg", 1.43, None),
    ("Bh", 1.41, None),
    ("Hs", 1.34, None),
    ("Mt", 1.29, None),
    ("Ds", 1.28, None),
    ("Rg", 1.21, None),
    ("Cn", 1.22, None),
    ("Fl", 1.19, Some(1.19)),
    ("Lv", 1.18, Some(1.18)),
    ("Ts", 1.16, Some(1.16)),
    ("Og", 1.15, Some(1.15)),
];

/// Radius of the hydrogen orbital of the same shape.
pub fn hydrogen_radius(orbital: OrbitalType) -> f64 {
    match orbital {
        OrbitalType::S => 1.0,
        OrbitalType::Px | OrbitalType::Py | OrbitalType::Pz => 2.0,
    }
}

pub fn element_radius(symbol: &str, orbital: OrbitalType) -> Result<f64> {
    ELEMENT_ORBITAL_RADII
        .iter()
        .find(|(sym, _, _)| *sym == symbol)
        .and_then(|&(_, s, p)| if orbital.is_p() { p } else { Some(s) })
        .ok_or_else(|| OrbitalError::MissingRadius {
            symbol: symbol.to_string(),
            orbital,
        })
}

/// Validated element / hydrogen radius ratio.
pub fn scale_factor(hydrogen_radius: f64, element_radius: f64) -> Result<f64> {
    for radius in [hydrogen_radius, element_radius] {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(OrbitalError::InvalidRadius(radius));
        }
    }
    Ok(element_radius / hydrogen_radius)
}

/// Orbitals with a tabulated radius for `symbol`.
pub fn available_orbitals(symbol: &str) -> Vec<OrbitalType> {
    OrbitalType::ALL
        .into_iter()
        .filter(|&o| element_radius(symbol, o).is_ok())
        .collect()
}
