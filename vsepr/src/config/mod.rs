//! Configuration for a geometry run
//!
//! The YAML file describes the molecule and what to draw on it. Every
//! tunable is optional; `with_defaults` fills in whatever is missing.

mod args;

pub use args::Args;

use orbital::OrbitalType;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub geometry: Vec<Atom>,
    #[serde(default)]
    pub bonds: Vec<BondConfig>,
    pub selection: Option<SelectionParams>,
    #[serde(default)]
    pub polyhedron: PolyhedronParams,
    #[serde(default)]
    pub labels: LabelParams,
}

/// Atomic position configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct Atom {
    pub element: String,
    pub coords: [f64; 3],
}

/// Bond between two atoms, zero-based indices into `geometry`
#[derive(Debug, Deserialize, Serialize)]
pub struct BondConfig {
    pub atoms: [usize; 2],
    pub order: Option<f64>,
}

/// Which atom to analyze and which orbitals to draw on it
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct SelectionParams {
    pub atom: Option<usize>,
    #[serde(default)]
    pub orbitals: Vec<OrbitalType>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PolyhedronParams {
    pub enabled: Option<bool>,
    pub radius: Option<f64>,
}

impl Default for PolyhedronParams {
    fn default() -> Self {
        PolyhedronParams {
            enabled: Some(true),
            radius: Some(vsepr::polyhedron::DEFAULT_RADIUS),
        }
    }
}

impl PolyhedronParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.radius.is_none() {
            self.radius = defaults.radius;
        }
        self
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LabelParams {
    pub bond_lengths: Option<bool>,
    pub bond_angles: Option<bool>,
    pub angle_offset: Option<f64>,
    pub length_offset: Option<f64>,
}

impl Default for LabelParams {
    fn default() -> Self {
        LabelParams {
            bond_lengths: Some(true),
            bond_angles: Some(true),
            angle_offset: Some(vsepr::bonds::ANGLE_LABEL_OFFSET),
            length_offset: Some(vsepr::bonds::LENGTH_LABEL_OFFSET),
        }
    }
}

impl LabelParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.bond_lengths.is_none() {
            self.bond_lengths = defaults.bond_lengths;
        }
        if self.bond_angles.is_none() {
            self.bond_angles = defaults.bond_angles;
        }
        if self.angle_offset.is_none() {
            self.angle_offset = defaults.angle_offset;
        }
        if self.length_offset.is_none() {
            self.length_offset = defaults.length_offset;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.polyhedron = self.polyhedron.with_defaults();
        self.labels = self.labels.with_defaults();
        self
    }

    /// Selected atom, if the file names one
    pub fn selected_atom(&self) -> Option<usize> {
        self.selection.as_ref().and_then(|s| s.atom)
    }

    /// Orbitals requested in the file
    pub fn orbitals(&self) -> Vec<OrbitalType> {
        self.selection
            .as_ref()
            .map(|s| s.orbitals.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_defaults() {
        let yaml = r#"
geometry:
  - element: O
    coords: [0.0, 0.0, 0.0]
  - element: H
    coords: [0.9572, 0.0, 0.0]
bonds:
  - atoms: [0, 1]
selection:
  atom: 0
  orbitals: [s, pz]
labels:
  bond_angles: false
"#;
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        assert_eq!(config.geometry.len(), 2);
        assert_eq!(config.bonds[0].atoms, [0, 1]);
        assert_eq!(config.bonds[0].order, None);
        assert_eq!(config.selected_atom(), Some(0));
        assert_eq!(config.orbitals(), vec![OrbitalType::S, OrbitalType::Pz]);
        assert_eq!(config.labels.bond_angles, Some(false));
        assert_eq!(config.labels.bond_lengths, Some(true));
        assert_eq!(config.labels.length_offset, Some(0.5));
        assert_eq!(config.polyhedron.enabled, Some(true));
        assert_eq!(config.polyhedron.radius, Some(1.5));
    }

    #[test]
    fn test_empty_config() {
        let config = serde_yml::from_str::<Config>("{}").unwrap().with_defaults();
        assert!(config.geometry.is_empty());
        assert_eq!(config.selected_atom(), None);
        assert!(config.orbitals().is_empty());
    }
}
