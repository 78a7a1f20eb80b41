//! Local molecular geometry: VSEPR classification, idealized coordination
//! polyhedra, bond lengths and angles, and orbital overlays for one selected
//! atom.

pub mod bonds;
pub mod classify;
pub mod elements;
pub mod error;
pub mod molecule;
pub mod polyhedron;
pub mod scene;

pub use bonds::{analyze, BondAngle, BondGeometry, Label};
pub use classify::{classify, classify_atom, Hybridization, LocalGeometry, MolecularShape};
pub use elements::ElementProperties;
pub use error::{Error, Result};
pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use polyhedron::{build_polyhedron, Polyhedron, PolyhedronKind};
pub use scene::{build_scene, Scene, SceneOptions, Selection};
