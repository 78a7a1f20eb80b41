//! Hydrogen-like atomic orbitals sampled on a cubic grid, and the nested
//! signed isosurfaces extracted from them for display.

pub mod cache;
pub mod error;
pub mod grid;
pub(crate) mod helper;
pub mod isosurface;
pub mod orbital;
pub mod radii;
pub mod sample;
pub mod shells;

pub use cache::OrbitalCache;
pub use error::{OrbitalError, Result};
pub use grid::ScalarGrid;
pub use isosurface::Mesh;
pub use orbital::{HydrogenOrbital, OrbitalType, QuantumNumbers};
pub use sample::{generate, generate_for_element, OrbitalSample};
pub use shells::{Isosurface, Phase, Shell};
