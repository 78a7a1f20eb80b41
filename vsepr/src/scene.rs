//! Everything a renderer needs for one molecule and one atom selection.

use crate::bonds::{self, Label, ANGLE_LABEL_OFFSET, LENGTH_LABEL_OFFSET};
use crate::classify::{classify_atom, LocalGeometry};
use crate::elements;
use crate::error::Result;
use crate::molecule::Molecule;
use crate::polyhedron::{self, build_polyhedron, PolyhedronKind};
use nalgebra::Vector3;
use orbital::radii::{element_radius, hydrogen_radius};
use orbital::{Mesh, OrbitalCache, OrbitalType, Phase, Shell};
use serde::Serialize;
use tracing::{info, warn};

/// Opacity of the selected atom's sphere, so its orbitals show through.
const SELECTED_ATOM_OPACITY: f64 = 0.2;
/// Nucleus marker radius as a fraction of the element radius.
const NUCLEUS_FRACTION: f64 = 1.0 / 6.0;
const NUCLEUS_COLOR: &str = "#FF3333";
/// Element radius assumed for the nucleus marker of an unknown element.
const FALLBACK_NUCLEUS_RADIUS: f64 = 0.53;

/// How atom spheres are sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomSizing {
    /// Shrunk radii for ball-and-stick molecules.
    #[default]
    Bonded,
    /// Full element radius, for free atoms.
    Bare,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub polyhedron: bool,
    pub polyhedron_radius: f64,
    pub bond_lengths: bool,
    pub bond_angles: bool,
    pub angle_offset: f64,
    pub length_offset: f64,
    pub sizing: AtomSizing,
}

impl Default for SceneOptions {
    fn default() -> Self {
        SceneOptions {
            polyhedron: true,
            polyhedron_radius: polyhedron::DEFAULT_RADIUS,
            bond_lengths: true,
            bond_angles: true,
            angle_offset: ANGLE_LABEL_OFFSET,
            length_offset: LENGTH_LABEL_OFFSET,
            sizing: AtomSizing::Bonded,
        }
    }
}

/// The atom the user picked and the orbitals to draw on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub atom: usize,
    pub orbitals: Vec<OrbitalType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomView {
    pub index: usize,
    pub symbol: String,
    pub position: Vector3<f64>,
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondView {
    pub i: usize,
    pub j: usize,
    pub order: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nucleus {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyhedronView {
    pub kind: PolyhedronKind,
    pub vertices: Vec<Vector3<f64>>,
    pub edges: Vec<[usize; 2]>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceView {
    pub level: f64,
    pub phase: Phase,
    pub shell: Shell,
    pub color: &'static str,
    pub opacity: f64,
    pub mesh: Mesh,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalView {
    pub orbital: OrbitalType,
    pub surfaces: Vec<SurfaceView>,
}

/// An orbital that could not be drawn, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalFailure {
    pub orbital: OrbitalType,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub atoms: Vec<AtomView>,
    pub bonds: Vec<BondView>,
    /// Per-element property lines.
    pub summary: Vec<String>,
    pub selected_atom: Option<usize>,
    pub geometry: Option<LocalGeometry>,
    pub nucleus: Option<Nucleus>,
    pub polyhedron: Option<PolyhedronView>,
    pub orbitals: Vec<OrbitalView>,
    pub orbital_errors: Vec<OrbitalFailure>,
    pub length_labels: Vec<Label>,
    pub angle_labels: Vec<Label>,
}

/// Assemble the scene for `molecule`.
///
/// Orbital lookups that fail are collected in [`Scene::orbital_errors`]; an
/// out-of-range selection is an error.
pub fn build_scene(
    molecule: &Molecule,
    selection: Option<&Selection>,
    options: &SceneOptions,
    cache: &mut OrbitalCache,
) -> Result<Scene> {
    let selected = match selection {
        Some(sel) => Some(molecule.atom(sel.atom)?.index),
        None => None,
    };

    let mut scene = Scene {
        atoms: atom_views(molecule, options.sizing, selected),
        bonds: molecule
            .bonds()
            .iter()
            .map(|b| BondView {
                i: b.i,
                j: b.j,
                order: b.order.as_u8(),
                color: b.order.display_color(),
            })
            .collect(),
        summary: molecule.atom_summary(),
        selected_atom: selected,
        ..Scene::default()
    };

    if let Some(sel) = selection {
        select_atom(&mut scene, molecule, sel, options, cache)?;
    }

    if options.bond_lengths || options.bond_angles {
        let geometry = bonds::analyze_with_offset(molecule, options.angle_offset);
        if options.bond_lengths {
            scene.length_labels = bonds::length_labels(molecule, &geometry, options.length_offset);
        }
        if options.bond_angles {
            scene.angle_labels = bonds::angle_labels(&geometry);
        }
    }

    Ok(scene)
}

fn atom_views(molecule: &Molecule, sizing: AtomSizing, selected: Option<usize>) -> Vec<AtomView> {
    molecule
        .atoms()
        .iter()
        .map(|atom| {
            let (display_radius, color) = elements::display_style(&atom.symbol);
            let radius = match sizing {
                AtomSizing::Bonded => display_radius,
                AtomSizing::Bare => {
                    elements::lookup(&atom.symbol).map_or(elements::DEFAULT_RADIUS, |p| p.radius)
                }
            };
            AtomView {
                index: atom.index,
                symbol: atom.symbol.clone(),
                position: atom.position,
                radius,
                color,
                opacity: if selected == Some(atom.index) {
                    SELECTED_ATOM_OPACITY
                } else {
                    1.0
                },
            }
        })
        .collect()
}

fn select_atom(
    scene: &mut Scene,
    molecule: &Molecule,
    selection: &Selection,
    options: &SceneOptions,
    cache: &mut OrbitalCache,
) -> Result<()> {
    let atom = molecule.atom(selection.atom)?;

    let element_r = elements::lookup(&atom.symbol).map_or(FALLBACK_NUCLEUS_RADIUS, |p| p.radius);
    scene.nucleus = Some(Nucleus {
        center: atom.position,
        radius: element_r * NUCLEUS_FRACTION,
        color: NUCLEUS_COLOR,
    });

    scene.geometry = classify_atom(molecule, atom.index)?;
    if let Some(geometry) = &scene.geometry {
        info!("atom {} ({}):\n{}", atom.index, atom.symbol, geometry);
        if options.polyhedron {
            let neighbors = molecule.neighbor_positions(atom.index)?;
            scene.polyhedron = build_polyhedron(
                geometry.steric_number,
                &atom.position,
                &neighbors,
                options.polyhedron_radius,
            )
            .map(|p| PolyhedronView {
                kind: p.kind,
                edges: p.edges(),
                vertices: p.vertices,
                color: polyhedron::EDGE_COLOR,
            });
        }
    }

    for &orbital in &selection.orbitals {
        let surfaces = element_radius(&atom.symbol, orbital)
            .and_then(|r| cache.get_or_generate(orbital, hydrogen_radius(orbital), r));
        match surfaces {
            Ok(surfaces) => scene.orbitals.push(OrbitalView {
                orbital,
                surfaces: surfaces
                    .iter()
                    .map(|s| SurfaceView {
                        level: s.level,
                        phase: s.phase,
                        shell: s.shell,
                        color: s.phase.display_color(),
                        opacity: s.opacity(),
                        mesh: s.mesh.translated(&atom.position),
                    })
                    .collect(),
            }),
            Err(e) => {
                warn!("skipping {} orbital on {}: {}", orbital, atom.symbol, e);
                scene.orbital_errors.push(OrbitalFailure {
                    orbital,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Free atoms on the drawn periodic table.
pub fn periodic_table_molecule() -> Result<Molecule> {
    Molecule::new(&elements::periodic_layout(), Vec::new())
}

/// Free atoms in a row, one per symbol. `None` if a symbol is unknown.
pub fn atom_row_molecule<S: AsRef<str>>(symbols: &[S]) -> Option<Result<Molecule>> {
    elements::row_layout(symbols).map(|row| Molecule::new(&row, Vec::new()))
}

/// Property line for every atom, in atom order, for free-atom scenes.
pub fn free_atom_summary(molecule: &Molecule) -> Vec<String> {
    molecule
        .atoms()
        .iter()
        .map(|a| match elements::lookup(&a.symbol) {
            Some(props) => format!("{}: {}", a.symbol, props.property_line()),
            None => format!("{}: ?", a.symbol),
        })
        .collect()
}
