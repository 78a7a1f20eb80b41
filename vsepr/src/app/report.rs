use tracing::{info, warn};
use vsepr::scene::{free_atom_summary, Scene};
use vsepr::Molecule;

pub fn report_scene(molecule: &Molecule, scene: &Scene) {
    info!("\nGeometry:");
    for atom in molecule.atoms() {
        info!(
            "  Atom {:>2} {:>2}: [{:+.4}, {:+.4}, {:+.4}] bonds = {}",
            atom.index,
            atom.symbol,
            atom.position.x,
            atom.position.y,
            atom.position.z,
            atom.bond_count()
        );
    }

    info!("\nElements:");
    for line in &scene.summary {
        info!("  {}", line);
    }

    report_selection(scene);

    if !scene.length_labels.is_empty() {
        info!("\nBond lengths:");
        for (bond, label) in molecule.bonds().iter().zip(&scene.length_labels) {
            info!("  {:>2} - {:<2} {}", bond.i, bond.j, label.text);
        }
    }

    if !scene.angle_labels.is_empty() {
        info!("\nBond angles:");
        for label in &scene.angle_labels {
            info!("  {}", label.text);
        }
    }
}

pub fn report_free_atoms(molecule: &Molecule, scene: &Scene) {
    info!("\n{} free atoms:", molecule.len());
    for line in free_atom_summary(molecule) {
        info!("  {}", line);
    }
    report_selection(scene);
}

fn report_selection(scene: &Scene) {
    let Some(index) = scene.selected_atom else {
        return;
    };
    let symbol = scene.atoms.get(index).map_or("?", |a| a.symbol.as_str());
    info!("\nSelected atom {} ({})", index, symbol);

    match &scene.geometry {
        Some(geometry) => info!("{}", geometry),
        None => info!("  no bonds, no local geometry"),
    }

    if let Some(polyhedron) = &scene.polyhedron {
        info!(
            "\n{:?} with {} vertices, {} edges:",
            polyhedron.kind,
            polyhedron.vertices.len(),
            polyhedron.edges.len()
        );
        for v in &polyhedron.vertices {
            info!("  [{:+.4}, {:+.4}, {:+.4}]", v.x, v.y, v.z);
        }
    }

    for view in &scene.orbitals {
        let (points, triangles) = view.surfaces.iter().fold((0, 0), |(p, t), s| {
            (p + s.mesh.n_points(), t + s.mesh.n_triangles())
        });
        info!(
            "  {} orbital: {} surfaces, {} points, {} triangles",
            view.orbital,
            view.surfaces.len(),
            points,
            triangles
        );
    }
    for failure in &scene.orbital_errors {
        warn!("  {} orbital not drawn: {}", failure.orbital, failure.message);
    }
}
