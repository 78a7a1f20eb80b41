use crate::config::Config;
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::Vector3;
use tracing::info;
use vsepr::{Bond, Molecule};

/// Build the molecule described in the YAML configuration.
pub fn build_molecule(config: &Config) -> Result<Molecule> {
    info!("\nPreparing geometry...");

    if config.geometry.is_empty() {
        return Err(eyre!("Configuration has no geometry"));
    }

    let atoms: Vec<(&str, Vector3<f64>)> = config
        .geometry
        .iter()
        .map(|atom| (atom.element.as_str(), Vector3::from(atom.coords)))
        .collect();

    let bonds = config
        .bonds
        .iter()
        .map(|bond| {
            let [i, j] = bond.atoms;
            Bond::new(i, j, bond.order.unwrap_or(1.0))
                .wrap_err_with(|| format!("Invalid bond between atoms {} and {}", i, j))
        })
        .collect::<Result<Vec<_>>>()?;

    let molecule = Molecule::new(&atoms, bonds).wrap_err("Invalid molecule in configuration")?;
    info!(
        "Loaded {} atoms and {} bonds",
        molecule.len(),
        molecule.bonds().len()
    );

    Ok(molecule)
}
