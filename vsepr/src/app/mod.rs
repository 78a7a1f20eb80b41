mod geometry;
mod report;

pub use geometry::build_molecule;

use self::report::{report_free_atoms, report_scene};
use crate::config::{Args, Config};
use crate::io::{export_scene, setup_output};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use orbital::{OrbitalCache, OrbitalType};
use std::fs;
use tracing::info;
use vsepr::scene::{self, AtomSizing};
use vsepr::{build_scene, SceneOptions, Selection};

pub struct VseprApplication {
    args: Args,
    config: Config,
}

impl VseprApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = match LayoutMode::determine(&args) {
            // free-atom layouts need no molecule file
            LayoutMode::Molecule => load_config(&args)?,
            _ => Config::default().with_defaults(),
        };
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());

        let mode = LayoutMode::determine(&self.args);
        let molecule = match &mode {
            LayoutMode::Molecule => {
                info!("Reading configuration from: {}", self.args.config_file);
                build_molecule(&self.config)?
            }
            LayoutMode::PeriodicTable => {
                info!("\nLaying out the periodic table...");
                scene::periodic_table_molecule()?
            }
            LayoutMode::AtomRow(symbols) => {
                info!("\nLaying out atoms: {}", symbols.join(" "));
                scene::atom_row_molecule(symbols.as_slice())
                    .ok_or_else(|| eyre!("Unknown element symbol in: {}", symbols.join(" ")))??
            }
        };

        let options = self.scene_options(&mode);
        let selection = self.selection();
        let mut cache = OrbitalCache::new();
        let scene = build_scene(&molecule, selection.as_ref(), &options, &mut cache)
            .wrap_err("Failed to assemble the scene")?;

        match mode {
            LayoutMode::Molecule => report_scene(&molecule, &scene),
            _ => report_free_atoms(&molecule, &scene),
        }

        if let Some(path) = &self.args.export {
            export_scene(path, &scene)?;
        }

        Ok(())
    }

    /// Config values, overridden by whatever was given on the command line
    fn scene_options(&self, mode: &LayoutMode) -> SceneOptions {
        let defaults = SceneOptions::default();
        let polyhedron = &self.config.polyhedron;
        let labels = &self.config.labels;

        SceneOptions {
            polyhedron: !self.args.no_polyhedron && polyhedron.enabled.unwrap_or(defaults.polyhedron),
            polyhedron_radius: self
                .args
                .radius
                .or(polyhedron.radius)
                .unwrap_or(defaults.polyhedron_radius),
            bond_lengths: !self.args.no_bond_lengths
                && labels.bond_lengths.unwrap_or(defaults.bond_lengths),
            bond_angles: !self.args.no_bond_angles
                && labels.bond_angles.unwrap_or(defaults.bond_angles),
            angle_offset: labels.angle_offset.unwrap_or(defaults.angle_offset),
            length_offset: labels.length_offset.unwrap_or(defaults.length_offset),
            sizing: match mode {
                LayoutMode::Molecule => AtomSizing::Bonded,
                _ => AtomSizing::Bare,
            },
        }
    }

    fn selection(&self) -> Option<Selection> {
        let atom = self.args.atom.or(self.config.selected_atom())?;
        let orbitals: Vec<OrbitalType> = if self.args.orbitals.is_empty() {
            self.config.orbitals()
        } else {
            self.args.orbitals.clone()
        };
        Some(Selection { atom, orbitals })
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

enum LayoutMode {
    Molecule,
    PeriodicTable,
    AtomRow(Vec<String>),
}

impl LayoutMode {
    fn determine(args: &Args) -> Self {
        if args.periodic_table {
            LayoutMode::PeriodicTable
        } else if !args.atoms.is_empty() {
            LayoutMode::AtomRow(args.atoms.clone())
        } else {
            LayoutMode::Molecule
        }
    }
}
