//! Command-line argument parsing

use clap::Parser;
use orbital::OrbitalType;

/// VSEPR geometry, polyhedra and orbital isosurfaces from a YAML molecule
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the assembled scene as JSON
    #[arg(short, long)]
    pub export: Option<String>,

    /// Override the selected atom (zero-based)
    #[arg(long)]
    pub atom: Option<usize>,

    /// Orbital to draw on the selected atom (s, px, py, pz); repeatable
    #[arg(long = "orbital")]
    pub orbitals: Vec<OrbitalType>,

    /// Override the polyhedron circumradius
    #[arg(long)]
    pub radius: Option<f64>,

    /// Do not build the idealized polyhedron
    #[arg(long)]
    pub no_polyhedron: bool,

    /// Do not label bond lengths
    #[arg(long)]
    pub no_bond_lengths: bool,

    /// Do not label bond angles
    #[arg(long)]
    pub no_bond_angles: bool,

    /// Lay out the whole periodic table instead of reading a molecule
    #[arg(long, conflicts_with = "atoms")]
    pub periodic_table: bool,

    /// Lay out free atoms in a row instead of reading a molecule
    #[arg(long, num_args = 1..)]
    pub atoms: Vec<String>,
}
