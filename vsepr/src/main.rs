//! VSEPR geometry command-line interface
//!
//! Reads a molecule from YAML, classifies the selected atom and reports the
//! scene: polyhedron, bond labels and orbital isosurfaces.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::VseprApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    VseprApplication::from_cli()?.run()
}
