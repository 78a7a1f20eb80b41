use color_eyre::eyre::{Result, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;
use vsepr::Scene;

/// Write `scene` as pretty-printed JSON.
pub fn export_scene<P: AsRef<Path>>(path: P, scene: &Scene) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("Unable to create scene file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), scene)
        .wrap_err("Failed to serialize scene")?;
    info!("Scene exported to: {}", path.display());
    Ok(())
}
