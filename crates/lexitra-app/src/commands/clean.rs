use std::fs;

use crate::workspace;

/// Remove the export and backup directories. Input and dictionary are
/// never touched.
pub fn clean() -> anyhow::Result<()> {
    let config = workspace::load_config()?;

    for dir in [&config.paths.export_dir, &config.paths.backup_dir] {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
            tracing::info!("removed {}", dir.display());
        } else {
            tracing::info!("directory not present: {}", dir.display());
        }
    }

    Ok(())
}
