use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lexitra_config::Config;

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "lexitra.json";

/// Load the config file if present, else defaults with env overrides
pub fn load_config() -> anyhow::Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    } else {
        Ok(Config::new())
    }
}

/// Clear and recreate the backup directory, then copy every regular file of
/// `input_dir` into it verbatim. Runs before any output is written, so the
/// originals survive a partial batch.
pub fn backup_input(input_dir: &Path, backup_dir: &Path) -> anyhow::Result<usize> {
    if backup_dir.exists() {
        fs::remove_dir_all(backup_dir)?;
    }
    fs::create_dir_all(backup_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            fs::copy(&path, backup_dir.join(entry.file_name()))?;
            copied += 1;
        }
    }

    tracing::info!("backed up {} files to {}", copied, backup_dir.display());
    Ok(copied)
}

/// Input files with the given extension, in sorted name order
pub fn collect_input_files(input_dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
