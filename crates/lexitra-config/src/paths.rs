use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input_dir() -> PathBuf {
    PathBuf::from("input")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("export")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("backup")
}

fn default_dictionary_file() -> PathBuf {
    PathBuf::from("translations.json")
}

fn default_key_table_file() -> PathBuf {
    PathBuf::from("key.csv")
}

/// Workspace layout for a translation run
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
    #[serde(default = "default_dictionary_file")]
    pub dictionary_file: PathBuf,
    /// Tabular source of new dictionary entries; optional at run time
    #[serde(default = "default_key_table_file")]
    pub key_table_file: PathBuf,
}

impl PathsConfig {
    /// Defaults with `LEXITRA_*` environment overrides applied
    pub fn new() -> Self {
        let mut paths = Self::default();

        if let Ok(v) = env::var("LEXITRA_INPUT_DIR") {
            paths.input_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("LEXITRA_EXPORT_DIR") {
            paths.export_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("LEXITRA_BACKUP_DIR") {
            paths.backup_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("LEXITRA_DICTIONARY") {
            paths.dictionary_file = PathBuf::from(v);
        }
        if let Ok(v) = env::var("LEXITRA_KEY_TABLE") {
            paths.key_table_file = PathBuf::from(v);
        }

        paths
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            export_dir: default_export_dir(),
            backup_dir: default_backup_dir(),
            dictionary_file: default_dictionary_file(),
            key_table_file: default_key_table_file(),
        }
    }
}
