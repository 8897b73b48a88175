use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Key→value translation mapping.
///
/// Backed by a `BTreeMap`, so keys are unique and iteration is always
/// lexicographic by key. The persisted form inherits both properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the previous value for the key if any
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.entries.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key-sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid dictionary format: {0}")]
    InvalidFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads and persists a [`Dictionary`] at a fixed path.
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the dictionary, validating that the document is a flat
    /// string→string object.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        if !self.path.exists() {
            return Err(DictionaryError::FileNotFound(self.path.clone()));
        }

        let data = fs::read_to_string(&self.path)?;
        let document: serde_json::Value = serde_json::from_str(&data)?;

        let object = document.as_object().ok_or_else(|| {
            DictionaryError::InvalidFormat("top level must be an object".to_string())
        })?;

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let value = value.as_str().ok_or_else(|| {
                DictionaryError::InvalidFormat(format!("value for key '{key}' must be a string"))
            })?;
            entries.insert(key.clone(), value.to_string());
        }

        tracing::info!(
            "loaded {} dictionary entries from {}",
            entries.len(),
            self.path.display()
        );

        Ok(Dictionary { entries })
    }

    /// Persist the dictionary as pretty-printed JSON, key-sorted.
    ///
    /// Writes to a temp file in the destination's directory and renames it
    /// over the destination, so a failed save never truncates an existing
    /// dictionary.
    pub fn save(&self, dictionary: &Dictionary) -> Result<(), DictionaryError> {
        let json = dictionary.to_pretty_json()?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.write_all(b"\n")?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        tracing::info!(
            "saved {} dictionary entries to {}",
            dictionary.len(),
            self.path.display()
        );

        Ok(())
    }
}
