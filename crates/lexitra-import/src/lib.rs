//! CSV key-table import.
//!
//! Extracts raw (key, value) candidate pairs from a tabular file. Columns
//! are resolved by recognized header names, falling back to the first two
//! columns positionally. Blank rows are yielded as-is; classifying and
//! skipping them is the merger's job, so the skip count surfaces in the
//! merge report.

use std::path::{Path, PathBuf};

/// Lowercased headers recognized as the key column, in priority order
const KEY_HEADERS: &[&str] = &["key", "keys", "english", "en", "source", "英文", "键"];

/// Lowercased headers recognized as the value column, in priority order
const VALUE_HEADERS: &[&str] = &["value", "translation", "chinese", "zh", "target", "中文", "值"];

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("key table not found: {0}")]
    NotFound(PathBuf),

    #[error("malformed key table: {0}")]
    Malformed(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How the key and value columns were identified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Both columns resolved by recognized header names
    Named { key: usize, value: usize },
    /// No recognized headers; first column is key, second is value
    Positional,
}

impl ColumnLayout {
    fn columns(self) -> (usize, usize) {
        match self {
            ColumnLayout::Named { key, value } => (key, value),
            ColumnLayout::Positional => (0, 1),
        }
    }
}

fn find_column(headers: &csv::StringRecord, synonyms: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        synonyms.iter().any(|synonym| header == *synonym)
    })
}

/// Decide the column strategy from the header row
pub fn resolve_columns(headers: &csv::StringRecord) -> ColumnLayout {
    match (
        find_column(headers, KEY_HEADERS),
        find_column(headers, VALUE_HEADERS),
    ) {
        (Some(key), Some(value)) => ColumnLayout::Named { key, value },
        _ => ColumnLayout::Positional,
    }
}

/// Read every data row of the table as one trimmed (key, value) pair, in
/// original row order. The first record is always the header row and never
/// yields a pair; cells missing from short rows read as empty.
pub fn import_pairs(path: &Path) -> Result<Vec<(String, String)>, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let layout = resolve_columns(reader.headers()?);
    tracing::debug!("key table column layout: {:?}", layout);
    let (key_column, value_column) = layout.columns();

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let key = record.get(key_column).unwrap_or("").trim().to_string();
        let value = record.get(value_column).unwrap_or("").trim().to_string();
        pairs.push((key, value));
    }

    tracing::info!(
        "imported {} candidate pairs from {}",
        pairs.len(),
        path.display()
    );

    Ok(pairs)
}
