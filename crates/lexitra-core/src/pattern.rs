use regex::Regex;
use serde::{Deserialize, Serialize};

/// Where dictionary keys are matched in the input text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchScope {
    /// Match only inside double-quoted spans; quotes are preserved in the
    /// replacement.
    #[default]
    Quoted,
    /// Match the bare key anywhere in the text.
    Anywhere,
}

#[derive(Debug, thiserror::Error)]
#[error("cannot build match pattern for key '{key}': {source}")]
pub struct PatternError {
    pub key: String,
    source: regex::Error,
}

/// Escaped key tokens joined with a one-or-more-whitespace connector, so a
/// multi-word key matches across spacing and newline variations.
fn flexible_body(key: &str) -> String {
    key.split_whitespace()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Compile a dictionary key into its case-insensitive match pattern.
///
/// In [`MatchScope::Quoted`] the pattern anchors on a literal double quote,
/// optional whitespace, the flexible key, optional whitespace, and the
/// closing quote.
pub fn compile_key_pattern(key: &str, scope: MatchScope) -> Result<Regex, PatternError> {
    let body = flexible_body(key);
    let pattern = match scope {
        MatchScope::Quoted => format!(r#"(?i)"\s*{body}\s*""#),
        MatchScope::Anywhere => format!(r"(?i){body}"),
    };

    Regex::new(&pattern).map_err(|source| PatternError {
        key: key.to_string(),
        source,
    })
}
