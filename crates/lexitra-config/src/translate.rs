use lexitra_core::MatchScope;
use serde::{Deserialize, Serialize};

fn default_extension() -> String {
    "ini".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslateConfig {
    /// Extension of input files selected for translation, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Whether keys match only inside double-quoted spans or anywhere
    #[serde(default)]
    pub scope: MatchScope,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            scope: MatchScope::default(),
        }
    }
}
