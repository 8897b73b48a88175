use serde::{Deserialize, Serialize};

use self::paths::PathsConfig;
use self::translate::TranslateConfig;

pub mod paths;
pub mod translate;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub translate: TranslateConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            paths: PathsConfig::new(),
            translate: TranslateConfig::default(),
        }
    }
}
