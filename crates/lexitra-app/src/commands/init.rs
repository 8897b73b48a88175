use std::fs;

use lexitra_dictionary::{Dictionary, DictionaryStore};

use crate::workspace;

const EXAMPLE_INI: &str = r#"[Engine]
label = "Engine Type"
launch = "Launch Control Enabled"
cranking = "Cranking RPM"

[Controls]
idle = "Idle Speed"
timing = "Injection Timing"
"#;

const EXAMPLE_KEY_TABLE: &str = "key,value\n\
Coolant Temperature,冷却液温度\n\
MAP Sensor,进气压力传感器\n";

fn starter_dictionary() -> Dictionary {
    [
        ("Engine Type", "引擎类型"),
        ("Launch Control Enabled", "启动控制已启用"),
        ("Cranking RPM", "启动转速"),
        ("Idle Speed", "怠速"),
        ("Injection Timing", "喷油正时"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Create the workspace directories and starter files, leaving anything
/// that already exists untouched.
pub fn init() -> anyhow::Result<()> {
    let config = workspace::load_config()?;

    for dir in [
        &config.paths.input_dir,
        &config.paths.export_dir,
        &config.paths.backup_dir,
    ] {
        if dir.exists() {
            tracing::info!("directory already exists: {}", dir.display());
        } else {
            fs::create_dir_all(dir)?;
            tracing::info!("created directory: {}", dir.display());
        }
    }

    let store = DictionaryStore::new(&config.paths.dictionary_file);
    if store.exists() {
        tracing::info!("dictionary already exists: {}", store.path().display());
    } else {
        store.save(&starter_dictionary())?;
        tracing::info!("created starter dictionary: {}", store.path().display());
    }

    let example = config.paths.input_dir.join("example.ini");
    if !example.exists() {
        fs::write(&example, EXAMPLE_INI)?;
        tracing::info!("created example input: {}", example.display());
    }

    let key_table = &config.paths.key_table_file;
    if !key_table.exists() {
        fs::write(key_table, EXAMPLE_KEY_TABLE)?;
        tracing::info!("created example key table: {}", key_table.display());
    }

    Ok(())
}
