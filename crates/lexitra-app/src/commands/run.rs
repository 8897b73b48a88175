use std::fs;
use std::path::PathBuf;

use clap::Args;
use lexitra_core::{BatchTranslator, FileJob, SubstitutionEngine};
use lexitra_dictionary::{Dictionary, DictionaryError, DictionaryStore, MergeOutcome, merge};
use lexitra_import::{ImportError, import_pairs};

use crate::workspace;

#[derive(Args)]
pub struct RunArgs {
    /// Input directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Backup directory
    #[arg(short, long)]
    pub backup: Option<PathBuf>,

    /// Dictionary file
    #[arg(short, long)]
    pub translations: Option<PathBuf>,

    /// Key table (CSV) with new dictionary entries
    #[arg(short, long)]
    pub key_table: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = workspace::load_config()?;

    let input_dir = args.input.unwrap_or_else(|| config.paths.input_dir.clone());
    let export_dir = args.output.unwrap_or_else(|| config.paths.export_dir.clone());
    let backup_dir = args.backup.unwrap_or_else(|| config.paths.backup_dir.clone());
    let dictionary_file = args
        .translations
        .unwrap_or_else(|| config.paths.dictionary_file.clone());
    let key_table = args
        .key_table
        .unwrap_or_else(|| config.paths.key_table_file.clone());

    // The key table is optional: without it the merge is skipped and the
    // persisted dictionary drives the run on its own.
    let imported = match import_pairs(&key_table) {
        Ok(pairs) => Some(pairs),
        Err(ImportError::NotFound(path)) => {
            tracing::info!("no key table at {}, skipping merge", path.display());
            None
        }
        Err(e) => return Err(e.into()),
    };

    let store = DictionaryStore::new(&dictionary_file);
    let dictionary = match store.load() {
        Ok(dictionary) => dictionary,
        Err(DictionaryError::FileNotFound(path)) if imported.is_some() => {
            tracing::info!("no dictionary at {}, starting empty", path.display());
            Dictionary::new()
        }
        Err(e) => return Err(e.into()),
    };

    let dictionary = match imported {
        Some(pairs) => {
            let (merged, report) = merge(&dictionary, pairs);
            tracing::info!(
                "merged key table: {} added, {} updated, {} unchanged, {} skipped",
                report.added,
                report.updated,
                report.unchanged,
                report.skipped
            );
            for record in &report.records {
                match record.outcome {
                    MergeOutcome::Added => {
                        tracing::debug!("  added '{}' = '{}'", record.key, record.new_value)
                    }
                    MergeOutcome::Updated => tracing::debug!(
                        "  updated '{}': '{}' -> '{}'",
                        record.key,
                        record.old_value.as_deref().unwrap_or(""),
                        record.new_value
                    ),
                    MergeOutcome::Unchanged | MergeOutcome::Skipped => {}
                }
            }
            store.save(&merged)?;
            merged
        }
        None => dictionary,
    };

    if dictionary.is_empty() {
        tracing::warn!("dictionary is empty; output will be identical to input");
    }

    anyhow::ensure!(
        input_dir.is_dir(),
        "input directory not found: {}",
        input_dir.display()
    );

    workspace::backup_input(&input_dir, &backup_dir)?;
    fs::create_dir_all(&export_dir)?;

    let files = workspace::collect_input_files(&input_dir, &config.translate.extension)?;
    if files.is_empty() {
        tracing::warn!(
            "no .{} files in {}",
            config.translate.extension,
            input_dir.display()
        );
        return Ok(());
    }

    tracing::info!(
        "translating {} files from {} to {}",
        files.len(),
        input_dir.display(),
        export_dir.display()
    );

    let engine = SubstitutionEngine::new(&dictionary, config.translate.scope);
    let jobs: Vec<FileJob> = files
        .iter()
        .filter_map(|input| {
            let name = input.file_name()?;
            Some(FileJob {
                input: input.clone(),
                output: export_dir.join(name),
            })
        })
        .collect();

    let (stats, _outcomes) = BatchTranslator::new(&engine).run(&jobs);

    tracing::info!(
        "done: {}/{} files translated, {} failed, {} replacements in {} ms",
        stats.files_succeeded,
        stats.files_total,
        stats.files_failed,
        stats.total_replacements,
        stats.elapsed_ms
    );

    Ok(())
}
