use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::engine::{SubstitutionChange, SubstitutionEngine};

/// One input file and where its translated copy goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Result of translating a single file
#[derive(Debug)]
pub enum FileOutcome {
    Translated {
        input: PathBuf,
        changes: Vec<SubstitutionChange>,
        replacements: usize,
    },
    Failed {
        input: PathBuf,
        error: io::Error,
    },
}

/// Aggregate statistics for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_total: usize,
    pub files_succeeded: usize,
    pub files_failed: usize,
    pub total_replacements: usize,
    pub elapsed_ms: u64,
}

/// Runs the substitution engine over a set of files, one at a time.
///
/// Files are independent units: a read or write failure marks that file
/// failed and the batch moves on. Outcomes are immutable per-file records
/// folded into [`RunStats`] at the end.
pub struct BatchTranslator<'a> {
    engine: &'a SubstitutionEngine,
}

impl<'a> BatchTranslator<'a> {
    pub fn new(engine: &'a SubstitutionEngine) -> Self {
        Self { engine }
    }

    pub fn run(&self, jobs: &[FileJob]) -> (RunStats, Vec<FileOutcome>) {
        let started = Instant::now();

        let outcomes: Vec<FileOutcome> = jobs
            .iter()
            .map(|job| self.translate_file(&job.input, &job.output))
            .collect();

        let mut stats = RunStats {
            files_total: jobs.len(),
            ..RunStats::default()
        };
        for outcome in &outcomes {
            match outcome {
                FileOutcome::Translated { replacements, .. } => {
                    stats.files_succeeded += 1;
                    stats.total_replacements += replacements;
                }
                FileOutcome::Failed { .. } => stats.files_failed += 1,
            }
        }
        stats.elapsed_ms = started.elapsed().as_millis() as u64;

        (stats, outcomes)
    }

    fn translate_file(&self, input: &Path, output: &Path) -> FileOutcome {
        match self.try_translate(input, output) {
            Ok(changes) => {
                let replacements = changes.iter().map(|c| c.occurrences).sum();
                tracing::info!("{}: {} replacements", input.display(), replacements);
                for change in &changes {
                    tracing::debug!(
                        "  '{}' -> '{}' ({}x)",
                        change.key,
                        change.replacement,
                        change.occurrences
                    );
                }
                FileOutcome::Translated {
                    input: input.to_path_buf(),
                    changes,
                    replacements,
                }
            }
            Err(error) => {
                tracing::error!("failed to translate {}: {}", input.display(), error);
                FileOutcome::Failed {
                    input: input.to_path_buf(),
                    error,
                }
            }
        }
    }

    fn try_translate(&self, input: &Path, output: &Path) -> io::Result<Vec<SubstitutionChange>> {
        let content = fs::read_to_string(input)?;
        let (translated, changes) = self.engine.apply(&content);
        fs::write(output, translated)?;
        Ok(changes)
    }
}
