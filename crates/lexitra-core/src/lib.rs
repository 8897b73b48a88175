pub mod batch;
pub mod engine;
pub mod pattern;

pub use batch::{BatchTranslator, FileJob, FileOutcome, RunStats};
pub use engine::{MatchKind, SubstitutionChange, SubstitutionEngine};
pub use pattern::{MatchScope, PatternError, compile_key_pattern};
