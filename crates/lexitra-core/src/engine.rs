use lexitra_dictionary::Dictionary;
use regex::{NoExpand, Regex};

use crate::pattern::{MatchScope, compile_key_pattern};

/// All applied occurrences of one dictionary key within one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionChange {
    pub key: String,
    pub replacement: String,
    pub occurrences: usize,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Plain,
    Quoted,
}

impl From<MatchScope> for MatchKind {
    fn from(scope: MatchScope) -> Self {
        match scope {
            MatchScope::Quoted => MatchKind::Quoted,
            MatchScope::Anywhere => MatchKind::Plain,
        }
    }
}

/// Compiled pattern for a single dictionary entry
struct KeyPattern {
    key: String,
    replacement: String,
    regex: Regex,
}

/// Applies a dictionary to text, replacing every non-overlapping match of
/// each key with its value.
///
/// Patterns are pre-compiled once per dictionary, in key-sorted order. Keys
/// that fail to compile are logged and dropped rather than aborting the
/// text they would have been applied to.
pub struct SubstitutionEngine {
    patterns: Vec<KeyPattern>,
    scope: MatchScope,
}

impl SubstitutionEngine {
    pub fn new(dictionary: &Dictionary, scope: MatchScope) -> Self {
        let mut patterns = Vec::with_capacity(dictionary.len());

        for (key, value) in dictionary.iter() {
            if key.trim().is_empty() {
                tracing::warn!("ignoring blank dictionary key");
                continue;
            }
            match compile_key_pattern(key, scope) {
                Ok(regex) => patterns.push(KeyPattern {
                    key: key.to_string(),
                    replacement: value.to_string(),
                    regex,
                }),
                Err(e) => tracing::warn!("skipping dictionary key: {e}"),
            }
        }

        Self { patterns, scope }
    }

    pub fn key_count(&self) -> usize {
        self.patterns.len()
    }

    /// Apply every key to `text`, in key-sorted order.
    ///
    /// Each key scans the text as mutated by the keys before it. Keys with
    /// zero matches produce no change record. Values are substituted
    /// literally, never interpreted as replacement templates.
    pub fn apply(&self, text: &str) -> (String, Vec<SubstitutionChange>) {
        let mut result = text.to_string();
        let mut changes = Vec::new();

        for pattern in &self.patterns {
            let occurrences = pattern.regex.find_iter(&result).count();
            if occurrences == 0 {
                continue;
            }

            let replacement = match self.scope {
                MatchScope::Quoted => format!("\"{}\"", pattern.replacement),
                MatchScope::Anywhere => pattern.replacement.clone(),
            };

            result = pattern
                .regex
                .replace_all(&result, NoExpand(&replacement))
                .into_owned();

            changes.push(SubstitutionChange {
                key: pattern.key.clone(),
                replacement: pattern.replacement.clone(),
                occurrences,
                kind: self.scope.into(),
            });
        }

        (result, changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(entries: &[(&str, &str)]) -> Dictionary {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_quoted_key_preserving_quotes() {
        let dict = dictionary(&[("Engine Type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (text, changes) = engine.apply(r#"key = "Engine Type""#);

        assert_eq!(text, r#"key = "引擎类型""#);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "Engine Type");
        assert_eq!(changes[0].occurrences, 1);
        assert_eq!(changes[0].kind, MatchKind::Quoted);
    }

    #[test]
    fn whitespace_variations_inside_quotes_collapse() {
        let dict = dictionary(&[("Engine Type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (text, changes) = engine.apply("a = \"Engine   Type\"\nb = \"Engine\nType\"");

        assert_eq!(text, "a = \"引擎类型\"\nb = \"引擎类型\"");
        assert_eq!(changes[0].occurrences, 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let dict = dictionary(&[("engine type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (text, _) = engine.apply(r#"key = "ENGINE TYPE""#);
        assert_eq!(text, r#"key = "引擎类型""#);
    }

    #[test]
    fn unquoted_occurrences_are_ignored_in_quoted_scope() {
        let dict = dictionary(&[("Engine Type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let original = "Engine Type = DEFAULT";
        let (text, changes) = engine.apply(original);

        assert_eq!(text, original);
        assert!(changes.is_empty());
    }

    #[test]
    fn anywhere_scope_replaces_unquoted_occurrences() {
        let dict = dictionary(&[("Engine Type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Anywhere);

        let (text, changes) = engine.apply("Engine Type = DEFAULT");

        assert_eq!(text, "引擎类型 = DEFAULT");
        assert_eq!(changes[0].kind, MatchKind::Plain);
    }

    #[test]
    fn zero_match_keys_emit_no_change() {
        let dict = dictionary(&[("Engine Type", "引擎类型"), ("Idle Speed", "怠速")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (_, changes) = engine.apply(r#"key = "Idle Speed""#);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "Idle Speed");
    }

    #[test]
    fn counts_all_non_overlapping_occurrences() {
        let dict = dictionary(&[("On", "开")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (text, changes) = engine.apply(r#"a = "On"; b = "on"; c = "ON""#);

        assert_eq!(text, r#"a = "开"; b = "开"; c = "开""#);
        assert_eq!(changes[0].occurrences, 3);
    }

    #[test]
    fn keys_apply_in_sorted_order_over_mutated_text() {
        // "Engine" sorts before "Engine Type"; after the shorter key fires,
        // the longer key no longer finds its span.
        let dict = dictionary(&[("Engine", "发动机"), ("Engine Type", "引擎类型")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Anywhere);

        let (text, changes) = engine.apply("Engine Type");

        assert_eq!(text, "发动机 Type");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "Engine");
    }

    #[test]
    fn values_are_substituted_literally() {
        let dict = dictionary(&[("Cost", "$100 ${a}")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let (text, _) = engine.apply(r#"x = "Cost""#);
        assert_eq!(text, r#"x = "$100 ${a}""#);
    }

    #[test]
    fn apply_is_deterministic() {
        let dict = dictionary(&[("Engine Type", "引擎类型"), ("Idle Speed", "怠速")]);
        let engine = SubstitutionEngine::new(&dict, MatchScope::Quoted);

        let input = "a = \"Engine Type\"\nb = \"Idle Speed\"\n";
        let first = engine.apply(input);
        let second = engine.apply(input);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_dictionary_returns_text_unchanged() {
        let engine = SubstitutionEngine::new(&Dictionary::new(), MatchScope::Quoted);

        let (text, changes) = engine.apply(r#"key = "Engine Type""#);
        assert_eq!(text, r#"key = "Engine Type""#);
        assert!(changes.is_empty());
    }
}
