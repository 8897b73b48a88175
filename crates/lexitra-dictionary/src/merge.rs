use crate::store::Dictionary;

/// How an imported row related to the existing dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Added,
    Updated,
    Unchanged,
    Skipped,
}

/// One imported row's classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: String,
    pub outcome: MergeOutcome,
}

/// Counts and per-row detail for a single merge invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub records: Vec<MergeRecord>,
}

impl MergeReport {
    fn push(&mut self, record: MergeRecord) {
        match record.outcome {
            MergeOutcome::Added => self.added += 1,
            MergeOutcome::Updated => self.updated += 1,
            MergeOutcome::Unchanged => self.unchanged += 1,
            MergeOutcome::Skipped => self.skipped += 1,
        }
        self.records.push(record);
    }

    /// Number of rows that changed the dictionary
    pub fn changed(&self) -> usize {
        self.added + self.updated
    }
}

/// Reconcile `existing` with imported (key, value) pairs.
///
/// Keys and values are trimmed; rows blank on either side are skipped.
/// Imported entries win on key collision, and a duplicate key within the
/// import is last-write-wins. Classification of every row is computed
/// against the original `existing` dictionary, never against intermediate
/// merge state, so the report is independent of import order for distinct
/// keys.
pub fn merge(
    existing: &Dictionary,
    imported: impl IntoIterator<Item = (String, String)>,
) -> (Dictionary, MergeReport) {
    let mut merged = existing.clone();
    let mut report = MergeReport::default();

    for (raw_key, raw_value) in imported {
        let key = raw_key.trim();
        let value = raw_value.trim();

        if key.is_empty() || value.is_empty() {
            report.push(MergeRecord {
                key: key.to_string(),
                old_value: None,
                new_value: value.to_string(),
                outcome: MergeOutcome::Skipped,
            });
            continue;
        }

        let old_value = existing.get(key);
        let outcome = match old_value {
            None => MergeOutcome::Added,
            Some(old) if old == value => MergeOutcome::Unchanged,
            Some(_) => MergeOutcome::Updated,
        };

        report.push(MergeRecord {
            key: key.to_string(),
            old_value: old_value.map(str::to_string),
            new_value: value.to_string(),
            outcome,
        });

        merged.insert(key.to_string(), value.to_string());
    }

    (merged, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, &str)]) -> Dictionary {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pairs(rows: &[(&str, &str)]) -> Vec<(String, String)> {
        rows.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn update_and_add_against_existing() {
        let existing = dict(&[("A", "1")]);
        let (merged, report) = merge(&existing, pairs(&[("A", "2"), ("B", "3")]));

        assert_eq!(merged, dict(&[("A", "2"), ("B", "3")]));
        assert_eq!(report.updated, 1);
        assert_eq!(report.added, 1);
        assert_eq!(report.unchanged, 0);
        assert_eq!(report.skipped, 0);

        assert_eq!(report.records[0].key, "A");
        assert_eq!(report.records[0].old_value.as_deref(), Some("1"));
        assert_eq!(report.records[0].outcome, MergeOutcome::Updated);
        assert_eq!(report.records[1].outcome, MergeOutcome::Added);
    }

    #[test]
    fn merge_is_idempotent() {
        let existing = dict(&[("A", "1")]);
        let imported = pairs(&[("A", "2"), ("B", "3")]);

        let (first, _) = merge(&existing, imported.clone());
        let (second, report) = merge(&first, imported);

        assert_eq!(second, first);
        assert_eq!(report.added, 0);
        assert_eq!(report.updated, 0);
        assert_eq!(report.unchanged, 2);
    }

    #[test]
    fn existing_keys_survive_when_absent_from_import() {
        let existing = dict(&[("A", "1"), ("B", "2")]);
        let (merged, _) = merge(&existing, pairs(&[("C", "3")]));

        assert_eq!(merged, dict(&[("A", "1"), ("B", "2"), ("C", "3")]));
    }

    #[test]
    fn import_order_does_not_affect_result_for_distinct_keys() {
        let existing = dict(&[("A", "1")]);

        let (forward, forward_report) = merge(&existing, pairs(&[("B", "2"), ("C", "3")]));
        let (reverse, reverse_report) = merge(&existing, pairs(&[("C", "3"), ("B", "2")]));

        assert_eq!(forward, reverse);
        assert_eq!(forward_report.added, reverse_report.added);
    }

    #[test]
    fn duplicate_imported_key_is_last_write_wins() {
        let existing = Dictionary::new();
        let (merged, report) = merge(&existing, pairs(&[("A", "first"), ("A", "second")]));

        assert_eq!(merged.get("A"), Some("second"));
        // Both rows classify against the original dictionary
        assert_eq!(report.added, 2);
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn blank_key_or_value_is_skipped() {
        let existing = dict(&[("A", "1")]);
        let (merged, report) = merge(
            &existing,
            pairs(&[("  ", "x"), ("B", "   "), ("C", "3")]),
        );

        assert_eq!(merged, dict(&[("A", "1"), ("C", "3")]));
        assert_eq!(report.skipped, 2);
        assert_eq!(report.added, 1);
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let existing = Dictionary::new();
        let (merged, report) = merge(&existing, pairs(&[("  Engine Type  ", " 引擎类型 ")]));

        assert_eq!(merged.get("Engine Type"), Some("引擎类型"));
        assert_eq!(report.added, 1);
    }

    #[test]
    fn unchanged_value_is_classified_unchanged() {
        let existing = dict(&[("A", "1")]);
        let (merged, report) = merge(&existing, pairs(&[("A", "1")]));

        assert_eq!(merged, existing);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.changed(), 0);
    }
}
