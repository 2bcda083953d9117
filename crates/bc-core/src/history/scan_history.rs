use chrono::{NaiveDate, TimeZone};

use super::grouping::{group_by_day, HistoryGroup};
use crate::ids::ScanId;
use crate::scan::ScanRecord;

/// Ordered collection of scan records without duplicate `(content, kind)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanHistory {
    records: Vec<ScanRecord>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_duplicate_of(&self, record: &ScanRecord) -> bool {
        let key = record.dedupe_key();
        self.records.iter().any(|r| r.dedupe_key() == key)
    }

    /// Append `record` unless a record with the same `(content, kind)` exists.
    ///
    /// Returns whether the record was inserted.
    pub fn append(&mut self, record: ScanRecord) -> bool {
        if self.contains_duplicate_of(&record) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove the records at `indices` of a display group.
    ///
    /// Each selected record is matched back to the backing sequence by its
    /// dedupe key; the first match is removed. Indices outside `group` are
    /// skipped. Returns the number of removed records.
    pub fn remove_at(&mut self, group: &[ScanRecord], indices: &[usize]) -> usize {
        let mut removed = 0;
        for &index in indices {
            let Some(selected) = group.get(index) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(index, group_len = group.len(), "history index out of range");
                continue;
            };
            let key = selected.dedupe_key();
            if let Some(position) = self.records.iter().position(|r| r.dedupe_key() == key) {
                self.records.remove(position);
                removed += 1;
            }
        }
        removed
    }

    pub fn remove_by_id(&mut self, id: &ScanId) -> bool {
        match self.records.iter().position(|r| &r.id == id) {
            Some(position) => {
                self.records.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: &ScanId) -> Option<&ScanRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the whole sequence.
    pub fn replace_all(&mut self, records: Vec<ScanRecord>) {
        self.records = records;
    }

    pub fn grouped_for_display<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> Vec<HistoryGroup> {
        group_by_day(&self.records, today, tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{ScanKind, TimestampMs};

    fn record(content: &str, kind: &str, ts: i64) -> ScanRecord {
        ScanRecord::new(
            ScanId::new(),
            content.to_string(),
            ScanKind::new(kind),
            TimestampMs::from_epoch_millis(ts),
        )
    }

    #[test]
    fn append_is_idempotent_for_same_content_and_kind() {
        let mut history = ScanHistory::new();

        assert!(history.append(record("hello", "org.iso.QRCode", 1)));
        assert!(!history.append(record("hello", "org.iso.QRCode", 2)));

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].captured_at.as_millis(), 1);
    }

    #[test]
    fn append_keeps_same_content_with_different_kind() {
        let mut history = ScanHistory::new();

        assert!(history.append(record("hello", "org.iso.QRCode", 1)));
        assert!(history.append(record("hello", "Photo Barcode", 2)));

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut history = ScanHistory::new();
        history.append(record("b", "k", 20));
        history.append(record("a", "k", 10));

        let contents: Vec<_> = history.records().iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["b", "a"]);
    }

    #[test]
    fn remove_at_translates_group_indices_by_dedupe_key() {
        let mut history = ScanHistory::new();
        history.append(record("a", "k", 1));
        history.append(record("b", "k", 2));
        history.append(record("c", "k", 3));

        // Display group in newest-first order: c, b, a
        let group: Vec<_> = history.records().iter().rev().cloned().collect();
        let removed = history.remove_at(&group, &[0, 2]);

        assert_eq!(removed, 2);
        let contents: Vec<_> = history.records().iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["b"]);
    }

    #[test]
    fn remove_at_skips_out_of_range_indices() {
        let mut history = ScanHistory::new();
        history.append(record("a", "k", 1));
        let group = history.records().to_vec();

        assert_eq!(history.remove_at(&group, &[5]), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn remove_at_ignores_records_already_gone() {
        let mut history = ScanHistory::new();
        history.append(record("a", "k", 1));
        let group = history.records().to_vec();

        history.clear();

        assert_eq!(history.remove_at(&group, &[0]), 0);
    }

    #[test]
    fn remove_by_id_removes_only_that_record() {
        let mut history = ScanHistory::new();
        let keep = record("keep", "k", 1);
        let drop = record("drop", "k", 2);
        let drop_id = drop.id.clone();
        history.append(keep.clone());
        history.append(drop);

        assert!(history.remove_by_id(&drop_id));
        assert!(!history.remove_by_id(&drop_id));
        assert_eq!(history.records(), &[keep]);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ScanHistory::new();
        history.append(record("a", "k", 1));
        history.clear();
        assert!(history.is_empty());
    }
}
