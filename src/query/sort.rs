//! Sort keys for the applications list.

use serde::{Deserialize, Serialize};

use crate::models::ApplicationRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest `dateApplied` first.
    DateDesc,
    /// Oldest `dateApplied` first.
    DateAsc,
    /// Company name, case-folded.
    Company,
    /// Status label, case-folded.
    Status,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::DateDesc
    }
}

/// Sorts in place. The sort is stable, so ties keep their existing order.
pub fn sort_applications(records: &mut [ApplicationRecord], key: SortKey) {
    match key {
        SortKey::DateDesc => records.sort_by(|a, b| b.date_applied.cmp(&a.date_applied)),
        SortKey::DateAsc => records.sort_by(|a, b| a.date_applied.cmp(&b.date_applied)),
        SortKey::Company => {
            records.sort_by(|a, b| a.company.to_lowercase().cmp(&b.company.to_lowercase()))
        }
        SortKey::Status => {
            records.sort_by(|a, b| a.status.to_lowercase().cmp(&b.status.to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock_applications;

    #[test]
    fn newest_first_orders_by_date_descending() {
        let mut records = mock_applications();
        sort_applications(&mut records, SortKey::DateDesc);

        for pair in records.windows(2) {
            assert!(pair[0].date_applied >= pair[1].date_applied);
        }
        assert_eq!(records[0].company, "Apple");
    }

    #[test]
    fn oldest_first_orders_by_date_ascending() {
        let mut records = mock_applications();
        sort_applications(&mut records, SortKey::DateAsc);
        assert_eq!(records[0].company, "Meta");
        assert_eq!(records.last().map(|r| r.company.as_str()), Some("Apple"));
    }

    #[test]
    fn company_sort_is_non_decreasing() {
        let mut records = mock_applications();
        sort_applications(&mut records, SortKey::Company);

        for pair in records.windows(2) {
            assert!(pair[0].company.to_lowercase() <= pair[1].company.to_lowercase());
        }
        assert_eq!(records[0].company, "Adobe");
    }

    #[test]
    fn status_sort_keeps_ties_stable() {
        let mut records = mock_applications();
        sort_applications(&mut records, SortKey::Status);

        // All five Applied records first, in their original relative order.
        let applied_ids: Vec<i64> = records
            .iter()
            .take_while(|r| r.status == "Applied")
            .map(|r| r.id)
            .collect();
        assert_eq!(applied_ids, vec![2, 4, 8, 10, 12]);
    }
}
