//! Derived views over the record sequence: the memoized generic filter and
//! the uncached search/status/sort pipeline behind the applications page.

mod filter;
mod sort;

pub use filter::{FilterEvaluator, FilterSpec};
pub use sort::{sort_applications, SortKey};

use crate::models::ApplicationRecord;

/// Sentinel status selection meaning "no constraint".
pub const STATUS_ALL: &str = "all";

/// Case-folded substring match over company or position. The empty query
/// matches every record.
pub fn matches_search(record: &ApplicationRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    record.company.to_lowercase().contains(&query)
        || record.position.to_lowercase().contains(&query)
}

/// The applications-page pipeline: search, then status filter, then sort.
///
/// Not memoized: the result depends on the search term as well as the
/// status, so it cannot share the spec-keyed filter table.
pub fn query_applications(
    records: &[ApplicationRecord],
    search: &str,
    status: &str,
    sort_by: SortKey,
) -> Vec<ApplicationRecord> {
    let mut matched: Vec<ApplicationRecord> = records
        .iter()
        .filter(|record| matches_search(record, search))
        .filter(|record| status.is_empty() || status == STATUS_ALL || record.status == status)
        .cloned()
        .collect();

    sort_applications(&mut matched, sort_by);
    matched
}
