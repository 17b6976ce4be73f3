//! Generic record filtering with a memoized result table.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::models::ApplicationRecord;

/// Field name → required value, all entries AND-ed.
///
/// Falsy values (null, `""`, `false`, `0`) and the `"all"` sentinel are
/// wildcards. The ordered map keeps the serialized cache key canonical, so
/// two specs with the same entries share one cache slot no matter the order
/// they were built in.
pub type FilterSpec = BTreeMap<String, Value>;

pub struct FilterEvaluator {
    inner: Arc<Mutex<HashMap<String, Vec<ApplicationRecord>>>>,
}

impl FilterEvaluator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Records matching every entry of `spec`, in original order.
    ///
    /// Results are memoized by the spec's serialized form. A memoized result
    /// is returned on key match even if `records` has changed since it was
    /// stored; callers that swap the underlying sequence must
    /// [`clear`](Self::clear) first.
    pub async fn filter_records(
        &self,
        records: &[ApplicationRecord],
        spec: &FilterSpec,
    ) -> Vec<ApplicationRecord> {
        let key = cache_key(spec);

        let mut cache = self.inner.lock().await;
        if let Some(hit) = cache.get(&key) {
            return hit.clone();
        }

        let filtered: Vec<ApplicationRecord> = records
            .iter()
            .filter(|record| matches_spec(record, spec))
            .cloned()
            .collect();

        cache.insert(key, filtered.clone());
        filtered
    }

    /// Empties the memo table.
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }
}

impl Default for FilterEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FilterEvaluator {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn cache_key(spec: &FilterSpec) -> String {
    serde_json::to_string(spec).unwrap_or_default()
}

fn matches_spec(record: &ApplicationRecord, spec: &FilterSpec) -> bool {
    spec.iter().all(|(field, required)| {
        if is_wildcard(required) {
            return true;
        }
        match field_value(record, field) {
            Some(value) => value == *required,
            // An unknown field equals nothing.
            None => false,
        }
    })
}

fn is_wildcard(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(enabled) => !enabled,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "all",
        _ => false,
    }
}

/// JSON projection of a record field, under its serialized (camelCase) name.
fn field_value(record: &ApplicationRecord, field: &str) -> Option<Value> {
    let value = match field {
        "id" => json!(record.id),
        "company" => json!(record.company),
        "position" => json!(record.position),
        "dateApplied" => json!(record.date_applied),
        "status" => json!(record.status),
        "cvSubmitted" => json!(record.cv_submitted),
        "coverLetterSubmitted" => json!(record.cover_letter_submitted),
        "portfolioSubmitted" => json!(record.portfolio_submitted),
        "jobLink" => json!(record.job_link),
        "location" => json!(record.location),
        "notes" => json!(record.notes),
        "lastUpdated" => json!(record.last_updated),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock_applications;

    fn spec(entries: &[(&str, Value)]) -> FilterSpec {
        entries
            .iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect()
    }

    #[tokio::test]
    async fn empty_spec_returns_everything_in_order() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let filtered = evaluator.filter_records(&records, &FilterSpec::new()).await;
        assert_eq!(filtered, records);
    }

    #[tokio::test]
    async fn filters_by_status_equality() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let filtered = evaluator
            .filter_records(&records, &spec(&[("status", json!("Offer"))]))
            .await;

        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|r| r.status == "Offer"));
        assert_eq!(
            filtered.len(),
            records.iter().filter(|r| r.status == "Offer").count()
        );
    }

    #[tokio::test]
    async fn conditions_are_anded() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let filtered = evaluator
            .filter_records(
                &records,
                &spec(&[
                    ("status", json!("Applied")),
                    ("location", json!("San Francisco, CA")),
                ]),
            )
            .await;

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].company, "Uber");
    }

    #[tokio::test]
    async fn falsy_values_and_all_sentinel_are_wildcards() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        for wildcard in [json!(null), json!(""), json!("all"), json!(false), json!(0)] {
            evaluator.clear().await;
            let filtered = evaluator
                .filter_records(&records, &spec(&[("status", wildcard)]))
                .await;
            assert_eq!(filtered.len(), records.len());
        }
    }

    #[tokio::test]
    async fn unknown_field_with_constraint_excludes_all() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let filtered = evaluator
            .filter_records(&records, &spec(&[("recruiter", json!("Sam"))]))
            .await;
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn boolean_fields_compare_strictly() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let filtered = evaluator
            .filter_records(&records, &spec(&[("portfolioSubmitted", json!(true))]))
            .await;
        assert!(filtered.iter().all(|r| r.portfolio_submitted));

        // A string never equals a boolean field.
        evaluator.clear().await;
        let mismatched = evaluator
            .filter_records(&records, &spec(&[("portfolioSubmitted", json!("true"))]))
            .await;
        assert!(mismatched.is_empty());
    }

    // The memo table is keyed by the spec alone: after the underlying
    // sequence changes, the stale result keeps being served until cleared.
    #[tokio::test]
    async fn memoized_result_survives_input_changes_until_cleared() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();
        let offer_spec = spec(&[("status", json!("Offer"))]);

        let first = evaluator.filter_records(&records, &offer_spec).await;
        assert_eq!(first.len(), 1);

        let stale = evaluator.filter_records(&[], &offer_spec).await;
        assert_eq!(stale, first);

        evaluator.clear().await;
        let fresh = evaluator.filter_records(&[], &offer_spec).await;
        assert!(fresh.is_empty());
    }

    #[tokio::test]
    async fn key_order_does_not_split_cache_entries() {
        let evaluator = FilterEvaluator::new();
        let records = mock_applications();

        let mut forward = FilterSpec::new();
        forward.insert("status".into(), json!("Applied"));
        forward.insert("company".into(), json!("Uber"));

        let mut reversed = FilterSpec::new();
        reversed.insert("company".into(), json!("Uber"));
        reversed.insert("status".into(), json!("Applied"));

        assert_eq!(cache_key(&forward), cache_key(&reversed));

        let first = evaluator.filter_records(&records, &forward).await;
        // Same key: the second call is a cache hit even with a changed input.
        let second = evaluator.filter_records(&[], &reversed).await;
        assert_eq!(first, second);
    }
}
