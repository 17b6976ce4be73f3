use serde::{Deserialize, Serialize};

/// Per-status application counts shown on the dashboard.
///
/// The five named buckets are the first-class status vocabulary. Records
/// carrying a custom status contribute to `total` but to no bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
    pub total: usize,
    pub applied: usize,
    pub interviews: usize,
    pub offers: usize,
    pub rejections: usize,
    pub on_hold: usize,
}

impl Default for ApplicationStats {
    fn default() -> Self {
        Self {
            total: 0,
            applied: 0,
            interviews: 0,
            offers: 0,
            rejections: 0,
            on_hold: 0,
        }
    }
}

impl ApplicationStats {
    /// Sum of the five named buckets. At most `total`; equal exactly when
    /// every counted record carried a recognized status.
    pub fn bucketed(&self) -> usize {
        self.applied + self.interviews + self.offers + self.rejections + self.on_hold
    }
}
