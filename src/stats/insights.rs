//! Derived series for the dashboard charts.
//!
//! These are computed on demand from the record sequence; none of them go
//! through the aggregator's freshness window.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{ApplicationRecord, ApplicationStatus};
use crate::stats::ApplicationStats;

/// One labeled value in a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountEntry {
    pub name: String,
    pub value: usize,
}

/// The status pie chart: one slice per first-class status.
pub fn status_breakdown(stats: &ApplicationStats) -> Vec<CountEntry> {
    let value = |status: ApplicationStatus| match status {
        ApplicationStatus::Applied => stats.applied,
        ApplicationStatus::Interview => stats.interviews,
        ApplicationStatus::Offer => stats.offers,
        ApplicationStatus::Rejected => stats.rejections,
        ApplicationStatus::OnHold => stats.on_hold,
    };

    ApplicationStatus::ALL
        .iter()
        .map(|&status| CountEntry {
            name: status.as_str().to_string(),
            value: value(status),
        })
        .collect()
}

/// Applications per calendar month of `dateApplied`, oldest month first.
pub fn applications_by_month(records: &[ApplicationRecord]) -> Vec<CountEntry> {
    let mut by_month: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        let key = (record.date_applied.year(), record.date_applied.month());
        *by_month.entry(key).or_insert(0) += 1;
    }

    by_month
        .into_iter()
        .map(|((year, month), value)| CountEntry {
            name: format!("{} {}", month_abbrev(month), year),
            value,
        })
        .collect()
}

/// Companies ranked by application count, descending, capped at `limit`.
/// Companies with equal counts keep first-seen order.
pub fn top_companies(records: &[ApplicationRecord], limit: usize) -> Vec<CountEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        let entry = counts.entry(record.company.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(record.company.as_str());
        }
        *entry += 1;
    }

    let mut ranked: Vec<CountEntry> = order
        .into_iter()
        .map(|company| CountEntry {
            name: company.to_string(),
            value: counts[company],
        })
        .collect();

    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(limit);
    ranked
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
