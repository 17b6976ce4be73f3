//! Application-record data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five first-class application statuses.
///
/// Records carry their status as a plain string so that custom labels added
/// through the settings page remain representable; this enum is the
/// recognized vocabulary the stats buckets are keyed by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    OnHold,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::OnHold => "On Hold",
        }
    }

    /// Parses a status label. Returns `None` for custom/unrecognized labels.
    pub fn from_label(label: &str) -> Option<ApplicationStatus> {
        match label {
            "Applied" => Some(ApplicationStatus::Applied),
            "Interview" => Some(ApplicationStatus::Interview),
            "Offer" => Some(ApplicationStatus::Offer),
            "Rejected" => Some(ApplicationStatus::Rejected),
            "On Hold" => Some(ApplicationStatus::OnHold),
            _ => None,
        }
    }
}

/// One tracked job application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub date_applied: NaiveDate,
    pub status: String,
    pub cv_submitted: bool,
    pub cover_letter_submitted: bool,
    pub portfolio_submitted: bool,
    pub job_link: Option<String>,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    pub last_updated: NaiveDate,
}

/// Input data from the add/edit form.
///
/// Submission validates and echoes a would-be record; it never writes to the
/// record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub company: String,
    pub position: String,
    pub date_applied: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub cv_submitted: bool,
    #[serde(default)]
    pub cover_letter_submitted: bool,
    #[serde(default)]
    pub portfolio_submitted: bool,
    pub job_link: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::from_label(status.as_str()), Some(status));
        }
    }

    #[test]
    fn custom_label_is_unrecognized() {
        assert_eq!(ApplicationStatus::from_label("Ghosted"), None);
        assert_eq!(ApplicationStatus::from_label("applied"), None);
    }
}
