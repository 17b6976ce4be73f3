//! The built-in mock dataset the store is seeded with at startup.

use chrono::NaiveDate;

use crate::models::ApplicationRecord;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: i64,
    company: &str,
    position: &str,
    date_applied: NaiveDate,
    status: &str,
    cv_submitted: bool,
    cover_letter_submitted: bool,
    portfolio_submitted: bool,
    job_link: &str,
    location: &str,
    notes: &str,
    last_updated: NaiveDate,
) -> ApplicationRecord {
    ApplicationRecord {
        id,
        company: company.to_string(),
        position: position.to_string(),
        date_applied,
        status: status.to_string(),
        cv_submitted,
        cover_letter_submitted,
        portfolio_submitted,
        job_link: Some(job_link.to_string()),
        location: location.to_string(),
        notes: notes.to_string(),
        last_updated,
    }
}

pub fn mock_applications() -> Vec<ApplicationRecord> {
    vec![
        record(
            1,
            "Google",
            "Frontend Developer",
            date(2024, 4, 15),
            "Interview",
            true,
            true,
            true,
            "https://careers.google.com/jobs/123",
            "Mountain View, CA",
            "Had first round interview on April 20. Waiting for feedback.",
            date(2024, 4, 20),
        ),
        record(
            2,
            "Microsoft",
            "Software Engineer",
            date(2024, 4, 10),
            "Applied",
            true,
            false,
            true,
            "https://careers.microsoft.com/jobs/456",
            "Redmond, WA",
            "Applied through referral from John.",
            date(2024, 4, 10),
        ),
        record(
            3,
            "Amazon",
            "Full Stack Developer",
            date(2024, 4, 5),
            "Rejected",
            true,
            true,
            false,
            "https://amazon.jobs/789",
            "Seattle, WA",
            "Received rejection email on April 12.",
            date(2024, 4, 12),
        ),
        record(
            4,
            "Apple",
            "UI Engineer",
            date(2024, 4, 18),
            "Applied",
            true,
            true,
            true,
            "https://jobs.apple.com/101112",
            "Cupertino, CA",
            "Applied for the position through company website.",
            date(2024, 4, 18),
        ),
        record(
            5,
            "Meta",
            "React Developer",
            date(2024, 4, 1),
            "Offer",
            true,
            false,
            true,
            "https://careers.meta.com/131415",
            "Menlo Park, CA",
            "Received offer on April 25. Need to respond by May 2.",
            date(2024, 4, 25),
        ),
        record(
            6,
            "Netflix",
            "Senior Frontend Engineer",
            date(2024, 4, 8),
            "Interview",
            true,
            true,
            true,
            "https://jobs.netflix.com/161718",
            "Los Gatos, CA",
            "Second round interview scheduled for April 30.",
            date(2024, 4, 22),
        ),
        record(
            7,
            "Airbnb",
            "UI/UX Developer",
            date(2024, 4, 12),
            "On Hold",
            true,
            true,
            true,
            "https://careers.airbnb.com/192021",
            "San Francisco, CA",
            "Position temporarily on hold due to restructuring.",
            date(2024, 4, 20),
        ),
        record(
            8,
            "Spotify",
            "Frontend Engineer",
            date(2024, 4, 14),
            "Applied",
            true,
            false,
            true,
            "https://www.spotifyjobs.com/222324",
            "New York, NY",
            "Applied through LinkedIn Easy Apply.",
            date(2024, 4, 14),
        ),
        record(
            9,
            "Twitter",
            "Software Developer",
            date(2024, 4, 3),
            "Rejected",
            true,
            true,
            false,
            "https://careers.twitter.com/252627",
            "San Francisco, CA",
            "Rejected after first round interview.",
            date(2024, 4, 15),
        ),
        record(
            10,
            "Adobe",
            "Frontend Developer",
            date(2024, 4, 17),
            "Applied",
            true,
            true,
            true,
            "https://www.adobe.com/careers/282930",
            "San Jose, CA",
            "Applied with referral from Sarah.",
            date(2024, 4, 17),
        ),
        record(
            11,
            "Salesforce",
            "UI Developer",
            date(2024, 4, 9),
            "Interview",
            true,
            false,
            true,
            "https://salesforce.wd1.myworkdayjobs.com/313233",
            "San Francisco, CA",
            "First round interview completed on April 18. Technical assessment next.",
            date(2024, 4, 18),
        ),
        record(
            12,
            "Uber",
            "Frontend Engineer",
            date(2024, 4, 11),
            "Applied",
            true,
            true,
            false,
            "https://www.uber.com/us/en/careers/343536",
            "San Francisco, CA",
            "Applied through company website.",
            date(2024, 4, 11),
        ),
    ]
}
