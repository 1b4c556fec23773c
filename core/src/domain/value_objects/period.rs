//! Report period selector.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Report period determining the date cutoff for customer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// The last 7 calendar days
    Weekly,
    /// The last calendar month
    Monthly,
}

impl ReportPeriod {
    /// Earliest `created_at` included in a report generated at `now`
    ///
    /// Weekly is a flat 7 days. Monthly goes back to the same day of the
    /// previous month, with chrono clamping the day when the previous
    /// month is shorter (2024-03-31 becomes 2024-02-29).
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ReportPeriod::Weekly => now - Duration::days(7),
            ReportPeriod::Monthly => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        }
    }

    /// Period word with its first letter capitalized, for the report title
    pub fn title_word(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
        }
    }

    /// Attachment filename for the rendered report
    pub fn file_name(&self) -> String {
        format!("customer_{}_report.pdf", self)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportPeriod::Weekly => write!(f, "weekly"),
            ReportPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(ReportPeriod::Weekly),
            "monthly" => Ok(ReportPeriod::Monthly),
            other => Err(ValidationError::InvalidPeriod {
                value: other.to_string(),
            }),
        }
    }
}
