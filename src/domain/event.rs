use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::wire::non_empty_string;

const PLACEHOLDER: &str = "-";

/// A campus event for a major, as returned by `/fetch-events`.
///
/// The backend stores these with `event_`-prefixed column names, so both
/// spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampusEvent {
    #[serde(default, alias = "event_name", deserialize_with = "non_empty_string")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "event_description",
        deserialize_with = "non_empty_string"
    )]
    pub description: Option<String>,
    #[serde(default, alias = "event_date", deserialize_with = "non_empty_string")]
    pub date: Option<String>,
    #[serde(default, alias = "event_time", deserialize_with = "non_empty_string")]
    pub time: Option<String>,
    #[serde(
        default,
        rename = "type",
        alias = "event_type",
        deserialize_with = "non_empty_string"
    )]
    pub kind: Option<String>,
}

impl CampusEvent {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled event")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// `2026-10-20` becomes `Tue, Oct 20 2026`; anything unparseable is shown as-is
    pub fn formatted_date(&self) -> String {
        match self.date.as_deref() {
            Some(raw) => {
                // Timestamps such as 2026-10-20T00:00:00 only need the date part
                let date_part = raw.split('T').next().unwrap_or(raw);
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                    .map(|date| date.format("%a, %b %-d %Y").to_string())
                    .unwrap_or_else(|_| raw.to_string())
            }
            None => PLACEHOLDER.to_string(),
        }
    }

    /// `17:30:00` becomes `5:30 PM`; anything unparseable is shown as-is
    pub fn formatted_time(&self) -> String {
        match self.time.as_deref() {
            Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
                .map(|time| time.format("%-I:%M %p").to_string())
                .unwrap_or_else(|_| raw.to_string()),
            None => PLACEHOLDER.to_string(),
        }
    }
}
