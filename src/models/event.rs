use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub category: Category,
    pub archived: bool,
}

impl Event {
    /// Local date-time used for ordering. `None` when either part does not parse.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(self.time.trim(), fmt).ok())?;
        Some(date.and_time(time))
    }
}

/// Body accepted by `POST /events`.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            date: Some(date.into()),
            time: Some(time.into()),
            notes,
        }
    }

    /// True when title, date and time are all present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.date, &self.time]
            .iter()
            .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }
}
