use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
}

impl Workspace {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Inclusive calendar range sent to the summary endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    pub fn since_param(&self) -> String {
        self.since.format(WIRE_DATE_FORMAT).to_string()
    }

    pub fn until_param(&self) -> String {
        self.until.format(WIRE_DATE_FORMAT).to_string()
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.since_param(), self.until_param())
    }
}

// Raw summary payload. `data` itself is required; below it every field is
// optional so that a missing key becomes a MalformedSummary during
// aggregation instead of a serde error.

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSummary {
    #[serde(default)]
    pub total_grand: Option<u64>,
    pub data: Vec<Option<RawProjectGroup>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProjectGroup {
    #[serde(default)]
    pub title: Option<RawProjectTitle>,
    #[serde(default)]
    pub items: Option<Vec<RawItem>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProjectTitle {
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub title: Option<RawItemTitle>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawItemTitle {
    #[serde(default)]
    pub time_entry: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub project_name: String,
    pub entries: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_hours: u64,
    pub total_minutes: u64,
    pub projects: Vec<ProjectReport>,
}
