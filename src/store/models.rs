//! Record models
//!
//! Rust structs for the three persisted record kinds. All models use serde
//! and serialize exactly to the on-disk JSON layout: dates as `YYYY-MM-DD`
//! and submission timestamps as `YYYY-MM-DD HH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category → item text → done, for one weekly checklist
pub type CheckMap = BTreeMap<String, BTreeMap<String, bool>>;

/// One bowel-movement observation.
///
/// Created on form submission, immutable thereafter, appended to the daily
/// store in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Bristol stool scale, 1 through 7
    pub stool_type: u8,
    /// Time-of-day bucket label, one of [`crate::config::TIME_BUCKETS`]
    pub time: String,
    /// Color label, one of [`crate::config::STOOL_COLORS`]
    pub color: String,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// Create daily entry request
#[derive(Debug, Clone, Deserialize)]
pub struct NewDailyEntry {
    pub date: NaiveDate,
    pub stool_type: u8,
    pub time: String,
    pub color: String,
    #[serde(default)]
    pub notes: String,
}

/// One weekly lifestyle self-assessment.
///
/// `checks` is tolerant of hand-edited files: items may be missing or
/// unknown, and loading must not fail on either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRecord {
    pub week_start: NaiveDate,
    #[serde(default)]
    pub checks: CheckMap,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// Create weekly checklist request
#[derive(Debug, Clone, Deserialize)]
pub struct NewWeeklyChecklist {
    pub week_start: NaiveDate,
    pub checks: CheckMap,
}

/// A research-paper summary from the reference corpus.
///
/// Written once by the seeding binary, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub year: u16,
    pub citations: u32,
    pub doi: String,
    pub core_content: CoreContent,
    pub detailed_content: DetailedContent,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreContent {
    pub summary: String,
    #[serde(default)]
    pub key_findings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedContent {
    pub methodology: String,
    pub results: String,
    pub discussion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical_implications: Option<String>,
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` submission timestamps
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
