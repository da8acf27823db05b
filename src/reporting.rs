//! Reporting module
//!
//! Pure functions over loaded record sequences; no stored state. These are
//! the aggregates the dashboard renders: modal values, means, recency
//! filtering, histograms, and the weekly achievement-rate trend.
//!
//! Mode ties are broken toward the smallest value. The original stack
//! leaned on pandas `mode().iloc[0]`, which returns the sorted-first modal
//! value, so smallest-value tie-breaking keeps reported metrics stable.

use crate::error::{AppError, Result};
use crate::store::{DailyRecord, WeeklyRecord};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Analysis window for date-filtered reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecencyWindow {
    Days7,
    Days30,
    Days90,
    #[default]
    All,
}

impl RecencyWindow {
    /// Window length in days, or `None` for the unbounded window
    pub fn days(self) -> Option<u64> {
        match self {
            RecencyWindow::Days7 => Some(7),
            RecencyWindow::Days30 => Some(30),
            RecencyWindow::Days90 => Some(90),
            RecencyWindow::All => None,
        }
    }

    /// Earliest date still inside the window, relative to `today`
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        self.days()
            .map(|days| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }
}

impl FromStr for RecencyWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "7d" => Ok(RecencyWindow::Days7),
            "30d" => Ok(RecencyWindow::Days30),
            "90d" => Ok(RecencyWindow::Days90),
            "all" => Ok(RecencyWindow::All),
            other => Err(AppError::Validation(format!(
                "unknown analysis window '{}' (expected 7d, 30d, 90d or all)",
                other
            ))),
        }
    }
}

/// Most frequent value, smallest value winning ties. `None` on empty input.
pub fn mode_of<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let counts = histogram_counts(values);

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // BTreeMap iterates ascending, so a strictly greater count is
        // required to displace an earlier (smaller) value
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Arithmetic mean. `None` on empty input; callers guard before display.
pub fn mean_of<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0u64;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Occurrence count per distinct value, for histogram display
pub fn histogram_counts<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Records whose `date` falls within the window ending at `today`
pub fn filter_by_recency(
    records: &[DailyRecord],
    window: RecencyWindow,
    today: NaiveDate,
) -> Vec<DailyRecord> {
    match window.cutoff(today) {
        None => records.to_vec(),
        Some(cutoff) => records
            .iter()
            .filter(|r| r.date >= cutoff)
            .cloned()
            .collect(),
    }
}

/// Percentage of checked items across all categories of one checklist.
/// `None` when the record holds no items at all.
pub fn weekly_achievement_rate(record: &WeeklyRecord) -> Option<f64> {
    let total: usize = record.checks.values().map(|items| items.len()).sum();
    if total == 0 {
        return None;
    }

    let checked: usize = record
        .checks
        .values()
        .flat_map(|items| items.values())
        .filter(|done| **done)
        .count();

    Some(checked as f64 / total as f64 * 100.0)
}

/// Round to one decimal, the display convention for rates and means
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ===== Composed dashboard summaries =====

/// Daily-record statistics block for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DailyStats {
    pub total_records: usize,
    pub most_common_type: Option<u8>,
    pub most_common_time: Option<String>,
    pub average_type: Option<f64>,
    pub type_histogram: BTreeMap<u8, usize>,
    pub time_histogram: BTreeMap<String, usize>,
}

pub fn daily_stats(records: &[DailyRecord]) -> DailyStats {
    DailyStats {
        total_records: records.len(),
        most_common_type: mode_of(records.iter().map(|r| r.stool_type)),
        most_common_time: mode_of(records.iter().map(|r| r.time.clone())),
        average_type: mean_of(records.iter().map(|r| f64::from(r.stool_type))).map(round1),
        type_histogram: histogram_counts(records.iter().map(|r| r.stool_type)),
        time_histogram: histogram_counts(records.iter().map(|r| r.time.clone())),
    }
}

/// One point of the achievement-rate trend
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyTrendPoint {
    pub week_start: NaiveDate,
    pub achievement_rate: f64,
}

/// Achievement rate per checklist, in record order. Records with no items
/// carry no rate and are skipped.
pub fn weekly_trend(records: &[WeeklyRecord]) -> Vec<WeeklyTrendPoint> {
    records
        .iter()
        .filter_map(|record| {
            weekly_achievement_rate(record).map(|rate| WeeklyTrendPoint {
                week_start: record.week_start,
                achievement_rate: round1(rate),
            })
        })
        .collect()
}

/// Headline numbers for the dashboard summary row
#[derive(Debug, Clone, Serialize)]
pub struct OverallSummary {
    pub total_daily_records: usize,
    pub average_stool_type: Option<f64>,
    pub average_achievement_rate: Option<f64>,
}

pub fn overall_summary(daily: &[DailyRecord], weekly: &[WeeklyRecord]) -> OverallSummary {
    let rates: Vec<f64> = weekly.iter().filter_map(weekly_achievement_rate).collect();

    OverallSummary {
        total_daily_records: daily.len(),
        average_stool_type: mean_of(daily.iter().map(|r| f64::from(r.stool_type))).map(round1),
        average_achievement_rate: mean_of(rates).map(round1),
    }
}
