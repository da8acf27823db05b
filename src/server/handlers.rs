//! Request handlers
//!
//! One handler per operation the UI consumes. "Today" for recency
//! filtering is taken at request time from the local clock.

use crate::app::AppState;
use crate::error::Result;
use crate::reporting::{self, RecencyWindow};
use crate::store::{DailyRecord, NewDailyEntry, NewWeeklyChecklist, PaperRecord, WeeklyRecord};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

/// Query string for window-filtered reads
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// `7d`, `30d`, `90d` or `all` (default)
    #[serde(default)]
    pub window: Option<String>,
}

impl WindowQuery {
    fn parse(&self) -> Result<RecencyWindow> {
        match &self.window {
            Some(raw) => raw.parse(),
            None => Ok(RecencyWindow::All),
        }
    }
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Record one bowel-movement observation
pub async fn create_daily_entry(
    State(state): State<AppState>,
    Json(entry): Json<NewDailyEntry>,
) -> Result<(StatusCode, Json<DailyRecord>)> {
    let record = state.daily.record_entry(entry).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Daily records inside the requested window, submission order
pub async fn list_daily_entries(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<DailyRecord>>> {
    let window = query.parse()?;
    let records = state.daily.entries_for_display().await;
    let today = Local::now().date_naive();

    Ok(Json(reporting::filter_by_recency(&records, window, today)))
}

/// Aggregates over the daily records inside the requested window
pub async fn daily_stats(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<reporting::DailyStats>> {
    let window = query.parse()?;
    let records = state.daily.entries_for_display().await;
    let today = Local::now().date_naive();
    let windowed = reporting::filter_by_recency(&records, window, today);

    Ok(Json(reporting::daily_stats(&windowed)))
}

/// Record one weekly checklist
pub async fn create_weekly_checklist(
    State(state): State<AppState>,
    Json(checklist): Json<NewWeeklyChecklist>,
) -> Result<(StatusCode, Json<WeeklyRecord>)> {
    let record = state.weekly.record_checklist(checklist).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// All weekly checklists, submission order
pub async fn list_weekly_checklists(
    State(state): State<AppState>,
) -> Json<Vec<WeeklyRecord>> {
    Json(state.weekly.checklists_for_display().await)
}

/// Achievement-rate trend across all recorded weeks
pub async fn weekly_stats(
    State(state): State<AppState>,
) -> Json<Vec<reporting::WeeklyTrendPoint>> {
    let records = state.weekly.checklists_for_display().await;
    Json(reporting::weekly_trend(&records))
}

/// The read-only reference corpus
pub async fn list_papers(State(state): State<AppState>) -> Json<Vec<PaperRecord>> {
    Json(state.papers.list_papers().await)
}

/// Headline dashboard numbers across both user stores
pub async fn summary(State(state): State<AppState>) -> Json<reporting::OverallSummary> {
    let daily = state.daily.entries_for_display().await;
    let weekly = state.weekly.checklists_for_display().await;

    Json(reporting::overall_summary(&daily, &weekly))
}
