//! Weekly checklist service
//!
//! Persists one self-assessment per week across the three fixed
//! categories. All three categories must be present on submission; items
//! that drift from the canonical catalogue only produce a warning, so
//! hand-edited stores and older forms keep loading.

use crate::config;
use crate::error::{AppError, Result};
use crate::store::{NewWeeklyChecklist, RecordStore, WeeklyRecord};
use chrono::{Local, Timelike};

/// Service for recording and listing weekly checklists
#[derive(Clone)]
pub struct WeeklyService {
    store: RecordStore,
}

impl WeeklyService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Validate category coverage and persist one checklist.
    ///
    /// Achievement rate is derived at read time, never stored.
    pub async fn record_checklist(&self, checklist: NewWeeklyChecklist) -> Result<WeeklyRecord> {
        validate_checks(&checklist)?;

        // Stamp at second precision, matching the stored timestamp format
        let now = Local::now().naive_local();
        let created_at = now.with_nanosecond(0).unwrap_or(now);

        let record = WeeklyRecord {
            week_start: checklist.week_start,
            checks: checklist.checks,
            created_at,
        };

        let record = self.store.append(config::WEEKLY_STORE, record).await?;

        tracing::info!("Recorded weekly checklist for week of {}", record.week_start);

        Ok(record)
    }

    /// All checklists in submission order; strict about store corruption
    pub async fn list_checklists(&self) -> Result<Vec<WeeklyRecord>> {
        self.store.load(config::WEEKLY_STORE).await
    }

    /// Display variant: an unreadable store reads as empty
    pub async fn checklists_for_display(&self) -> Vec<WeeklyRecord> {
        self.store.load_or_empty(config::WEEKLY_STORE).await
    }
}

fn validate_checks(checklist: &NewWeeklyChecklist) -> Result<()> {
    for (category, canonical_items) in config::CHECKLIST_CATEGORIES {
        let Some(items) = checklist.checks.get(*category) else {
            return Err(AppError::Validation(format!(
                "checklist is missing the '{}' category",
                category
            )));
        };

        for item in items.keys() {
            if !canonical_items.contains(&item.as_str()) {
                tracing::warn!("Unknown item in category '{}': {}", category, item);
            }
        }
        for canonical in *canonical_items {
            if !items.contains_key(*canonical) {
                tracing::warn!("Category '{}' is missing item: {}", category, canonical);
            }
        }
    }

    for category in checklist.checks.keys() {
        if config::checklist_items(category).is_none() {
            tracing::warn!("Unknown checklist category: {}", category);
        }
    }

    Ok(())
}
