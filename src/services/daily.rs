//! Daily entry service
//!
//! Validates bowel-movement observations and appends them to the daily
//! store. Records are immutable once written; there is no edit or delete.

use crate::config;
use crate::error::{AppError, Result};
use crate::store::{DailyRecord, NewDailyEntry, RecordStore};
use chrono::{Local, Timelike};

/// Service for recording and listing daily entries
#[derive(Clone)]
pub struct DailyService {
    store: RecordStore,
}

impl DailyService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Validate and persist one observation, stamping the submission time
    pub async fn record_entry(&self, entry: NewDailyEntry) -> Result<DailyRecord> {
        validate_entry(&entry)?;

        // Stamp at second precision, matching the stored timestamp format
        let now = Local::now().naive_local();
        let created_at = now.with_nanosecond(0).unwrap_or(now);

        let record = DailyRecord {
            date: entry.date,
            stool_type: entry.stool_type,
            time: entry.time,
            color: entry.color,
            notes: entry.notes,
            created_at,
        };

        let record = self.store.append(config::DAILY_STORE, record).await?;

        tracing::info!(
            "Recorded daily entry for {} (type {})",
            record.date,
            record.stool_type
        );

        Ok(record)
    }

    /// All entries in submission order; strict about store corruption
    pub async fn list_entries(&self) -> Result<Vec<DailyRecord>> {
        self.store.load(config::DAILY_STORE).await
    }

    /// Display variant: an unreadable store reads as empty
    pub async fn entries_for_display(&self) -> Vec<DailyRecord> {
        self.store.load_or_empty(config::DAILY_STORE).await
    }
}

fn validate_entry(entry: &NewDailyEntry) -> Result<()> {
    if !(config::BRISTOL_MIN..=config::BRISTOL_MAX).contains(&entry.stool_type) {
        return Err(AppError::Validation(format!(
            "stool_type must be between {} and {}, got {}",
            config::BRISTOL_MIN,
            config::BRISTOL_MAX,
            entry.stool_type
        )));
    }

    if !config::TIME_BUCKETS.contains(&entry.time.as_str()) {
        return Err(AppError::Validation(format!(
            "unknown time bucket '{}'",
            entry.time
        )));
    }

    if !config::STOOL_COLORS.contains(&entry.color.as_str()) {
        return Err(AppError::Validation(format!(
            "unknown stool color '{}'",
            entry.color
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn create_test_service() -> (DailyService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();
        (DailyService::new(store), temp_dir)
    }

    fn entry(stool_type: u8) -> NewDailyEntry {
        NewDailyEntry {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            stool_type,
            time: "아침 (7~9시)".to_string(),
            color: "갈색 (이상적)".to_string(),
            notes: "특이사항 없음".to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_entry_persists_and_returns_input() {
        let (service, _temp) = create_test_service().await;

        let record = service.record_entry(entry(4)).await.unwrap();
        assert_eq!(record.stool_type, 4);
        assert_eq!(record.notes, "특이사항 없음");

        let entries = service.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], record);
    }

    #[tokio::test]
    async fn test_all_bristol_types_accepted() {
        let (service, _temp) = create_test_service().await;

        for stool_type in 1..=7u8 {
            let record = service.record_entry(entry(stool_type)).await.unwrap();
            assert_eq!(record.stool_type, stool_type);
        }

        assert_eq!(service.list_entries().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_out_of_range_stool_type_rejected() {
        let (service, _temp) = create_test_service().await;

        for stool_type in [0u8, 8, 99] {
            let result = service.record_entry(entry(stool_type)).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }

        // Nothing reached the store
        assert!(service.list_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_labels_rejected() {
        let (service, _temp) = create_test_service().await;

        let mut bad_time = entry(4);
        bad_time.time = "midnight snack".to_string();
        assert!(matches!(
            service.record_entry(bad_time).await,
            Err(AppError::Validation(_))
        ));

        let mut bad_color = entry(4);
        bad_color.color = "파란색".to_string();
        assert!(matches!(
            service.record_entry(bad_color).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_entries_append_in_submission_order() {
        let (service, _temp) = create_test_service().await;

        service.record_entry(entry(2)).await.unwrap();
        service.record_entry(entry(5)).await.unwrap();
        service.record_entry(entry(3)).await.unwrap();

        let types: Vec<u8> = service
            .list_entries()
            .await
            .unwrap()
            .iter()
            .map(|r| r.stool_type)
            .collect();
        assert_eq!(types, vec![2, 5, 3]);
    }
}
