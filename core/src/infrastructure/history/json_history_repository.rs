use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::{fs, sync::Mutex};
use tracing::{error, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::HistoryRecord, ports::HistoryRepository, value_objects::AppendHistoryInput,
    },
    storage::policies::is_plain_file_name,
};

/// History kept as a JSON array file plus one text file per nutrition sheet.
///
/// Appends rewrite the whole log. The rewrite is serialized by a lock shared
/// by every clone of the repository and goes through a temporary file, so a
/// reader never sees a half written log and concurrent uploads in this
/// process do not drop records. Other processes writing the same files are
/// not coordinated.
#[derive(Debug, Clone)]
pub struct JsonHistoryRepository {
    history_file: PathBuf,
    sheets_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonHistoryRepository {
    pub async fn new(history_file: PathBuf, sheets_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&sheets_dir).await.map_err(|e| {
            error!("Failed to create sheets directory {}: {}", sheets_dir.display(), e);
            CoreError::Storage(format!("cannot create {}: {}", sheets_dir.display(), e))
        })?;

        if let Some(parent) = history_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create history directory {}: {}", parent.display(), e);
                CoreError::Storage(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        tracing::info!(
            history_file = %history_file.display(),
            sheets_dir = %sheets_dir.display(),
            "Initializing JSON history repository"
        );

        Ok(Self {
            history_file,
            sheets_dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    async fn load_records(&self) -> Result<Vec<HistoryRecord>, CoreError> {
        let raw = match fs::read(&self.history_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!("Failed to read history log: {}", e);
                return Err(CoreError::Storage(format!("cannot read history log: {}", e)));
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            error!(
                history_file = %self.history_file.display(),
                "History log is not valid JSON: {}", e
            );
            CoreError::CorruptHistory(e.to_string())
        })
    }

    async fn store_records(&self, records: &[HistoryRecord]) -> Result<(), CoreError> {
        let payload = serde_json::to_vec_pretty(records).map_err(|e| {
            error!("Failed to serialize history log: {}", e);
            CoreError::InternalServerError
        })?;

        let tmp_file = temporary_path(&self.history_file);
        fs::write(&tmp_file, payload).await.map_err(|e| {
            error!("Failed to write history log: {}", e);
            CoreError::Storage(format!("cannot write history log: {}", e))
        })?;

        fs::rename(&tmp_file, &self.history_file).await.map_err(|e| {
            error!("Failed to replace history log: {}", e);
            CoreError::Storage(format!("cannot replace history log: {}", e))
        })
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl HistoryRepository for JsonHistoryRepository {
    #[instrument(skip(self, input), fields(user = %input.user, food_label = %input.food_label))]
    async fn append(&self, input: AppendHistoryInput) -> Result<HistoryRecord, CoreError> {
        let _guard = self.write_lock.lock().await;
        let record = HistoryRecord::new(input.user, input.food_label, input.image_reference);

        let sheet_path = self.sheets_dir.join(&record.sheet_file);
        fs::write(&sheet_path, input.sheet_text.as_bytes())
            .await
            .map_err(|e| {
                error!("Failed to write sheet {}: {}", sheet_path.display(), e);
                CoreError::Storage(format!("cannot write sheet: {}", e))
            })?;

        let mut records = self.load_records().await?;
        records.push(record.clone());
        self.store_records(&records).await?;

        tracing::debug!(record_id = %record.id, total = records.len(), "History record appended");

        Ok(record)
    }

    async fn list_records(&self) -> Result<Vec<HistoryRecord>, CoreError> {
        self.load_records().await
    }

    async fn read_sheet(&self, file_name: &str) -> Result<Option<String>, CoreError> {
        if !is_plain_file_name(file_name) {
            return Err(CoreError::InvalidFileName);
        }

        match fs::read_to_string(self.sheets_dir.join(file_name)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read sheet {}: {}", file_name, e);
                Err(CoreError::Storage(format!("cannot read sheet: {}", e)))
            }
        }
    }

    async fn is_ready(&self) -> bool {
        fs::metadata(&self.sheets_dir)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::tempdir;

    use super::*;

    async fn repository(dir: &Path) -> JsonHistoryRepository {
        JsonHistoryRepository::new(dir.join("history.json"), dir.join("sheets"))
            .await
            .unwrap()
    }

    fn input(user: &str, label: &str, text: &str) -> AppendHistoryInput {
        AppendHistoryInput {
            user: user.to_string(),
            food_label: label.to_string(),
            sheet_text: text.to_string(),
            image_reference: Some(format!("uploads/{}.jpg", label)),
        }
    }

    #[tokio::test]
    async fn test_missing_log_is_empty_history() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;

        assert!(repository.list_records().await.unwrap().is_empty());
        assert!(repository.is_ready().await);
    }

    #[tokio::test]
    async fn test_append_then_list_round_trip() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;

        let first = repository
            .append(input("ana", "Apple", "**Food:** Apple"))
            .await
            .unwrap();
        let second = repository
            .append(input("ben", "Pizza", "**Food:** Pizza"))
            .await
            .unwrap();

        let records = repository.list_records().await.unwrap();
        assert_eq!(records, vec![first.clone(), second.clone()]);
        assert!(first.id < second.id);
        assert_eq!(first.user, "ana");
        assert_eq!(first.food_label, "Apple");
        assert_eq!(first.image_reference.as_deref(), Some("uploads/Apple.jpg"));
        assert_eq!(
            repository.read_sheet(&first.sheet_file).await.unwrap().as_deref(),
            Some("**Food:** Apple")
        );
    }

    #[tokio::test]
    async fn test_log_is_a_pretty_json_array() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;
        let record = repository.append(input("ana", "Apple", "text")).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], record.id.to_string());
        assert_eq!(value[0]["user"], "ana");
        assert_eq!(value[0]["sheet_file"], record.sheet_file);
        assert!(raw.contains('\n'));
        assert!(!dir.path().join("history.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_sheet_reads_as_none() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;
        let record = repository.append(input("ana", "Apple", "text")).await.unwrap();

        std::fs::remove_file(dir.path().join("sheets").join(&record.sheet_file)).unwrap();

        assert_eq!(repository.read_sheet(&record.sheet_file).await.unwrap(), None);
        assert_eq!(repository.list_records().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_read_sheet_rejects_paths() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;

        assert_eq!(
            repository.read_sheet("../history.json").await,
            Err(CoreError::InvalidFileName)
        );
    }

    #[tokio::test]
    async fn test_corrupt_log_is_reported_and_left_untouched() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;
        std::fs::write(dir.path().join("history.json"), "{not json").unwrap();

        assert!(matches!(
            repository.list_records().await,
            Err(CoreError::CorruptHistory(_))
        ));
        assert!(matches!(
            repository.append(input("ana", "Apple", "text")).await,
            Err(CoreError::CorruptHistory(_))
        ));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("history.json")).unwrap(),
            "{not json"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_every_record() {
        let dir = tempdir().unwrap();
        let repository = repository(dir.path()).await;

        let handles = (0..25)
            .map(|i| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .append(input(&format!("user{}", i), "Rice", "text"))
                        .await
                        .unwrap()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.await.unwrap();
        }

        let records = repository.list_records().await.unwrap();
        assert_eq!(records.len(), 25);

        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 25);
        let sheets: HashSet<_> = records.iter().map(|r| r.sheet_file.clone()).collect();
        assert_eq!(sheets.len(), 25);
    }
}
