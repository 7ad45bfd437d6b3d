use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryEntry, HistoryRecord, SheetDownload},
        value_objects::AppendHistoryInput,
    },
};

/// Append-only store of past submissions and their nutrition sheets
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    /// Write the sheet text and add the record to the log
    fn append(
        &self,
        input: AppendHistoryInput,
    ) -> impl Future<Output = Result<HistoryRecord, CoreError>> + Send;

    /// All records in creation order. A missing log is an empty history.
    fn list_records(&self) -> impl Future<Output = Result<Vec<HistoryRecord>, CoreError>> + Send;

    /// Raw sheet text, `None` when the file is gone
    fn read_sheet(
        &self,
        file_name: &str,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn is_ready(&self) -> impl Future<Output = bool> + Send;
}

/// Service trait for reading history
pub trait HistoryService: Send + Sync {
    fn list_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    fn download_sheet(
        &self,
        file_name: String,
    ) -> impl Future<Output = Result<SheetDownload, CoreError>> + Send;
}
