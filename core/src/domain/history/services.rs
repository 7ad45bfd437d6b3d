use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, markdown::render_markdown, services::Service},
    food_analysis::ports::LLMClient,
    history::{
        entities::{HistoryEntry, HistoryRecord, SHEET_UNAVAILABLE_HTML, SheetDownload},
        ports::{HistoryRepository, HistoryService},
    },
    label::ports::VisionClient,
    storage::{policies::is_plain_file_name, ports::ImageStorage},
};

impl<V, LLM, H, IS> HistoryService for Service<V, LLM, H, IS>
where
    V: VisionClient,
    LLM: LLMClient,
    H: HistoryRepository,
    IS: ImageStorage,
{
    #[instrument(skip(self))]
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let records = self.history_repository.list_records().await?;
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let sheet = if is_plain_file_name(&record.sheet_file) {
                self.history_repository.read_sheet(&record.sheet_file).await
            } else {
                Err(CoreError::InvalidFileName)
            };

            let entry = match sheet {
                Ok(Some(raw)) => HistoryEntry {
                    sheet_html: render_markdown(&raw),
                    sheet_available: true,
                    record,
                },
                Ok(None) => {
                    tracing::warn!(
                        record_id = %record.id,
                        sheet_file = %record.sheet_file,
                        "Sheet file missing, rendering placeholder"
                    );
                    unavailable(record)
                }
                Err(e) => {
                    tracing::warn!(
                        record_id = %record.id,
                        sheet_file = %record.sheet_file,
                        error = %e,
                        "Sheet file unreadable, rendering placeholder"
                    );
                    unavailable(record)
                }
            };

            entries.push(entry);
        }

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn download_sheet(&self, file_name: String) -> Result<SheetDownload, CoreError> {
        if !is_plain_file_name(&file_name) {
            return Err(CoreError::InvalidFileName);
        }

        let content = self
            .history_repository
            .read_sheet(&file_name)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(SheetDownload { file_name, content })
    }
}

fn unavailable(record: HistoryRecord) -> HistoryEntry {
    HistoryEntry {
        sheet_html: SHEET_UNAVAILABLE_HTML.to_string(),
        sheet_available: false,
        record,
    }
}
