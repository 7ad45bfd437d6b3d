//! Shared fixtures for the service tests. Stateless ports use the mockall
//! mocks generated next to their traits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::MockLLMClient,
    history::{
        entities::HistoryRecord, ports::HistoryRepository, value_objects::AppendHistoryInput,
    },
    label::{ports::MockVisionClient, services::LabelSelector},
    storage::ports::MockImageStorage,
};

#[derive(Default)]
struct HistoryState {
    records: Vec<HistoryRecord>,
    sheets: HashMap<String, String>,
}

/// History kept in memory, for tests that seed records and then read them back.
#[derive(Clone, Default)]
pub struct InMemoryHistoryRepository {
    state: Arc<Mutex<HistoryState>>,
}

impl InMemoryHistoryRepository {
    pub fn seed(&self, input: AppendHistoryInput) -> HistoryRecord {
        let record = HistoryRecord::new(input.user, input.food_label, input.image_reference);
        let mut state = self.state.lock().unwrap();
        state
            .sheets
            .insert(record.sheet_file.clone(), input.sheet_text);
        state.records.push(record.clone());
        record
    }

    pub fn remove_sheet(&self, file_name: &str) {
        self.state.lock().unwrap().sheets.remove(file_name);
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, input: AppendHistoryInput) -> Result<HistoryRecord, CoreError> {
        Ok(self.seed(input))
    }

    async fn list_records(&self) -> Result<Vec<HistoryRecord>, CoreError> {
        Ok(self.state.lock().unwrap().records.clone())
    }

    async fn read_sheet(&self, file_name: &str) -> Result<Option<String>, CoreError> {
        Ok(self.state.lock().unwrap().sheets.get(file_name).cloned())
    }

    async fn is_ready(&self) -> bool {
        true
    }
}

pub type MockedService<H> = Service<MockVisionClient, MockLLMClient, H, MockImageStorage>;

/// Service around `history` whose other ports expect no calls.
pub fn service_with_history<H: HistoryRepository>(history: H) -> MockedService<H> {
    Service::new(
        MockVisionClient::new(),
        MockLLMClient::new(),
        history,
        MockImageStorage::new(),
        LabelSelector::default(),
    )
}
