pub mod history;
pub mod llm;
pub mod storage;
pub mod vision;
