pub mod history;
pub mod index;
pub mod upload;
