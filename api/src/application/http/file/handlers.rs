pub mod download_sheet;
