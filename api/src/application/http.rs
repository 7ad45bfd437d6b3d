pub mod file;
pub mod food_analysis;
pub mod health;
pub mod pages;
pub mod server;
