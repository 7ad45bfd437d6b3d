pub mod common;
pub mod food_analysis;
pub mod health;
pub mod history;
pub mod label;
pub mod storage;

#[cfg(test)]
pub mod test_support;
