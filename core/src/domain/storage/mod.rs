pub mod entities;
pub mod policies;
pub mod ports;

pub use entities::*;
pub use ports::*;
