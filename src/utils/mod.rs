// Utility modules

pub mod date;
pub mod fuzzy;

pub use date::*;
