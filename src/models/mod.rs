// Core data models for Bob

pub mod list;
pub mod task;

pub use list::*;
pub use task::*;
