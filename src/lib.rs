//! Bob - a line-oriented task manager driven by free-text commands
//!
//! This library provides the core functionality for Bob, including:
//! - Data models for tasks and the ordered task list
//! - A tokenizer for the free-text command language
//! - Command construction, validation, and dispatch
//! - Flat-file persistence with a compact per-line codec
//! - Date/time parsing and formatting utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! if let Err(e) = bob::cli::run(PathBuf::from("data/bob.txt")) {
//!     eprintln!("Error: {}", e);
//!     std::process::exit(1);
//! }
//! ```

pub mod cli;
pub mod models;
pub mod storage;
pub mod utils;
