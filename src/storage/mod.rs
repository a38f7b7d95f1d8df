// Flat-file persistence for the task list

pub mod codec;

use crate::models::TaskList;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A persisted record could not be decoded. Line numbers are 1-based.
    #[error("data file is corrupted at line {line}")]
    Corrupted { line: usize },
    /// The backing file or its parent directory could not be read or
    /// written; this signals an environment problem, not bad data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// File-backed store holding one encoded task per line, in list order.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list, creating the backing file (and its parents) if
    /// absent. The first undecodable line fails the whole load; no partial
    /// recovery is attempted.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        if !self.path.exists() {
            self.create_file()?;
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut tasks = TaskList::new();
        for (i, line) in contents.lines().enumerate() {
            let task = codec::decode(line).map_err(|_| StorageError::Corrupted { line: i + 1 })?;
            tasks.push(task);
        }

        log::debug!("loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Truncate and rewrite the backing file with one record per task.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        self.create_parent_dirs()?;

        let mut contents = String::new();
        for task in tasks.iter() {
            contents.push_str(&codec::encode(task));
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;

        log::debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn create_file(&self) -> std::io::Result<()> {
        self.create_parent_dirs()?;
        fs::File::create(&self.path)?;
        Ok(())
    }

    fn create_parent_dirs(&self) -> std::io::Result<()> {
        // parent() yields Some("") for a bare filename; nothing to create.
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
