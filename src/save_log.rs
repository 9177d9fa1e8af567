// src/save_log.rs - Append-only record of successful saves

use log::debug;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_HISTORY_FILE: &str = ".wilx_history";

/// One successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    /// Seconds since the UNIX epoch
    pub timestamp: u64,
    pub path: PathBuf,
}

impl SaveRecord {
    pub fn now(path: impl Into<PathBuf>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            path: path.into(),
        }
    }

    /// `<timestamp>\t<path>\n`
    pub fn to_line(&self) -> String {
        format!("{}\t{}\n", self.timestamp, self.path.display())
    }
}

/// Sink for save records. Implementations may fail; the editor logs the
/// failure and carries on with the save.
pub trait SaveLog {
    fn record(&mut self, record: &SaveRecord) -> io::Result<()>;
}

/// Drops every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSaveLog;

impl SaveLog for NullSaveLog {
    fn record(&mut self, _record: &SaveRecord) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps records in memory. Clones share the same record list, so a caller
/// can keep one handle while the editor owns another.
#[derive(Debug, Default, Clone)]
pub struct MemorySaveLog {
    records: Rc<RefCell<Vec<SaveRecord>>>,
}

impl MemorySaveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SaveRecord> {
        self.records.borrow().clone()
    }
}

impl SaveLog for MemorySaveLog {
    fn record(&mut self, record: &SaveRecord) -> io::Result<()> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }
}

/// Appends one line per record to a history file
#[derive(Debug, Clone)]
pub struct FileSaveLog {
    path: PathBuf,
}

impl FileSaveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.wilx_history`, if a home directory is known
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_HISTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveLog for FileSaveLog {
    fn record(&mut self, record: &SaveRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.to_line().as_bytes())?;
        debug!("recorded save of {} in {}", record.path.display(), self.path.display());
        Ok(())
    }
}
