// Adapters layer: concrete log sinks behind the `LogSink` port.

use crate::domain::model::{LogEntry, LogLevel};
use crate::domain::ports::LogSink;
use crate::utils::error::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Append-only text journal, one `timestamp - LEVEL - message` line per
/// entry. Warnings and errors are additionally mirrored to stderr.
pub struct FileLogSink {
    file: Mutex<File>,
}

impl FileLogSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let line = format!("{} - {} - {}", timestamp, level, message);

        if let Ok(mut file) = self.file.lock() {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("log write failed: {}", e);
            }
        }

        if level >= LogLevel::Warning {
            eprintln!("{} - {}", level, message);
        }
    }
}

/// In-process capture of journal entries, for embedding and for tests that
/// assert on emitted events instead of reading the log file.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("sink poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().expect("sink poisoned").push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}
