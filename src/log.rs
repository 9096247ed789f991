//! Run logging with rotation.
//!
//! Records each pipeline run (ingestion counts, feasibility verdicts,
//! generation outcomes) to a file, rotating it when it grows past a
//! configurable line limit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default maximum number of lines before rotation.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Log file name within the log directory.
pub const LOG_FILE: &str = "teamforge.log";

/// Logger for pipeline runs.
pub struct RunLogger {
    /// Path to the log file.
    pub path: PathBuf,
    /// Maximum lines before rotation.
    pub max_lines: usize,
}

impl RunLogger {
    /// Create a logger writing to `<log_dir>/teamforge.log`.
    pub fn new(log_dir: &Path) -> Self {
        Self {
            path: log_dir.join(LOG_FILE),
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Create a logger with a custom max lines setting.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Write a log entry.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS | <message>`
    pub fn log(&self, message: &str) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} | {}\n", timestamp, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;
        file.flush()?;

        self.rotate_if_needed()?;

        Ok(())
    }

    /// Write a separator marking the start of a new command run.
    pub fn log_run_start(&self, command: &str) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = format!(
            "\n=== {} run started at {} ===\n",
            command, timestamp
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(separator.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Ensure the log directory exists.
    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Check and rotate the log if it exceeds max lines.
    fn rotate_if_needed(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let line_count = count_lines(&self.path)?;
        if line_count <= self.max_lines {
            return Ok(());
        }

        rotate_log(&self.path)?;
        Ok(())
    }

    /// Get the current line count of the log file.
    pub fn line_count(&self) -> io::Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }
        count_lines(&self.path)
    }
}

/// Count lines in a file.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(reader.lines().count())
}

/// Rotate a log file.
///
/// Creates a timestamped backup and clears the original file.
pub fn rotate_log(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("log"),
        timestamp
    );
    let backup_path = path.with_file_name(backup_name);

    fs::rename(path, &backup_path)?;
    File::create(path)?;

    Ok(())
}
