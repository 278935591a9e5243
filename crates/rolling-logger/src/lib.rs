//! Rolling Logger
//!
//! File logger for Tauri apps: one log file per day inside the app log
//! directory, old days pruned, and a small in-memory ring of the most recent
//! lines. `log` records are bridged into the same `tracing` subscriber, so
//! both `log::info!` and the helpers below end up in the file.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Number of daily files kept on disk
pub const DEFAULT_MAX_FILES: usize = 7;
/// Lines kept in memory for `recent_lines`
pub const DEFAULT_RECENT_CAPACITY: usize = 200;

static SINK: OnceLock<Arc<Sink>> = OnceLock::new();

// ========================
// Daily files
// ========================

/// Append-only log file that switches to a new file when the date changes.
pub struct RollingFile {
    dir: PathBuf,
    prefix: String,
    max_files: usize,
    current_date: String,
    file: Option<File>,
}

impl RollingFile {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str, max_files: usize) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.to_string(),
            max_files: max_files.max(1),
            current_date: String::new(),
            file: None,
        })
    }

    /// Path of the file for a given `YYYY-MM-DD` date
    pub fn path_for(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.prefix, date))
    }

    fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }

    fn roll_if_needed(&mut self) -> io::Result<()> {
        let today = Self::today();
        if self.file.is_some() && today == self.current_date {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_for(&today))?;
        self.file = Some(file);
        self.current_date = today;
        self.prune()
    }

    /// Delete the oldest log files so at most `max_files` remain
    pub fn prune(&self) -> io::Result<()> {
        let mut logs = list_logs(&self.dir, &self.prefix)?;
        if logs.len() <= self.max_files {
            return Ok(());
        }
        // Dates sort lexically
        logs.sort();
        let excess = logs.len() - self.max_files;
        for path in logs.into_iter().take(excess) {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.roll_if_needed()?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(bytes)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn list_logs(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    let head = format!("{}-", prefix);
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(&head) && n.ends_with(".log"))
            .unwrap_or(false);
        if is_log {
            out.push(path);
        }
    }
    Ok(out)
}

// ========================
// Circular buffer
// ========================

/// Fixed-capacity ring of recent log lines
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

// ========================
// Subscriber wiring
// ========================

struct Sink {
    file: Mutex<RollingFile>,
    recent: Mutex<RecentLines>,
}

#[derive(Clone)]
struct SinkWriter(Arc<Sink>);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut file) = self.0.file.lock() {
            file.write_line(buf)?;
        }
        if let Ok(mut recent) = self.0.recent.lock() {
            let line = String::from_utf8_lossy(buf).trim_end().to_string();
            if !line.is_empty() {
                recent.push(line);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Install the global subscriber writing to `<log_dir>/<app_name>-YYYY-MM-DD.log`.
///
/// Can only succeed once per process.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = RollingFile::new(log_dir, app_name, DEFAULT_MAX_FILES)
        .map_err(|e| format!("Failed to open log dir: {}", e))?;
    let sink = Arc::new(Sink {
        file: Mutex::new(file),
        recent: Mutex::new(RecentLines::new(DEFAULT_RECENT_CAPACITY)),
    });

    SINK.set(sink.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing_subscriber::fmt()
        .with_writer(move || SinkWriter(sink.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))
}

fn ensure_initialized() -> Result<(), String> {
    SINK.get()
        .map(|_| ())
        .ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!(target: "app", "{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!(target: "app", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!(target: "app", "{}", msg);
    Ok(())
}

/// Most recent formatted lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    SINK.get()
        .and_then(|sink| sink.recent.lock().ok().map(|r| r.snapshot()))
        .unwrap_or_default()
}
