//! Rolling Logger
//!
//! File logger installed as the global `tracing` subscriber. `log` records
//! from library crates are forwarded into it as well.
//!
//! - Writes to `<log_dir>/<app_name>.log`
//! - Rotates to `<app_name>.log.1` once the file passes `max_bytes`
//! - Keeps the last `keep_lines` lines in memory for in-app display

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Logger not initialized")]
    NotInitialized,
    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Size at which the log file is rotated
    pub max_bytes: u64,
    /// Lines kept in the in-memory buffer
    pub keep_lines: usize,
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            keep_lines: 500,
            level: Level::DEBUG,
        }
    }
}

impl LoggerConfig {
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn keep_lines(mut self, keep_lines: usize) -> Self {
        self.keep_lines = keep_lines;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

struct Inner {
    file: File,
    written: u64,
    recent: VecDeque<String>,
    partial: String,
}

/// Log file with size-based rotation and a circular buffer of recent lines
pub struct RollingFile {
    path: PathBuf,
    config: LoggerConfig,
    inner: Mutex<Inner>,
}

impl RollingFile {
    /// Open (append) `<log_dir>/<app_name>.log`, creating the directory if needed
    pub fn open(
        log_dir: impl AsRef<Path>,
        app_name: &str,
        config: LoggerConfig,
    ) -> Result<Self, LoggerError> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;
        let path = log_dir.join(format!("{}.log", app_name));
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                file,
                written,
                recent: VecDeque::with_capacity(config.keep_lines),
                partial: String::new(),
            }),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotated_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Most recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.recent.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().recent.iter().cloned().collect(),
        }
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log lock poisoned"))?;

        if inner.written > 0 && inner.written + buf.len() as u64 > self.config.max_bytes {
            inner.file.flush()?;
            fs::rename(&self.path, self.rotated_path())?;
            inner.file = open_append(&self.path)?;
            inner.written = 0;
        }

        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;

        let text = String::from_utf8_lossy(buf);
        inner.partial.push_str(&text);
        while let Some(pos) = inner.partial.find('\n') {
            let line: String = inner.partial.drain(..=pos).collect();
            push_line(&mut inner.recent, self.config.keep_lines, line.trim_end().to_string());
        }
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn push_line(recent: &mut VecDeque<String>, cap: usize, line: String) {
    if cap == 0 {
        return;
    }
    while recent.len() >= cap {
        recent.pop_front();
    }
    recent.push_back(line);
}

/// `MakeWriter` handle shared with the subscriber
#[derive(Clone)]
pub struct RollingWriter(Arc<RollingFile>);

impl RollingWriter {
    pub fn new(file: Arc<RollingFile>) -> Self {
        Self(file)
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .0
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log lock poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static LOGGER: OnceLock<Arc<RollingFile>> = OnceLock::new();

/// Install the global logger with default settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let level = config.level;
    let file = Arc::new(RollingFile::open(log_dir, app_name, config)?);

    tracing_subscriber::fmt()
        .with_writer(RollingWriter::new(file.clone()))
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(file)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!("{} logger started", app_name);
    Ok(())
}

fn logger() -> Result<&'static Arc<RollingFile>, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    logger()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    logger()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Recent lines of the global logger, oldest first
pub fn recent_lines() -> Result<Vec<String>, LoggerError> {
    Ok(logger()?.recent_lines())
}

/// Path of the active log file
pub fn log_path() -> Result<PathBuf, LoggerError> {
    Ok(logger()?.path().to_path_buf())
}
