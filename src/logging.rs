//! Logging utilities
//!
//! Tracing subscriber setup plus a size-based rolling file writer used when
//! `--log-file` is given.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default maximum log file size (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 5;

/// Install the global JSON subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. With `log_file`, records are
/// also written to a rolling file.
pub fn init_tracing(log_level: &str, log_file: Option<&Path>) -> io::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let console_layer = fmt::layer().json().with_filter(filter());
    let subscriber = tracing_subscriber::registry().with(console_layer);

    match log_file {
        Some(path) => {
            let writer = RollingFileWriter::with_defaults(path)?;
            let file_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            subscriber.with(file_layer).init();
            tracing::info!(path = %path.display(), "File logging enabled");
        }
        None => subscriber.init(),
    }

    Ok(())
}

/// Rolling log file: `app.log` is active, `app.log.1` is the newest rotated
/// file and `app.log.{max_files}` the oldest.
#[derive(Debug, Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<RollingState>>,
}

#[derive(Debug)]
struct RollingState {
    path: PathBuf,
    file: File,
    written: u64,
    max_size: u64,
    max_files: usize,
}

impl RollingFileWriter {
    pub fn new(path: impl AsRef<Path>, max_size: u64, max_files: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log path has no file name: {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let written = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let file = open_append(&path)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(RollingState {
                path,
                file,
                written,
                max_size,
                max_files,
            })),
        })
    }

    pub fn with_defaults(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::new(path, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES)
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, RollingState>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl RollingState {
    fn rotated(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated(index);
            if from.exists() {
                fs::rename(&from, self.rotated(index + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated(1))?;

        self.file = open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock()?;

        if state.written > 0 && state.written + buf.len() as u64 > state.max_size {
            state.rotate()?;
        }

        let n = state.file.write(buf)?;
        state.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.file.flush()
    }
}

impl<'a> fmt::MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
