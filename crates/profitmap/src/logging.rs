//! Tracing setup for both front ends.

#[cfg(feature = "native")]
pub use native::init_logging;

/// Route `tracing` events to the browser console
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}

#[cfg(feature = "native")]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{Read, Seek, SeekFrom, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    /// Log file size that triggers truncation (5 MB)
    const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
    /// Tail kept after truncation (1 MB)
    const KEEP_SIZE: u64 = 1024 * 1024;

    const ROTATED_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

    /// Cut the log down to its last `keep` bytes once it grows past `max`,
    /// starting at a line boundary.
    pub(super) fn rotate_log_if_needed(log_path: &Path, max: u64, keep: u64) -> std::io::Result<()> {
        if !log_path.exists() {
            return Ok(());
        }

        let len = fs::metadata(log_path)?.len();
        if len <= max {
            return Ok(());
        }

        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        let mut tail = Vec::new();
        file.read_to_end(&mut tail)?;
        drop(file);

        let skip = tail
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut file = File::create(log_path)?;
        file.write_all(ROTATED_MARKER)?;
        file.write_all(&tail[skip..])?;
        Ok(())
    }

    /// Hands out writers sharing one log file
    #[derive(Clone)]
    struct LogWriterFactory {
        file: Arc<Mutex<File>>,
    }

    struct LogWriter {
        file: Arc<Mutex<File>>,
    }

    impl LogWriter {
        fn with_file<T>(
            &self,
            f: impl FnOnce(&mut File) -> std::io::Result<T>,
        ) -> std::io::Result<T> {
            let mut file = self
                .file
                .lock()
                .map_err(|_| std::io::Error::other("log file lock poisoned"))?;
            f(&mut file)
        }
    }

    impl Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.with_file(|file| file.write(buf))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.with_file(|file| file.flush())
        }
    }

    impl<'a> MakeWriter<'a> for LogWriterFactory {
        type Writer = LogWriter;

        fn make_writer(&'a self) -> Self::Writer {
            LogWriter {
                file: Arc::clone(&self.file),
            }
        }
    }

    /// Initialize logging to `{data_dir}/profitmap.log`.
    ///
    /// The terminal belongs to the dashboard, so nothing is written to stdout.
    /// `RUST_LOG` takes precedence over `level`.
    pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;
        let log_path = data_dir.join("profitmap.log");

        if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
            eprintln!("Warning: Failed to rotate log file: {}", e);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        let writer_factory = LogWriterFactory {
            file: Arc::new(Mutex::new(file)),
        };

        let default_filter = format!("profitmap={level},profitmap_core=warn");
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer_factory)
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init()?;

        tracing::info!(log_path = %log_path.display(), "Logging initialized");
        Ok(())
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::native::rotate_log_if_needed;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_small_log_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profitmap.log");
        fs::write(&path, "one\ntwo\n").unwrap();

        rotate_log_if_needed(&path, 100, 10).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");

        // Missing file is not an error
        rotate_log_if_needed(&temp_dir.path().join("missing.log"), 100, 10).unwrap();
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profitmap.log");
        let lines: String = (0..50).map(|i| format!("line {i:02}\n")).collect();
        fs::write(&path, &lines).unwrap();

        rotate_log_if_needed(&path, 100, 30).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("--- Log rotated"));
        assert!(content.ends_with("line 49\n"));
        let kept: Vec<&str> = content.lines().skip(1).collect();
        assert!(kept.iter().all(|line| line.starts_with("line ")));
        assert!(kept.len() < 5);
    }
}
