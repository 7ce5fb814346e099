//! Size-rotated log file set plus an in-memory ring of recent lines.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// The last `capacity` complete lines written
#[derive(Debug)]
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        }
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(bytes));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            if self.capacity > 0 {
                self.lines.push_back(line.trim_end().to_string());
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Writes to `<dir>/<prefix>.log`, rotating it aside once it would grow
/// past `max_bytes`. At most `max_files` files (current included) are kept.
pub struct RollingFile {
    dir: PathBuf,
    prefix: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
    rotations: u32,
    recent: Arc<Mutex<RecentLines>>,
}

impl RollingFile {
    pub fn open(
        dir: &Path,
        prefix: &str,
        max_bytes: u64,
        max_files: usize,
        recent: Arc<Mutex<RecentLines>>,
    ) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", prefix));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            max_bytes,
            max_files: max_files.max(1),
            file,
            written,
            rotations: 0,
            recent,
        })
    }

    pub fn current_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.prefix))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.rotations += 1;

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        let rotated = self
            .dir
            .join(format!("{}.{}-{:04}.log", self.prefix, stamp, self.rotations));
        fs::rename(self.current_path(), rotated)?;

        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_path())?;
        self.written = 0;
        self.prune()
    }

    /// Delete the oldest rotated files beyond the retention limit
    fn prune(&self) -> io::Result<()> {
        let current = format!("{}.log", self.prefix);
        let rotated_prefix = format!("{}.", self.prefix);

        let mut rotated: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| {
                        name != current && name.starts_with(&rotated_prefix) && name.ends_with(".log")
                    })
                    .unwrap_or(false)
            })
            .collect();
        rotated.sort();

        let keep = self.max_files - 1;
        if rotated.len() > keep {
            let excess = rotated.len() - keep;
            for path in rotated.into_iter().take(excess) {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }

        self.file.write_all(buf)?;
        self.written += buf.len() as u64;

        if let Ok(mut recent) = self.recent.lock() {
            recent.push_bytes(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
