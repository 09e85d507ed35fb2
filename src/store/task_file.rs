use super::record::Record;
use super::StoreError;
use crate::libs::messages::Message;
use crate::msg_debug;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A task list backed by a single text file.
///
/// The store holds no records between calls: [`TaskFile::load`] reads the
/// whole file each time and [`TaskFile::save`] truncates and rewrites it.
#[derive(Debug, Clone)]
pub struct TaskFile<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: Record> TaskFile<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskFile {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is an empty list; any malformed
    /// line fails the whole load.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                msg_debug!(Message::TaskFileMissing(self.path.display().to_string()));
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|err| self.io_error(err))?;
            records.push(R::decode(&line, index + 1)?);
        }

        msg_debug!(Message::TasksLoaded(records.len(), self.path.display().to_string()));
        Ok(records)
    }

    /// Replaces the file's contents with `records`, one per line.
    pub fn save(&self, records: &[R]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let file = File::create(&self.path).map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writeln!(writer, "{}", record.encode()).map_err(|err| self.io_error(err))?;
        }
        writer.flush().map_err(|err| self.io_error(err))?;

        msg_debug!(Message::TasksSaved(records.len(), self.path.display().to_string()));
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
