use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::booking::Booking;
use crate::storage::{BookingRepository, StorageError};

/// File-backed ledger storage: one JSON document holding the full booking
/// list, the file itself being the `booking-storage` entry. Writes go through
/// a temp file and rename so a failed write never truncates the ledger.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const DEFAULT_PATH: &'static str = "booking-storage.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from the `BOOKING_STORAGE_PATH` environment variable, falling
    /// back to `booking-storage.json` in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var("BOOKING_STORAGE_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookingRepository for FileStore {
    fn load(&self) -> Result<Vec<Booking>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // First run: no ledger yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read(e)),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(bookings)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(StorageError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StorageError::Write)
    }
}
