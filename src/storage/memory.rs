use std::sync::Mutex;

use crate::models::booking::Booking;
use crate::storage::{BookingRepository, StorageError};

/// In-memory repository for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for MemoryStore {
    fn load(&self) -> Result<Vec<Booking>, StorageError> {
        Ok(self.bookings.lock().expect("storage lock poisoned").clone())
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        *self.bookings.lock().expect("storage lock poisoned") = bookings.to_vec();
        Ok(())
    }
}
