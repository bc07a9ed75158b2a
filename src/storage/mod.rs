mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::booking::Booking;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read booking storage: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write booking storage: {0}")]
    Write(#[source] std::io::Error),
    #[error("booking storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistence seam for the booking ledger. The whole ledger is written on
/// every mutation; implementations must round-trip every field, including
/// history order.
pub trait BookingRepository: Send {
    fn load(&self) -> Result<Vec<Booking>, StorageError>;
    fn save(&self, bookings: &[Booking]) -> Result<(), StorageError>;
}
