use std::sync::OnceLock;

use chrono::{Datelike, Utc};
use rand::Rng;
use regex::Regex;
use thiserror::Error;

use crate::models::add_on::AddOnSelection;
use crate::models::booking::{
    Booking, BookingRequest, BookingStatus, HistoryAction, HistoryEntry, PaymentStatus,
};
use crate::models::quote::Quote;
use crate::models::villa::Villa;
use crate::storage::{BookingRepository, StorageError};

const BOOKING_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("booking {0} not found")]
    NotFound(String),
    #[error("cannot change status from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// The in-memory mutation was applied but the write-through failed;
    /// the caller may retry the save.
    #[error("failed to persist booking ledger: {0}")]
    Persistence(#[from] StorageError),
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,19}$").expect("valid phone pattern"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"))
}

fn require<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, BookingError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BookingError::Validation(format!("{field} is required"))),
    }
}

fn validate_phone(phone: &str) -> Result<(), BookingError> {
    if phone_regex().is_match(phone) {
        Ok(())
    } else {
        Err(BookingError::Validation(format!(
            "guestPhone '{phone}' is not a valid phone number"
        )))
    }
}

fn validate_email(email: &str) -> Result<(), BookingError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(BookingError::Validation(format!(
            "guestEmail '{email}' is not a valid email address"
        )))
    }
}

/// The booking ledger: owns the session's booking records and the write-through
/// repository. Records are held newest first, are never deleted, and every
/// mutation appends exactly one history entry before persisting.
pub struct BookingService {
    bookings: Vec<Booking>,
    repo: Box<dyn BookingRepository>,
}

impl BookingService {
    /// Open the ledger, loading any previously persisted records.
    pub fn open(repo: Box<dyn BookingRepository>) -> Result<Self, StorageError> {
        let bookings = repo.load()?;
        Ok(Self { bookings, repo })
    }

    /// Empty ledger over the given repository, ignoring any persisted state.
    pub fn empty(repo: Box<dyn BookingRepository>) -> Self {
        Self {
            bookings: Vec::new(),
            repo,
        }
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get_by_status(&self, status: BookingStatus) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.status == status).collect()
    }

    /// Look up by internal id or human-readable booking id (currently the
    /// same value, kept as two fields for future divergence).
    pub fn get_by_id(&self, id: &str) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.id == id || b.booking_id == id)
    }

    /// Assemble and record a booking from a validated guest submission.
    ///
    /// Fails without touching the ledger when a mandatory field is missing.
    /// The booking id is regenerated on the unlikely collision with an
    /// existing record.
    pub fn create_booking(
        &mut self,
        villa: &Villa,
        quote: &Quote,
        add_ons: Vec<AddOnSelection>,
        request: &BookingRequest,
    ) -> Result<Booking, BookingError> {
        let guest_name = require(&request.guest_name, "guestName")?.to_string();
        let guest_phone = require(&request.guest_phone, "guestPhone")?.to_string();
        validate_phone(&guest_phone)?;
        let check_in = request
            .check_in
            .ok_or_else(|| BookingError::Validation("checkIn is required".to_string()))?;
        let check_out = request
            .check_out
            .ok_or_else(|| BookingError::Validation("checkOut is required".to_string()))?;

        let guest_email = match request.guest_email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => {
                validate_email(email)?;
                Some(email.to_string())
            }
            _ => None,
        };
        let notes = request
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let now = Utc::now();
        let booking_id = self.unique_booking_id();
        let booking = Booking {
            id: booking_id.clone(),
            booking_id,
            villa_id: villa.id.clone(),
            guest_name,
            guest_phone,
            guest_email,
            check_in,
            check_out,
            guests: request.guests.unwrap_or(villa.capacity),
            add_ons: add_ons.into_iter().filter(|s| s.quantity > 0).collect(),
            total_price: quote.total,
            profit: quote.profit,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            notes,
            history: vec![HistoryEntry {
                action: HistoryAction::Created,
                timestamp: now,
                note: Some("Booking created via website".to_string()),
            }],
            created_at: now,
        };

        // Newest first
        self.bookings.insert(0, booking.clone());
        self.persist()?;
        Ok(booking)
    }

    /// Move a booking through the status machine, rejecting transitions the
    /// table does not allow (terminal states cannot be left).
    pub fn update_status(
        &mut self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, BookingError> {
        let index = self.index_of(id)?;
        let from = self.bookings[index].status;
        if !from.can_transition_to(status) {
            return Err(BookingError::InvalidTransition { from, to: status });
        }
        let booking = &mut self.bookings[index];
        booking.status = status;
        booking.history.push(HistoryEntry::now(
            HistoryAction::StatusChange,
            format!("Status changed to {status}"),
        ));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    pub fn update_payment_status(
        &mut self,
        id: &str,
        status: PaymentStatus,
    ) -> Result<Booking, BookingError> {
        let index = self.index_of(id)?;
        let booking = &mut self.bookings[index];
        booking.payment_status = status;
        booking.history.push(HistoryEntry::now(
            HistoryAction::Updated,
            format!("Payment status updated to {status}"),
        ));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    pub fn update_contact(
        &mut self,
        id: &str,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Booking, BookingError> {
        let guest_name = require(&name, "guestName")?.to_string();
        let guest_phone = require(&phone, "guestPhone")?.to_string();
        validate_phone(&guest_phone)?;
        let guest_email = match email.as_deref().map(str::trim) {
            Some(e) if !e.is_empty() => {
                validate_email(e)?;
                Some(e.to_string())
            }
            _ => None,
        };

        let index = self.index_of(id)?;
        let booking = &mut self.bookings[index];
        booking.guest_name = guest_name;
        booking.guest_phone = guest_phone;
        booking.guest_email = guest_email;
        booking.history.push(HistoryEntry::now(
            HistoryAction::Updated,
            "Contact details updated",
        ));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    pub fn update_notes(&mut self, id: &str, notes: Option<String>) -> Result<Booking, BookingError> {
        let index = self.index_of(id)?;
        let booking = &mut self.bookings[index];
        booking.notes = notes.filter(|n| !n.trim().is_empty());
        booking
            .history
            .push(HistoryEntry::now(HistoryAction::Updated, "Notes updated"));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    pub fn update_guest_count(&mut self, id: &str, guests: u32) -> Result<Booking, BookingError> {
        if guests == 0 {
            return Err(BookingError::Validation(
                "guests must be at least 1".to_string(),
            ));
        }
        let index = self.index_of(id)?;
        let booking = &mut self.bookings[index];
        booking.guests = guests;
        booking.history.push(HistoryEntry::now(
            HistoryAction::Updated,
            format!("Guest count updated to {guests}"),
        ));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    /// Move a booking to new dates. The stay must be re-confirmed afterwards,
    /// so the status is forced back to pending regardless of where it was.
    pub fn reschedule(
        &mut self,
        id: &str,
        new_check_in: chrono::NaiveDate,
        new_check_out: chrono::NaiveDate,
    ) -> Result<Booking, BookingError> {
        if new_check_out <= new_check_in {
            return Err(BookingError::Validation(
                "checkOut must be after checkIn".to_string(),
            ));
        }
        let index = self.index_of(id)?;
        let booking = &mut self.bookings[index];
        booking.check_in = new_check_in;
        booking.check_out = new_check_out;
        booking.status = BookingStatus::Pending;
        booking.history.push(HistoryEntry::now(
            HistoryAction::Rescheduled,
            format!("Rescheduled to {new_check_in} - {new_check_out}"),
        ));
        let booking = booking.clone();
        self.persist()?;
        Ok(booking)
    }

    fn index_of(&self, id: &str) -> Result<usize, BookingError> {
        self.bookings
            .iter()
            .position(|b| b.id == id || b.booking_id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.repo.save(&self.bookings)
    }

    /// VB-YYMM-XXXX with a fresh random suffix; regenerated until it does not
    /// clash with a ledger entry. Uniqueness is probabilistic (36^4 suffixes
    /// per month), the retry only guards against same-session collisions.
    fn unique_booking_id(&self) -> String {
        loop {
            let id = generate_booking_id();
            if self.get_by_id(&id).is_none() {
                return id;
            }
            log::warn!("booking id collision on {id}, regenerating");
        }
    }
}

/// Human-readable booking identifier: VB-YYMM-XXXX, where YYMM encodes the
/// creation year and month.
pub fn generate_booking_id() -> String {
    let now = Utc::now();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..4)
        .map(|_| BOOKING_ID_CHARSET[rng.gen_range(0..BOOKING_ID_CHARSET.len())] as char)
        .collect();
    format!("VB-{:02}{:02}-{}", now.year() % 100, now.month(), suffix)
}
