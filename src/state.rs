use std::sync::Mutex;

use crate::catalog::Catalog;
use crate::models::compare::ComparisonSet;
use crate::services::booking_service::BookingService;

/// Shared application state handed to every route handler. The ledger sits
/// behind one mutex: single-writer, matching the one-session model of the
/// booking funnel. The comparison set is session-scoped and never persisted.
pub struct AppState {
    pub catalog: Catalog,
    pub ledger: Mutex<BookingService>,
    pub compare: Mutex<ComparisonSet>,
    pub whatsapp_number: String,
}

impl AppState {
    pub fn new(catalog: Catalog, ledger: BookingService, whatsapp_number: String) -> Self {
        Self {
            catalog,
            ledger: Mutex::new(ledger),
            compare: Mutex::new(ComparisonSet::new()),
            whatsapp_number,
        }
    }
}
