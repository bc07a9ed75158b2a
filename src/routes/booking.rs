use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::catalog::Catalog;
use crate::models::add_on::AddOnSelection;
use crate::models::booking::{AddOnChoice, BookingRequest, BookingStatus, PaymentStatus};
use crate::models::quote::QuoteRequest;
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::handoff_service;
use crate::services::pricing_service::PricingService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    status: Option<BookingStatus>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    status: BookingStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    guest_name: Option<String>,
    guest_phone: Option<String>,
    guest_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotesUpdate {
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GuestsUpdate {
    guests: u32,
}

fn error_response(err: BookingError) -> HttpResponse {
    match &err {
        BookingError::Validation(_) => HttpResponse::BadRequest().json(json!({
            "error": err.to_string(),
        })),
        BookingError::NotFound(_) => HttpResponse::NotFound().json(json!({
            "error": err.to_string(),
        })),
        BookingError::InvalidTransition { .. } => HttpResponse::Conflict().json(json!({
            "error": err.to_string(),
        })),
        BookingError::Persistence(_) => {
            log::error!("ledger write failed: {err}");
            HttpResponse::ServiceUnavailable().json(json!({
                "error": err.to_string(),
                "retryable": true,
            }))
        }
    }
}

fn resolve_selections(
    catalog: &Catalog,
    choices: &[AddOnChoice],
) -> Result<Vec<AddOnSelection>, HttpResponse> {
    choices
        .iter()
        .map(|choice| {
            catalog
                .add_on_by_id(&choice.add_on_id)
                .map(|add_on| AddOnSelection::new(add_on, choice.quantity))
                .ok_or_else(|| {
                    HttpResponse::BadRequest().json(json!({
                        "error": format!("Unknown add-on: {}", choice.add_on_id),
                    }))
                })
        })
        .collect()
}

/*
    /api/quote (POST)
*/
pub async fn compute_quote(
    input: web::Json<QuoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = input.into_inner();
    let villa = match data.catalog.villa_by_id(&input.villa_id) {
        Some(villa) => villa,
        None => return HttpResponse::NotFound().body("Villa not found"),
    };
    let selections = match resolve_selections(&data.catalog, &input.add_ons) {
        Ok(selections) => selections,
        Err(resp) => return resp,
    };

    let quote = PricingService::compute_quote(
        villa,
        input.check_in,
        input.check_out,
        &selections,
        data.catalog.high_season_periods(),
    );
    HttpResponse::Ok().json(quote)
}

/*
    /api/bookings (POST)
*/
pub async fn create_booking(
    input: web::Json<BookingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = input.into_inner();
    let villa = match input
        .villa_id
        .as_deref()
        .and_then(|id| data.catalog.villa_by_id(id))
    {
        Some(villa) => villa,
        None => return HttpResponse::NotFound().body("Villa not found"),
    };
    let selections = match resolve_selections(&data.catalog, &input.add_ons) {
        Ok(selections) => selections,
        Err(resp) => return resp,
    };

    let quote = PricingService::compute_quote(
        villa,
        input.check_in,
        input.check_out,
        &selections,
        data.catalog.high_season_periods(),
    );

    let mut ledger = data.ledger.lock().expect("ledger lock poisoned");
    match ledger.create_booking(villa, &quote, selections, &input) {
        Ok(booking) => {
            let summary = handoff_service::booking_summary(&booking, villa);
            let link = handoff_service::whatsapp_link(&data.whatsapp_number, &summary);
            log::info!("booking {} created for {}", booking.booking_id, villa.name);
            HttpResponse::Created().json(json!({
                "booking": booking,
                "whatsappLink": link,
            }))
        }
        Err(err) => error_response(err),
    }
}

/*
    /api/bookings?status=pending
*/
pub async fn list_bookings(
    query: web::Query<BookingListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ledger = data.ledger.lock().expect("ledger lock poisoned");
    match query.status {
        Some(status) => HttpResponse::Ok().json(ledger.get_by_status(status)),
        None => HttpResponse::Ok().json(ledger.all()),
    }
}

/*
    /api/bookings/{id}
*/
pub async fn get_booking(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    let ledger = data.ledger.lock().expect("ledger lock poisoned");
    match ledger.get_by_id(&id) {
        Some(booking) => HttpResponse::Ok().json(booking),
        None => HttpResponse::NotFound().body("Booking not found"),
    }
}

fn apply<F>(data: &web::Data<AppState>, mutate: F) -> HttpResponse
where
    F: FnOnce(&mut BookingService) -> Result<crate::models::booking::Booking, BookingError>,
{
    let mut ledger = data.ledger.lock().expect("ledger lock poisoned");
    match mutate(&mut ledger) {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(err) => error_response(err),
    }
}

/*
    /api/bookings/{id}/status (PUT)
*/
pub async fn update_status(
    path: web::Path<String>,
    input: web::Json<StatusUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    apply(&data, |ledger| ledger.update_status(&id, input.status))
}

/*
    /api/bookings/{id}/payment (PUT)
*/
pub async fn update_payment_status(
    path: web::Path<String>,
    input: web::Json<PaymentUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    apply(&data, |ledger| {
        ledger.update_payment_status(&id, input.payment_status)
    })
}

/*
    /api/bookings/{id}/reschedule (PUT)
*/
pub async fn reschedule(
    path: web::Path<String>,
    input: web::Json<RescheduleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    apply(&data, |ledger| {
        ledger.reschedule(&id, input.check_in, input.check_out)
    })
}

/*
    /api/bookings/{id}/contact (PUT)
*/
pub async fn update_contact(
    path: web::Path<String>,
    input: web::Json<ContactUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = input.into_inner();
    apply(&data, |ledger| {
        ledger.update_contact(&id, input.guest_name, input.guest_phone, input.guest_email)
    })
}

/*
    /api/bookings/{id}/notes (PUT)
*/
pub async fn update_notes(
    path: web::Path<String>,
    input: web::Json<NotesUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let input = input.into_inner();
    apply(&data, |ledger| ledger.update_notes(&id, input.notes))
}

/*
    /api/bookings/{id}/guests (PUT)
*/
pub async fn update_guest_count(
    path: web::Path<String>,
    input: web::Json<GuestsUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    apply(&data, |ledger| ledger.update_guest_count(&id, input.guests))
}
