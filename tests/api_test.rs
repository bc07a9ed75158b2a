use actix_web::{test, web, App};
use serde_json::json;

use villa_booking_api::catalog::Catalog;
use villa_booking_api::routes;
use villa_booking_api::services::booking_service::BookingService;
use villa_booking_api::state::AppState;
use villa_booking_api::storage::MemoryStore;

fn test_state() -> web::Data<AppState> {
    let ledger = BookingService::empty(Box::new(MemoryStore::new()));
    web::Data::new(AppState::new(
        Catalog::seed(),
        ledger,
        "6281234567890".to_string(),
    ))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .route("/health", web::get().to(|| async { "OK" }))
                .configure(routes::configure),
        )
        .await
    };
}

fn booking_body() -> serde_json::Value {
    json!({
        "villaId": "villa-001",
        "guestName": "Budi Santoso",
        "guestPhone": "081234567890",
        "guestEmail": "budi@example.com",
        "checkIn": "2025-09-13",
        "checkOut": "2025-09-15",
        "addOns": [{"addOnId": "addon-bbq", "quantity": 2}],
        "notes": "Datang sore"
    })
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
async fn test_list_villas() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get().uri("/api/villas").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let villas = body.as_array().unwrap();
    assert!(!villas.is_empty());
    assert!(villas.iter().any(|v| v["slug"] == "villa-pinus-hill"));
}

#[actix_rt::test]
async fn test_get_villa_by_slug() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get()
        .uri("/api/villas/villa-pinus-hill")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Villa Pinus Hill");
    assert_eq!(body["capacity"], 4);

    let req = test::TestRequest::get()
        .uri("/api/villas/no-such-villa")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_search_villas_with_filters() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/villas/search")
        .set_json(json!({
            "hasPool": true,
            "minCapacity": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["activeFilterCount"], 2);
    for villa in body["villas"].as_array().unwrap() {
        assert_eq!(villa["hasPool"], true);
        assert!(villa["capacity"].as_u64().unwrap() >= 6);
    }
}

#[actix_rt::test]
async fn test_quote_for_weekend_stay() {
    let app = test_app!(test_state());
    // 2025-09-13 is a Saturday: weekend rate 1.2M x 2 nights, capacity 4
    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(json!({
            "villaId": "villa-001",
            "checkIn": "2025-09-13",
            "checkOut": "2025-09-15"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["tier"], "weekend");
    assert_eq!(body["nights"], 2);
    assert_eq!(body["baseSell"], 2_400_000);
    assert_eq!(body["total"], 2_400_000);
    assert_eq!(body["pricePerGuest"], 600_000);
}

#[actix_rt::test]
async fn test_quote_rejects_unknown_add_on() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/quote")
        .set_json(json!({
            "villaId": "villa-001",
            "addOns": [{"addOnId": "addon-helicopter", "quantity": 1}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_create_booking_and_fetch_it() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let booking = &body["booking"];
    let id = booking["bookingId"].as_str().unwrap();
    assert!(id.starts_with("VB-"));
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["paymentStatus"], "unpaid");
    // Weekend rate x2 nights + BBQ x2
    assert_eq!(booking["totalPrice"], 2_700_000);
    assert_eq!(booking["history"].as_array().unwrap().len(), 1);

    let link = body["whatsappLink"].as_str().unwrap();
    assert!(link.starts_with("https://wa.me/6281234567890?text="));

    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched["bookingId"], id);
}

#[actix_rt::test]
async fn test_booking_without_phone_is_rejected_and_ledger_stays_empty() {
    let app = test_app!(test_state());
    let mut body = booking_body();
    body.as_object_mut().unwrap().remove("guestPhone");

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::get().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let bookings: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(bookings.as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_status_lifecycle_over_http() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["booking"]["bookingId"].as_str().unwrap().to_string();

    // Skipping confirmation is rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/bookings/{id}/status"))
        .set_json(json!({"status": "completed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let req = test::TestRequest::put()
        .uri(&format!("/api/bookings/{id}/status"))
        .set_json(json!({"status": "confirmed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["history"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_reschedule_resets_status_to_pending() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["booking"]["bookingId"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/bookings/{id}/status"))
        .set_json(json!({"status": "confirmed"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/bookings/{id}/reschedule"))
        .set_json(json!({"checkIn": "2025-10-03", "checkOut": "2025-10-05"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "pending");
    assert_eq!(updated["checkIn"], "2025-10-03");
    assert_eq!(updated["checkOut"], "2025-10-05");
}

#[actix_rt::test]
async fn test_list_bookings_filtered_by_status() {
    let app = test_app!(test_state());
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(booking_body())
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/bookings?status=pending")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let pending: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(pending.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/bookings?status=confirmed")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let confirmed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(confirmed.as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_monthly_report_aggregates_current_month() {
    let app = test_app!(test_state());
    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(booking_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // Bookings are created now, so the default (current-month) report sees them
    let req = test::TestRequest::get()
        .uri("/api/reports/monthly")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let report: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(report["bookingCount"], 1);
    assert_eq!(report["totalRevenue"], 2_700_000);
    // Room margin only: weekend sell 1.2M vs owner 850k, x2 nights
    assert_eq!(report["totalProfit"], 700_000);
    assert_eq!(report["ownerShare"], 2_000_000);
}

#[actix_rt::test]
async fn test_comparison_set_is_bounded_to_three() {
    let app = test_app!(test_state());
    for id in ["villa-001", "villa-002", "villa-003", "villa-004"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/compare/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/compare").to_request();
    let resp = test::call_service(&app, req).await;
    let villas: serde_json::Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = villas
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    // Oldest entry was evicted
    assert_eq!(ids, ["villa-002", "villa-003", "villa-004"]);
}

#[actix_rt::test]
async fn test_unknown_booking_returns_404() {
    let app = test_app!(test_state());
    let req = test::TestRequest::get()
        .uri("/api/bookings/VB-0000-ZZZZ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::put()
        .uri("/api/bookings/VB-0000-ZZZZ/status")
        .set_json(json!({"status": "confirmed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
