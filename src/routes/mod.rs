pub mod booking;
pub mod compare;
pub mod report;
pub mod villa;

use actix_web::web;

/// Route table under /api, shared by the server binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/villas")
                    .route("", web::get().to(villa::get_villas))
                    .route("/search", web::post().to(villa::search_villas))
                    .route("/{slug}", web::get().to(villa::get_villa_by_slug)),
            )
            .route("/add-ons", web::get().to(villa::get_add_ons))
            .route("/quote", web::post().to(booking::compute_quote))
            .service(
                web::scope("/bookings")
                    .route("", web::post().to(booking::create_booking))
                    .route("", web::get().to(booking::list_bookings))
                    .route("/{id}", web::get().to(booking::get_booking))
                    .route("/{id}/status", web::put().to(booking::update_status))
                    .route("/{id}/payment", web::put().to(booking::update_payment_status))
                    .route("/{id}/reschedule", web::put().to(booking::reschedule))
                    .route("/{id}/contact", web::put().to(booking::update_contact))
                    .route("/{id}/notes", web::put().to(booking::update_notes))
                    .route("/{id}/guests", web::put().to(booking::update_guest_count)),
            )
            .service(
                web::scope("/compare")
                    .route("", web::get().to(compare::get_comparison))
                    .route("", web::delete().to(compare::clear_comparison))
                    .route("/{villa_id}", web::post().to(compare::add_to_comparison))
                    .route(
                        "/{villa_id}",
                        web::delete().to(compare::remove_from_comparison),
                    ),
            )
            .route("/reports/monthly", web::get().to(report::monthly_report)),
    );
}
