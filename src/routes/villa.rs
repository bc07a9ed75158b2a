use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::filter::VillaFilter;
use crate::state::AppState;

/*
    /api/villas
*/
pub async fn get_villas(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.catalog.villas())
}

/*
    /api/villas/{slug}
*/
pub async fn get_villa_by_slug(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    match data.catalog.villa_by_slug(&slug) {
        Some(villa) => HttpResponse::Ok().json(villa),
        None => HttpResponse::NotFound().body("Villa not found"),
    }
}

/*
    /api/villas/search (POST, body: VillaFilter)
*/
pub async fn search_villas(
    filter: web::Json<VillaFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = filter.into_inner();
    let matches: Vec<_> = data
        .catalog
        .villas()
        .iter()
        .filter(|v| filter.matches(v))
        .collect();

    HttpResponse::Ok().json(json!({
        "activeFilterCount": filter.active_filter_count(),
        "count": matches.len(),
        "villas": matches,
    }))
}

/*
    /api/add-ons
*/
pub async fn get_add_ons(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.catalog.add_ons())
}
