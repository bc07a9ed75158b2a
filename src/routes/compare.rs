use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::state::AppState;

/*
    /api/compare
*/
pub async fn get_comparison(data: web::Data<AppState>) -> impl Responder {
    let compare = data.compare.lock().expect("compare lock poisoned");
    let villas: Vec<_> = compare
        .villa_ids()
        .iter()
        .filter_map(|id| data.catalog.villa_by_id(id))
        .collect();
    HttpResponse::Ok().json(villas)
}

/*
    /api/compare/{villa_id} (POST)
*/
pub async fn add_to_comparison(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let villa_id = path.into_inner();
    if data.catalog.villa_by_id(&villa_id).is_none() {
        return HttpResponse::NotFound().body("Villa not found");
    }
    let mut compare = data.compare.lock().expect("compare lock poisoned");
    compare.add(villa_id);
    HttpResponse::Ok().json(json!({ "villaIds": compare.villa_ids() }))
}

/*
    /api/compare/{villa_id} (DELETE)
*/
pub async fn remove_from_comparison(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let villa_id = path.into_inner();
    let mut compare = data.compare.lock().expect("compare lock poisoned");
    compare.remove(&villa_id);
    HttpResponse::Ok().json(json!({ "villaIds": compare.villa_ids() }))
}

/*
    /api/compare (DELETE)
*/
pub async fn clear_comparison(data: web::Data<AppState>) -> impl Responder {
    let mut compare = data.compare.lock().expect("compare lock poisoned");
    compare.clear();
    HttpResponse::Ok().json(json!({ "villaIds": [] }))
}
