use actix_web::{web, HttpResponse, Responder};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::services::report_service::ReportService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthlyReportQuery {
    year: Option<i32>,
    month: Option<u32>,
}

/*
    /api/reports/monthly?year=2025&month=9 (defaults to the current month)
*/
pub async fn monthly_report(
    query: web::Query<MonthlyReportQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let now = Utc::now();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());
    if !(1..=12).contains(&month) {
        return HttpResponse::BadRequest().body("month must be between 1 and 12");
    }

    let ledger = data.ledger.lock().expect("ledger lock poisoned");
    let report = ReportService::monthly_report(ledger.all(), year, month);
    HttpResponse::Ok().json(report)
}
