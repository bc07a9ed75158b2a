use chrono::Datelike;
use serde::Serialize;

use crate::models::booking::{Booking, BookingStatus};

/// One ledger line of the monthly financial report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub booking_id: String,
    pub villa_id: String,
    pub guest_name: String,
    pub total_price: i64,
    pub owner_share: i64,
    pub profit: i64,
}

/// Revenue and profit summary for one calendar month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub booking_count: usize,
    pub total_revenue: i64,
    pub total_profit: i64,
    pub owner_share: i64,
    pub profit_margin_pct: f64,
    pub rows: Vec<ReportRow>,
}

pub struct ReportService;

impl ReportService {
    /// Aggregate bookings created in the given month, cancelled ones
    /// excluded. Owner share is what flows through to villa owners
    /// (revenue minus our margin).
    pub fn monthly_report(bookings: &[Booking], year: i32, month: u32) -> MonthlyReport {
        let rows: Vec<ReportRow> = bookings
            .iter()
            .filter(|b| {
                b.created_at.year() == year
                    && b.created_at.month() == month
                    && b.status != BookingStatus::Cancelled
            })
            .map(|b| ReportRow {
                booking_id: b.booking_id.clone(),
                villa_id: b.villa_id.clone(),
                guest_name: b.guest_name.clone(),
                total_price: b.total_price,
                owner_share: b.total_price - b.profit,
                profit: b.profit,
            })
            .collect();

        let total_revenue: i64 = rows.iter().map(|r| r.total_price).sum();
        let total_profit: i64 = rows.iter().map(|r| r.profit).sum();
        let profit_margin_pct = if total_revenue > 0 {
            total_profit as f64 / total_revenue as f64 * 100.0
        } else {
            0.0
        };

        MonthlyReport {
            year,
            month,
            booking_count: rows.len(),
            total_revenue,
            total_profit,
            owner_share: total_revenue - total_profit,
            profit_margin_pct,
            rows,
        }
    }
}
