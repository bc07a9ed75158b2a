use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::booking::AddOnChoice;

/// Price tier resolved from the check-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateTier {
    Normal,
    Weekend,
    HighSeason,
}

impl RateTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateTier::Normal => "normal",
            RateTier::Weekend => "weekend",
            RateTier::HighSeason => "high-season",
        }
    }
}

/// Sell and owner rates for the tier that applies to a given check-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRate {
    pub tier: RateTier,
    pub sell_rate: i64,
    pub owner_rate: i64,
}

/// Inbound quote request. Dates are optional on purpose: guests may ask for
/// a price before both dates are picked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub villa_id: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub add_ons: Vec<AddOnChoice>,
}

/// A full price breakdown for a stay. Derived on every request, never stored.
///
/// `profit` covers the room rate only: add-on margin is deliberately excluded
/// from the profit figure and flows through at face value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub tier: RateTier,
    pub nightly_sell_rate: i64,
    pub nightly_owner_rate: i64,
    pub nights: i64,
    pub base_sell: i64,
    pub base_owner: i64,
    pub add_ons_total: i64,
    pub total: i64,
    pub profit: i64,
    pub price_per_guest: i64,
}
