use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::villa::{Villa, ViewType};

pub const PRICE_RANGE_MAX: i64 = 10_000_000;

/// Search-filter criteria for the villa catalog. Every field at its default
/// is inactive; `matches` applies the active ones as an AND predicate.
///
/// The date pair is advisory only (availability is not authoritative, there
/// is no inventory lock) and does not constrain the match; it still counts
/// toward `active_filter_count` for the UI badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VillaFilter {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub price_range: [i64; 2],
    pub has_pool: Option<bool>,
    pub pet_allowed: Option<bool>,
    pub view_type: Option<ViewType>,
    pub min_capacity: u32,
    pub area: Option<String>,
}

impl Default for VillaFilter {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            price_range: [0, PRICE_RANGE_MAX],
            has_pool: None,
            pet_allowed: None,
            view_type: None,
            min_capacity: 1,
            area: None,
        }
    }
}

impl VillaFilter {
    pub fn matches(&self, villa: &Villa) -> bool {
        if villa.price < self.price_range[0] || villa.price > self.price_range[1] {
            return false;
        }
        if let Some(has_pool) = self.has_pool {
            if villa.has_pool != has_pool {
                return false;
            }
        }
        if let Some(pet_allowed) = self.pet_allowed {
            if villa.pet_allowed != pet_allowed {
                return false;
            }
        }
        if let Some(view_type) = self.view_type {
            if villa.view_type != view_type {
                return false;
            }
        }
        if villa.capacity < self.min_capacity {
            return false;
        }
        if let Some(area) = &self.area {
            if !villa.area.eq_ignore_ascii_case(area) {
                return false;
            }
        }
        true
    }

    /// Number of criteria differing from their defaults, for the filter badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if self.check_in.is_some() {
            count += 1;
        }
        if self.check_out.is_some() {
            count += 1;
        }
        if self.price_range[0] > 0 || self.price_range[1] < PRICE_RANGE_MAX {
            count += 1;
        }
        if self.has_pool.is_some() {
            count += 1;
        }
        if self.pet_allowed.is_some() {
            count += 1;
        }
        if self.view_type.is_some() {
            count += 1;
        }
        if self.min_capacity > 1 {
            count += 1;
        }
        if self.area.is_some() {
            count += 1;
        }
        count
    }
}
