use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewType {
    Mountain,
    City,
    Garden,
    RiceField,
}

/// A villa in the marketing catalog. Loaded once from the static fixture set
/// and immutable for the lifetime of the process.
///
/// The rate card carries both the published (sell) rates and the owner (cost)
/// rates per tier; the weekend and high-season sell rates are optional and the
/// pricing service falls back to the normal rate when they are unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villa {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    /// Nightly sell rate on normal days, in whole rupiah.
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_season_price: Option<i64>,
    /// Nightly owner (cost) rate on normal days.
    pub owner_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_weekend_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_high_season_price: Option<i64>,
    pub capacity: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub has_pool: bool,
    pub pet_allowed: bool,
    pub view_type: ViewType,
    pub area: String,
    pub rating: f32,
    pub review_count: u32,
}

/// An admin-configured date window during which high-season rates apply.
/// Both endpoints are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighSeasonPeriod {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl HighSeasonPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: &str) -> HighSeasonPeriod {
        HighSeasonPeriod {
            name: "Libur Akhir Tahun".to_string(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
        }
    }

    #[test]
    fn test_high_season_period_bounds_are_inclusive() {
        let p = period("2025-12-20", "2026-01-05");
        assert!(p.contains("2025-12-20".parse().unwrap()));
        assert!(p.contains("2026-01-05".parse().unwrap()));
        assert!(p.contains("2025-12-31".parse().unwrap()));
        assert!(!p.contains("2025-12-19".parse().unwrap()));
        assert!(!p.contains("2026-01-06".parse().unwrap()));
    }
}
