use crate::models::add_on::AddOn;
use crate::models::villa::{HighSeasonPeriod, Villa, ViewType};

/// Static villa catalog and add-on list. All data originates from this
/// in-memory fixture set; there is no backing database.
#[derive(Debug, Clone)]
pub struct Catalog {
    villas: Vec<Villa>,
    add_ons: Vec<AddOn>,
    high_season_periods: Vec<HighSeasonPeriod>,
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            villas: seed_villas(),
            add_ons: seed_add_ons(),
            high_season_periods: seed_high_season_periods(),
        }
    }

    pub fn villas(&self) -> &[Villa] {
        &self.villas
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn high_season_periods(&self) -> &[HighSeasonPeriod] {
        &self.high_season_periods
    }

    pub fn villa_by_id(&self, id: &str) -> Option<&Villa> {
        self.villas.iter().find(|v| v.id == id)
    }

    pub fn villa_by_slug(&self, slug: &str) -> Option<&Villa> {
        self.villas.iter().find(|v| v.slug == slug)
    }

    pub fn add_on_by_id(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }
}

fn seed_villas() -> Vec<Villa> {
    vec![
        Villa {
            id: "villa-001".to_string(),
            name: "Villa Pinus Hill".to_string(),
            slug: "villa-pinus-hill".to_string(),
            short_description: "Villa keluarga dengan kolam renang hangat dan view Gunung Panderman"
                .to_string(),
            price: 1_000_000,
            weekend_price: Some(1_200_000),
            high_season_price: Some(1_500_000),
            owner_price: 700_000,
            owner_weekend_price: Some(850_000),
            owner_high_season_price: Some(1_000_000),
            capacity: 4,
            bedrooms: 2,
            bathrooms: 2,
            has_pool: true,
            pet_allowed: false,
            view_type: ViewType::Mountain,
            area: "Oro-Oro Ombo".to_string(),
            rating: 4.8,
            review_count: 127,
        },
        Villa {
            id: "villa-002".to_string(),
            name: "Villa Sawah Asri".to_string(),
            slug: "villa-sawah-asri".to_string(),
            short_description: "Suasana pedesaan tenang di tepi sawah, cocok untuk rombongan besar"
                .to_string(),
            price: 1_800_000,
            weekend_price: Some(2_200_000),
            high_season_price: None,
            owner_price: 1_300_000,
            owner_weekend_price: Some(1_600_000),
            owner_high_season_price: None,
            capacity: 10,
            bedrooms: 4,
            bathrooms: 3,
            has_pool: true,
            pet_allowed: true,
            view_type: ViewType::RiceField,
            area: "Junrejo".to_string(),
            rating: 4.6,
            review_count: 84,
        },
        Villa {
            id: "villa-003".to_string(),
            name: "Villa Kota Batu View".to_string(),
            slug: "villa-kota-batu-view".to_string(),
            // Flat rate card: no weekend pricing configured yet
            short_description: "Villa minimalis dengan pemandangan lampu kota di malam hari"
                .to_string(),
            price: 750_000,
            weekend_price: None,
            high_season_price: None,
            owner_price: 500_000,
            owner_weekend_price: None,
            owner_high_season_price: None,
            capacity: 6,
            bedrooms: 3,
            bathrooms: 2,
            has_pool: false,
            pet_allowed: false,
            view_type: ViewType::City,
            area: "Sidomulyo".to_string(),
            rating: 4.3,
            review_count: 41,
        },
        Villa {
            id: "villa-004".to_string(),
            name: "Villa Taman Bunga".to_string(),
            slug: "villa-taman-bunga".to_string(),
            short_description: "Halaman luas penuh bunga, pet friendly, dekat alun-alun".to_string(),
            price: 1_250_000,
            weekend_price: Some(1_450_000),
            high_season_price: Some(1_800_000),
            owner_price: 900_000,
            owner_weekend_price: Some(1_050_000),
            owner_high_season_price: Some(1_300_000),
            capacity: 8,
            bedrooms: 3,
            bathrooms: 3,
            has_pool: true,
            pet_allowed: true,
            view_type: ViewType::Garden,
            area: "Bumiaji".to_string(),
            rating: 4.7,
            review_count: 96,
        },
    ]
}

fn seed_add_ons() -> Vec<AddOn> {
    vec![
        AddOn {
            id: "addon-bbq".to_string(),
            name: "Paket BBQ".to_string(),
            description: "Grill, arang, dan bumbu untuk 10 porsi".to_string(),
            price: 150_000,
        },
        AddOn {
            id: "addon-extra-bed".to_string(),
            name: "Extra Bed".to_string(),
            description: "Kasur tambahan termasuk sprei dan selimut".to_string(),
            price: 100_000,
        },
        AddOn {
            id: "addon-breakfast".to_string(),
            name: "Sarapan".to_string(),
            description: "Nasi goreng atau soto per orang".to_string(),
            price: 35_000,
        },
        AddOn {
            id: "addon-campfire".to_string(),
            name: "Api Unggun".to_string(),
            description: "Kayu bakar dan jagung bakar untuk malam keakraban".to_string(),
            price: 200_000,
        },
    ]
}

fn seed_high_season_periods() -> Vec<HighSeasonPeriod> {
    vec![
        HighSeasonPeriod {
            name: "Libur Lebaran".to_string(),
            start_date: "2026-03-18".parse().expect("valid fixture date"),
            end_date: "2026-03-29".parse().expect("valid fixture date"),
        },
        HighSeasonPeriod {
            name: "Libur Akhir Tahun".to_string(),
            start_date: "2025-12-20".parse().expect("valid fixture date"),
            end_date: "2026-01-04".parse().expect("valid fixture date"),
        },
    ]
}
