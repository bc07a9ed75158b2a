use url::Url;

use crate::models::booking::Booking;
use crate::models::villa::Villa;
use crate::services::currency::format_price;

/// Human-readable summary forwarded to the operator when a booking is
/// submitted. Field order is part of the contract: booking id, villa name,
/// dates, guest name, guest count, add-ons, notes, total.
pub fn booking_summary(booking: &Booking, villa: &Villa) -> String {
    let add_ons = if booking.add_ons.is_empty() {
        "-".to_string()
    } else {
        booking
            .add_ons
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let notes = booking.notes.as_deref().unwrap_or("-");

    format!(
        "Halo Villa Batu, saya ingin booking:\n\
         *ID Booking: {}*\n\
         Villa: {}\n\
         Check-in: {}\n\
         Check-out: {}\n\
         Nama: {}\n\
         Tamu: {} Orang\n\
         Add-ons: {}\n\
         Catatan: {}\n\
         Total: {}\n\n\
         Mohon info ketersediaan. Terima kasih.",
        booking.booking_id,
        villa.name,
        booking.check_in,
        booking.check_out,
        booking.guest_name,
        booking.guests,
        add_ons,
        notes,
        format_price(booking.total_price),
    )
}

/// Prefilled wa.me link for the configured contact number. The hand-off is
/// fire and forget; the link is handed to the caller, nothing is sent here.
pub fn whatsapp_link(contact_number: &str, message: &str) -> String {
    let mut url = Url::parse("https://wa.me/").expect("static base url");
    url.set_path(contact_number);
    url.query_pairs_mut().append_pair("text", message);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::add_on::AddOnSelection;
    use crate::models::booking::{
        BookingStatus, HistoryAction, HistoryEntry, PaymentStatus,
    };
    use chrono::Utc;

    fn sample_booking(catalog: &Catalog) -> Booking {
        let bbq = catalog.add_on_by_id("addon-bbq").unwrap();
        let breakfast = catalog.add_on_by_id("addon-breakfast").unwrap();
        Booking {
            id: "VB-2509-AK39".to_string(),
            booking_id: "VB-2509-AK39".to_string(),
            villa_id: "villa-001".to_string(),
            guest_name: "Budi Santoso".to_string(),
            guest_phone: "081234567890".to_string(),
            guest_email: None,
            check_in: "2025-09-13".parse().unwrap(),
            check_out: "2025-09-15".parse().unwrap(),
            guests: 4,
            add_ons: vec![
                AddOnSelection::new(bbq, 1),
                AddOnSelection::new(breakfast, 4),
            ],
            total_price: 2_690_000,
            profit: 700_000,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            notes: None,
            history: vec![HistoryEntry::now(
                HistoryAction::Created,
                "Booking created via website",
            )],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_contains_fields_in_contract_order() {
        let catalog = Catalog::seed();
        let villa = catalog.villa_by_id("villa-001").unwrap();
        let booking = sample_booking(&catalog);
        let summary = booking_summary(&booking, villa);

        let expected_order = [
            "VB-2509-AK39",
            "Villa Pinus Hill",
            "2025-09-13",
            "2025-09-15",
            "Budi Santoso",
            "4 Orang",
            "Paket BBQ, Sarapan x4",
            "Catatan: -",
            "Rp 2.690.000",
        ];
        let mut cursor = 0;
        for needle in expected_order {
            let found = summary[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("'{needle}' missing or out of order"));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn test_summary_uses_dash_for_empty_add_ons() {
        let catalog = Catalog::seed();
        let villa = catalog.villa_by_id("villa-001").unwrap();
        let mut booking = sample_booking(&catalog);
        booking.add_ons.clear();
        let summary = booking_summary(&booking, villa);
        assert!(summary.contains("Add-ons: -"));
    }

    #[test]
    fn test_whatsapp_link_is_url_encoded() {
        let link = whatsapp_link("6281234567890", "Halo Villa Batu,\nTotal: Rp 1.500.000");
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
        assert!(!link.contains('\n'));
        assert!(link.contains("Rp"));
        let parsed = Url::parse(&link).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, "Halo Villa Batu,\nTotal: Rp 1.500.000");
    }
}
