use serde::{Deserialize, Serialize};

/// Maximum quantity a guest may request for a single add-on. Requests beyond
/// the bound are clamped, not rejected.
pub const MAX_ADD_ON_QUANTITY: u32 = 10;

/// An optional extra offered alongside every villa (BBQ set, extra bed, ...).
/// Immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price per unit, in whole rupiah.
    pub price: i64,
}

/// A guest's pick of one add-on, with the name and unit price snapshotted at
/// booking time so later catalog edits cannot alter historical bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnSelection {
    pub add_on_id: String,
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
}

impl AddOnSelection {
    /// Snapshot a catalog add-on with a clamped quantity.
    pub fn new(add_on: &AddOn, quantity: u32) -> Self {
        Self {
            add_on_id: add_on.id.clone(),
            name: add_on.name.clone(),
            unit_price: add_on.price,
            quantity: quantity.min(MAX_ADD_ON_QUANTITY),
        }
    }

    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }

    /// Display label for summaries: "Extra Bed x2", or just the name when the
    /// quantity is 1.
    pub fn label(&self) -> String {
        if self.quantity > 1 {
            format!("{} x{}", self.name, self.quantity)
        } else {
            self.name.clone()
        }
    }
}
