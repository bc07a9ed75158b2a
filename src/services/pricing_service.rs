use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::add_on::AddOnSelection;
use crate::models::quote::{Quote, RateTier, ResolvedRate};
use crate::models::villa::{HighSeasonPeriod, Villa};

pub struct PricingService;

impl PricingService {
    /// Resolve the rate tier for a check-in date.
    ///
    /// The tier is determined by the check-in date only, not per night:
    /// a high-season window containing the date wins over the weekend rule,
    /// and Friday/Saturday/Sunday check-ins take the weekend rate. A tier
    /// whose sell rate is not configured falls through, so this never fails
    /// and bottoms out at the normal rate. Owner rates fall back to the
    /// normal owner rate when the tier-specific one is unset.
    pub fn resolve_rate(
        villa: &Villa,
        check_in: NaiveDate,
        high_season_periods: &[HighSeasonPeriod],
    ) -> ResolvedRate {
        if let Some(sell_rate) = villa.high_season_price {
            if high_season_periods.iter().any(|p| p.contains(check_in)) {
                return ResolvedRate {
                    tier: RateTier::HighSeason,
                    sell_rate,
                    owner_rate: villa.owner_high_season_price.unwrap_or(villa.owner_price),
                };
            }
        }

        let is_weekend = matches!(
            check_in.weekday(),
            Weekday::Fri | Weekday::Sat | Weekday::Sun
        );
        if is_weekend {
            if let Some(sell_rate) = villa.weekend_price {
                return ResolvedRate {
                    tier: RateTier::Weekend,
                    sell_rate,
                    owner_rate: villa.owner_weekend_price.unwrap_or(villa.owner_price),
                };
            }
        }

        ResolvedRate {
            tier: RateTier::Normal,
            sell_rate: villa.price,
            owner_rate: villa.owner_price,
        }
    }

    /// Number of nights for a stay, never less than 1.
    ///
    /// Guests may ask for a quote before both dates are picked, so a missing
    /// or inverted range falls back to a single night instead of erroring.
    pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(1),
            _ => 1,
        }
    }

    /// Sum of unit price times quantity over the active selections.
    pub fn add_ons_total(selections: &[AddOnSelection]) -> i64 {
        selections
            .iter()
            .filter(|s| s.quantity > 0)
            .map(|s| s.subtotal())
            .sum()
    }

    /// Full price breakdown for a stay. Pure over its inputs.
    ///
    /// Profit covers the room rate only (`base_sell - base_owner`); add-on
    /// margin is excluded from the figure on purpose. The per-guest split
    /// divides by villa capacity, not the actual party size, and rounds up
    /// so the split never under-collects.
    pub fn compute_quote(
        villa: &Villa,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        selections: &[AddOnSelection],
        high_season_periods: &[HighSeasonPeriod],
    ) -> Quote {
        let rate = match check_in {
            Some(date) => Self::resolve_rate(villa, date, high_season_periods),
            None => ResolvedRate {
                tier: RateTier::Normal,
                sell_rate: villa.price,
                owner_rate: villa.owner_price,
            },
        };
        let nights = Self::nights(check_in, check_out);

        let base_sell = rate.sell_rate * nights;
        let base_owner = rate.owner_rate * nights;
        let add_ons_total = Self::add_ons_total(selections);
        let total = base_sell + add_ons_total;

        let capacity = i64::from(villa.capacity.max(1));
        let price_per_guest = (total + capacity - 1) / capacity;

        Quote {
            tier: rate.tier,
            nightly_sell_rate: rate.sell_rate,
            nightly_owner_rate: rate.owner_rate,
            nights,
            base_sell,
            base_owner,
            add_ons_total,
            total,
            profit: base_sell - base_owner,
            price_per_guest,
        }
    }
}
