//! Progressive slab tariff for electricity billing.
//!
//! Each band's rate applies only to the units falling inside that band,
//! so a 250-unit bill pays nothing for the first 100 units, 2.25/unit for
//! the next 100 and 4.50/unit for the last 50.

/// Band upper bounds with the per-unit rate inside each band. Consumption
/// above the last bound is billed at [`TOP_RATE`].
const SLABS: [(u64, f64); 3] = [(100, 0.0), (200, 2.25), (500, 4.50)];

const TOP_RATE: f64 = 6.00;

/// Amount due for `units` consumed, rounded to 2 decimal places.
///
/// Pure and total over all non-negative unit counts; negative input is
/// rejected at the request boundary and never reaches this function.
pub fn bill_amount(units: u64) -> f64 {
    let mut remaining = units;
    let mut amount = 0.0;
    let mut lower = 0;

    for (upper, rate) in SLABS {
        let in_band = remaining.min(upper - lower);
        amount += in_band as f64 * rate;
        remaining -= in_band;
        lower = upper;
    }
    amount += remaining as f64 * TOP_RATE;

    (amount * 100.0).round() / 100.0
}
