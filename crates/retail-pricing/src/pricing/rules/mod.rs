mod demand;
mod expiry;
mod location;
mod stock;

pub use demand::evaluate_demand_surcharge;
pub use expiry::evaluate_expiry_discount;
pub use location::evaluate_location_adjustment;
pub use stock::evaluate_low_stock_surcharge;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days until the product's expiry date, rounded up.
///
/// The expiry date is taken as midnight UTC. A product expiring in 6.1 days
/// counts as 7; anything already past expiry yields zero or a negative count.
pub fn days_until_expiry(expiry_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expires_at = expiry_date.and_time(NaiveTime::MIN).and_utc();
    let remaining = (expires_at - now).num_milliseconds();
    -(-remaining).div_euclid(MILLIS_PER_DAY)
}

/// `amount * percentage / 100`, unrounded. Saturates at the `Decimal` range.
pub(crate) fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    amount.saturating_mul(percentage / Decimal::ONE_HUNDRED)
}
