//! Rental pricing.

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole rental days between two instants.
///
/// Any positive partial day rounds up, and the count never drops below one:
/// a zero or inverted range still bills a single day. The clamp is explicit;
/// callers must not assume a non-negative raw difference.
#[must_use]
pub fn rental_days(start: Timestamp, end: Timestamp) -> u64 {
    let elapsed_ms = end.as_millisecond() - start.as_millisecond();
    let days = u64::try_from(elapsed_ms)
        .unwrap_or(0)
        .div_ceil(MILLIS_PER_DAY as u64)
        .max(1);

    u64::try_from(days).unwrap_or(1)
}

/// Total for one line: `days × price_per_day × qty`, in minor units.
///
/// No currency rounding applies; the arithmetic saturates rather than
/// wrapping.
#[must_use]
pub fn line_total(days: u64, price_per_day: u64, qty: u32) -> u64 {
    days.saturating_mul(price_per_day)
        .saturating_mul(u64::from(qty))
}

/// Deposit held against a subtotal: 20%, rounded to whole minor units with
/// midpoints going away from zero.
///
/// An integer subtotal cannot land `subtotal × 0.20` on a midpoint, so the
/// strategy pins the tie-breaking rule without changing any representable
/// result.
#[must_use]
pub fn deposit_on(subtotal: u64) -> u64 {
    let rate = Decimal::new(20, 2);

    let deposit = (Decimal::from(subtotal) * rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    deposit.to_u64().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn same_instant_bills_one_day() -> TestResult {
        let start = Timestamp::from_millisecond(1_000)?;

        assert_eq!(rental_days(start, start), 1);

        Ok(())
    }

    #[test]
    fn exact_day_bills_one_day() -> TestResult {
        let start = Timestamp::from_millisecond(0)?;
        let end = Timestamp::from_millisecond(MILLIS_PER_DAY)?;

        assert_eq!(rental_days(start, end), 1);

        Ok(())
    }

    #[test]
    fn partial_day_rounds_up() -> TestResult {
        let start = Timestamp::from_millisecond(0)?;
        let end = Timestamp::from_millisecond(25 * 60 * 60 * 1000)?;

        assert_eq!(rental_days(start, end), 2);

        Ok(())
    }

    #[test]
    fn single_millisecond_over_a_day_rounds_up() -> TestResult {
        let start = Timestamp::from_millisecond(0)?;
        let end = Timestamp::from_millisecond(MILLIS_PER_DAY + 1)?;

        assert_eq!(rental_days(start, end), 2);

        Ok(())
    }

    #[test]
    fn inverted_range_clamps_to_one_day() -> TestResult {
        let start = Timestamp::from_millisecond(3 * MILLIS_PER_DAY)?;
        let end = Timestamp::from_millisecond(0)?;

        assert_eq!(rental_days(start, end), 1);

        Ok(())
    }

    #[test]
    fn line_total_multiplies_days_price_and_quantity() {
        assert_eq!(line_total(3, 1500, 2), 9000);
        assert_eq!(line_total(1, 0, 5), 0);
    }

    #[test]
    fn deposit_is_twenty_percent() {
        assert_eq!(deposit_on(200), 40);
        assert_eq!(deposit_on(1000), 200);
        assert_eq!(deposit_on(0), 0);
    }

    #[test]
    fn deposit_rounds_fractional_minor_units() {
        // 12 × 0.20 = 2.4 → 2; 13 × 0.20 = 2.6 → 3; 3 × 0.20 = 0.6 → 1.
        assert_eq!(deposit_on(12), 2);
        assert_eq!(deposit_on(13), 3);
        assert_eq!(deposit_on(3), 1);
    }
}
