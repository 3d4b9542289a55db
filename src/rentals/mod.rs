//! Rental statistics derived from the hourly and daily datasets.
//!
//! Everything in this module is a pure function of its inputs: the same
//! records and filters always produce the same output, and the records are
//! never modified.

use time::Month;

mod hourly;
mod month_filter;
mod monthly;
mod seasonal;

pub use hourly::{HOURS_PER_DAY, HourlyProfile, average_rentals_by_hour};
pub use month_filter::MonthFilter;
pub use monthly::{MonthlyRentals, MonthlySeries, aggregate_monthly_rentals};
pub use seasonal::{SeasonalAverages, average_rentals_by_season};

/// The twelve months in calendar order.
///
/// Every monthly table is indexed by this order, independent of the order of
/// the input rows.
pub const CANONICAL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// The zero-based position of `month` in [CANONICAL_MONTHS].
#[inline]
pub fn month_index(month: Month) -> usize {
    u8::from(month) as usize - 1
}
