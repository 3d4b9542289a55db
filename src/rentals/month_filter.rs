//! Month selection for the monthly rental trends.

use std::collections::HashSet;

use time::Month;

use crate::rentals::CANONICAL_MONTHS;

/// The months a user selected, either as a set of discrete months or as a
/// contiguous, inclusive range.
///
/// Both forms are consumed through [MonthFilter::contains].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthFilter {
    /// An explicit multi-select of months. An empty set selects no months.
    Months(HashSet<Month>),
    /// Every month from `start` to `end`, inclusive.
    ///
    /// A range where `start` comes after `end` selects no months.
    Range {
        /// The first month in the range.
        start: Month,
        /// The last month in the range.
        end: Month,
    },
}

impl MonthFilter {
    /// A filter that accepts every month.
    pub fn all() -> Self {
        Self::Range {
            start: Month::January,
            end: Month::December,
        }
    }

    /// A filter that accepts the months from `start` to `end`, inclusive.
    pub fn range(start: Month, end: Month) -> Self {
        Self::Range { start, end }
    }

    /// A filter that accepts exactly the given months.
    pub fn months(months: impl IntoIterator<Item = Month>) -> Self {
        Self::Months(months.into_iter().collect())
    }

    /// Whether `month` passes the filter.
    pub fn contains(&self, month: Month) -> bool {
        match self {
            MonthFilter::Months(months) => months.contains(&month),
            MonthFilter::Range { start, end } => {
                (u8::from(*start)..=u8::from(*end)).contains(&u8::from(month))
            }
        }
    }

    /// The accepted months in calendar order.
    pub fn allowed_months(&self) -> Vec<Month> {
        CANONICAL_MONTHS
            .into_iter()
            .filter(|&month| self.contains(month))
            .collect()
    }

    /// Whether the filter rejects every month.
    pub fn is_empty(&self) -> bool {
        !CANONICAL_MONTHS.into_iter().any(|month| self.contains(month))
    }
}

impl Default for MonthFilter {
    fn default() -> Self {
        Self::all()
    }
}
