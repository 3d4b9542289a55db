//! Monthly casual and registered rental totals, pivoted by year.
//!
//! Daily records are filtered by year and month, summed per (year, month)
//! and laid out as one column per year over the twelve canonical months.

use std::collections::{BTreeMap, BTreeSet};

use time::Month;

use crate::{
    dataset::DailyRecord,
    rentals::{CANONICAL_MONTHS, MonthFilter, month_index},
};

/// One rental metric laid out as a month-by-year table.
///
/// The rows are always the twelve months in calendar order. There is one
/// column per year that had at least one matching record. A cell is `None`
/// when no records fell into that (month, year), which is different from
/// `Some(0)`, where records exist but add up to zero rentals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySeries {
    columns: BTreeMap<u16, [Option<u64>; 12]>,
}

impl MonthlySeries {
    /// The months that index the rows, always all twelve in calendar order.
    pub fn months(&self) -> [Month; 12] {
        CANONICAL_MONTHS
    }

    /// The years that have a column, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.columns.keys().copied()
    }

    /// The values for `year` in calendar order, or `None` if the year has no column.
    pub fn column(&self, year: u16) -> Option<&[Option<u64>; 12]> {
        self.columns.get(&year)
    }

    /// Iterate over the columns as `(year, values)` pairs in ascending year order.
    pub fn columns(&self) -> impl Iterator<Item = (u16, &[Option<u64>; 12])> + '_ {
        self.columns.iter().map(|(year, values)| (*year, values))
    }

    /// The total for a single cell, `None` if no records matched.
    pub fn get(&self, month: Month, year: u16) -> Option<u64> {
        self.columns
            .get(&year)
            .and_then(|values| values[month_index(month)])
    }

    /// Iterate over the rows in calendar order.
    ///
    /// Each row holds one value per column, in the same order as [MonthlySeries::years].
    pub fn rows(&self) -> impl Iterator<Item = (Month, Vec<Option<u64>>)> + '_ {
        CANONICAL_MONTHS.into_iter().map(|month| {
            let values = self
                .columns
                .values()
                .map(|values| values[month_index(month)])
                .collect();

            (month, values)
        })
    }

    /// Whether the table has no year columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn add(&mut self, year: u16, month: Month, amount: u64) {
        let cell = &mut self.columns.entry(year).or_insert([None; 12])[month_index(month)];
        *cell = Some(cell.unwrap_or(0).saturating_add(amount));
    }
}

/// The monthly casual and registered rental totals for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyRentals {
    /// Rentals by users without a membership.
    pub casual: MonthlySeries,
    /// Rentals by users with a membership.
    pub registered: MonthlySeries,
    /// The number of daily records that passed the filters.
    pub row_count: usize,
}

impl MonthlyRentals {
    /// Whether no records matched the selection.
    ///
    /// Callers should show a "no data" notice instead of empty charts.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Sum the casual and registered rentals per month for the selected years and months.
///
/// Records whose year is not in `selected_years` or whose month does not
/// pass `month_filter` are ignored. The remaining records are summed per
/// (year, month). Selecting no years or no months is valid and produces an
/// empty result, as does an empty `records` slice.
///
/// The output depends only on the arguments; the order of `records` does not
/// matter.
pub fn aggregate_monthly_rentals(
    records: &[DailyRecord],
    selected_years: &BTreeSet<u16>,
    month_filter: &MonthFilter,
) -> MonthlyRentals {
    let mut rentals = MonthlyRentals::default();

    for record in records.iter().filter(|record| {
        selected_years.contains(&record.year) && month_filter.contains(record.month)
    }) {
        rentals.casual.add(record.year, record.month, record.casual);
        rentals
            .registered
            .add(record.year, record.month, record.registered);
        rentals.row_count += 1;
    }

    rentals
}
