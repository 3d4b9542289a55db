//! Table views for dashboard data display.
//!
//! Provides the monthly totals table shown beneath the monthly trend charts.

use maud::{Markup, html};

use crate::{
    dashboard::{charts::short_month_name, year_label},
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_count},
    rentals::{MonthlyRentals, MonthlySeries},
};

const TABLE_HEADER_CELL_STYLE: &str = "px-3 py-3 text-center min-w-[100px]";
const TABLE_HEADER_FIRST_CELL_STYLE: &str =
    "px-3 py-3 sticky left-0 bg-gray-50 dark:bg-gray-700 z-10 font-semibold";
const TABLE_STICKY_CELL_STYLE: &str = "px-3 py-4 font-medium text-gray-900 dark:text-white sticky left-0 bg-white dark:bg-gray-800 z-10";
const TABLE_DATA_CELL_STYLE: &str = "text-center whitespace-nowrap";

/// Shown in place of a count for a month with no rentals in the selection.
const MISSING_CELL: &str = "-";

/// Renders the casual and registered totals for each month and year.
///
/// Months are rows in calendar order and each year gets a casual and a
/// registered column. Months with no data show [MISSING_CELL].
pub(super) fn monthly_totals_table(rentals: &MonthlyRentals, first_year: u16) -> Markup {
    let years: Vec<u16> = rentals.casual.years().collect();

    html! {
        div {
            h3 class="text-xl font-semibold mb-4" { "Monthly Totals" }

            div class="overflow-x-auto rounded-lg shadow" {
                table
                    id="monthly-totals"
                    class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_HEADER_FIRST_CELL_STYLE) { "Month" }
                            @for &year in &years {
                                th scope="col" class=(TABLE_HEADER_CELL_STYLE) {
                                    "Casual " (year_label(first_year, year))
                                }
                                th scope="col" class=(TABLE_HEADER_CELL_STYLE) {
                                    "Registered " (year_label(first_year, year))
                                }
                            }
                        }
                    }
                    tbody {
                        @for month in rentals.casual.months() {
                            tr class=(TABLE_ROW_STYLE) {
                                th scope="row" class=(TABLE_STICKY_CELL_STYLE) {
                                    (short_month_name(month))
                                }
                                @for &year in &years {
                                    td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} {
                                        (count_cell(rentals.casual.get(month, year)))
                                    }
                                    td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} {
                                        (count_cell(rentals.registered.get(month, year)))
                                    }
                                }
                            }
                        }

                        tr class={(TABLE_ROW_STYLE) " font-bold"} {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) { "Total" }
                            @for &year in &years {
                                td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} {
                                    (format_count(column_total(&rentals.casual, year)))
                                }
                                td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)} {
                                    (format_count(column_total(&rentals.registered, year)))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn count_cell(count: Option<u64>) -> String {
    match count {
        Some(count) => format_count(count),
        None => MISSING_CELL.to_owned(),
    }
}

fn column_total(series: &MonthlySeries, year: u16) -> u64 {
    series
        .column(year)
        .map(|column| {
            column
                .iter()
                .flatten()
                .fold(0, |total: u64, &count| total.saturating_add(count))
        })
        .unwrap_or(0)
}
