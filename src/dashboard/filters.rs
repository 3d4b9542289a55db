//! Query parameters for selecting the years and months of the monthly trends.

use std::collections::BTreeSet;

use serde::Deserialize;
use time::Month;

use crate::{Error, rentals::MonthFilter};

/// How the months were picked in the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthMode {
    /// Individual months were ticked.
    #[default]
    List,
    /// A start and end month were chosen.
    Range,
}

/// The filter form as it arrives in the query string.
///
/// Repeated keys are collected, e.g. `years=0&years=1&months=6&months=7`.
#[derive(Debug, Default, Deserialize)]
pub struct MonthlyFilterQuery {
    /// The selected year categories.
    #[serde(default)]
    pub years: Vec<u16>,
    /// The selected month numbers, used in [MonthMode::List].
    #[serde(default)]
    pub months: Vec<u8>,
    /// The first month of the range, defaults to January.
    pub start_month: Option<u8>,
    /// The last month of the range, defaults to December.
    pub end_month: Option<u8>,
    /// Whether to use the month list or the month range.
    ///
    /// When missing, the range is used if either bound is given.
    pub month_mode: Option<MonthMode>,
    /// Set by the filter form so that unticking every checkbox selects
    /// nothing instead of falling back to everything.
    #[serde(default)]
    pub filtered: bool,
}

/// The years and months to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The selected year categories.
    pub years: BTreeSet<u16>,
    /// The selected months.
    pub months: MonthFilter,
    /// How the months were picked, used to redisplay the form.
    pub mode: MonthMode,
}

impl MonthlyFilterQuery {
    /// Turn the query into a selection, defaulting to every year in
    /// `available_years` and every month when nothing was chosen.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if a month number is not between 1 and 12.
    pub fn resolve(&self, available_years: &BTreeSet<u16>) -> Result<Selection, Error> {
        let years = if self.filtered || !self.years.is_empty() {
            self.years.iter().copied().collect()
        } else {
            available_years.clone()
        };

        let has_bound = self.start_month.is_some() || self.end_month.is_some();
        let mode = self.month_mode.unwrap_or(if has_bound {
            MonthMode::Range
        } else {
            MonthMode::List
        });

        let months = match mode {
            MonthMode::Range => MonthFilter::range(
                parse_month(self.start_month.unwrap_or(1))?,
                parse_month(self.end_month.unwrap_or(12))?,
            ),
            MonthMode::List if self.filtered || !self.months.is_empty() => MonthFilter::months(
                self.months
                    .iter()
                    .map(|&month| parse_month(month))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            MonthMode::List => MonthFilter::all(),
        };

        Ok(Selection {
            years,
            months,
            mode,
        })
    }
}

fn parse_month(number: u8) -> Result<Month, Error> {
    Month::try_from(number).map_err(|_| {
        tracing::warn!("Rejected month filter with month number {number}");
        Error::InvalidMonth(number)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use time::Month;

    use crate::{
        Error,
        dashboard::filters::{MonthMode, MonthlyFilterQuery},
        rentals::MonthFilter,
    };

    fn available_years() -> BTreeSet<u16> {
        BTreeSet::from([0, 1])
    }

    fn parse_query(query: &str) -> MonthlyFilterQuery {
        serde_html_form::from_str(query).unwrap()
    }

    #[test]
    fn query_handles_repeated_values() {
        let query = parse_query("years=0&years=1&months=2&months=3&months=5");

        assert_eq!(query.years, vec![0, 1]);
        assert_eq!(query.months, vec![2, 3, 5]);
        assert!(!query.filtered);
        assert_eq!(query.month_mode, None);
    }

    #[test]
    fn empty_query_selects_everything() {
        let selection = parse_query("").resolve(&available_years()).unwrap();

        assert_eq!(selection.years, available_years());
        assert_eq!(selection.months, MonthFilter::all());
        assert_eq!(selection.mode, MonthMode::List);
    }

    #[test]
    fn submitted_form_without_checkboxes_selects_nothing() {
        let selection = parse_query("filtered=true&month_mode=list")
            .resolve(&available_years())
            .unwrap();

        assert!(selection.years.is_empty());
        assert_eq!(selection.months, MonthFilter::Months(HashSet::new()));
    }

    #[test]
    fn month_list_is_used_in_list_mode() {
        let selection = parse_query("filtered=true&years=1&months=8&months=6&month_mode=list")
            .resolve(&available_years())
            .unwrap();

        assert_eq!(selection.years, BTreeSet::from([1]));
        assert_eq!(
            selection.months.allowed_months(),
            vec![Month::June, Month::August]
        );
    }

    #[test]
    fn bounds_imply_range_mode() {
        let selection = parse_query("start_month=3&end_month=3")
            .resolve(&available_years())
            .unwrap();

        assert_eq!(selection.mode, MonthMode::Range);
        assert_eq!(selection.months, MonthFilter::range(Month::March, Month::March));
        assert_eq!(selection.years, available_years());
    }

    #[test]
    fn missing_bound_defaults_to_end_of_year() {
        let selection = parse_query("month_mode=range&start_month=10")
            .resolve(&available_years())
            .unwrap();

        assert_eq!(
            selection.months.allowed_months(),
            vec![Month::October, Month::November, Month::December]
        );
    }

    #[test]
    fn range_mode_ignores_month_list() {
        let selection = parse_query("month_mode=range&months=1&start_month=4&end_month=5")
            .resolve(&available_years())
            .unwrap();

        assert_eq!(
            selection.months.allowed_months(),
            vec![Month::April, Month::May]
        );
    }

    #[test]
    fn rejects_month_out_of_range() {
        let result = parse_query("months=13").resolve(&available_years());
        assert_eq!(result, Err(Error::InvalidMonth(13)));

        let result = parse_query("start_month=0").resolve(&available_years());
        assert_eq!(result, Err(Error::InvalidMonth(0)));
    }
}
