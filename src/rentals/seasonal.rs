//! Average hourly rentals per season and year.

use std::collections::BTreeMap;

use crate::dataset::{HourlyRecord, Season};

/// The mean rental count per hour for each (season, year).
///
/// Seasons follow [Season::ALL]. A cell is `None` when there were no hourly
/// records for that season in that year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalAverages {
    columns: BTreeMap<u16, [Option<f64>; 4]>,
}

impl SeasonalAverages {
    /// The years that have a column, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.columns.keys().copied()
    }

    /// Iterate over the columns as `(year, values)` pairs, values ordered as [Season::ALL].
    pub fn columns(&self) -> impl Iterator<Item = (u16, &[Option<f64>; 4])> + '_ {
        self.columns.iter().map(|(year, values)| (*year, values))
    }

    /// The average for a single season and year.
    pub fn get(&self, season: Season, year: u16) -> Option<f64> {
        self.columns
            .get(&year)
            .and_then(|values| values[season.index()])
    }

    /// Whether there are no averages at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Calculates the mean `count` of the hourly records grouped by season and year.
pub fn average_rentals_by_season(records: &[HourlyRecord]) -> SeasonalAverages {
    let mut totals: BTreeMap<u16, [(u64, u64); 4]> = BTreeMap::new();

    for record in records {
        let (sum, count) = &mut totals.entry(record.year).or_insert([(0, 0); 4])
            [record.season.index()];
        *sum = sum.saturating_add(record.count);
        *count += 1;
    }

    let columns = totals
        .into_iter()
        .map(|(year, sums)| {
            let averages = sums.map(|(sum, count)| (count > 0).then(|| sum as f64 / count as f64));
            (year, averages)
        })
        .collect();

    SeasonalAverages { columns }
}
