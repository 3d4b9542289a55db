//! The average number of rentals for each hour of the day.

use crate::dataset::HourlyRecord;

/// The number of hours in the hourly profile.
pub const HOURS_PER_DAY: usize = 24;

/// The mean rental count for each hour of the day, across all days and years.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyProfile {
    averages: [Option<f64>; HOURS_PER_DAY],
}

impl HourlyProfile {
    /// The average for `hour`, `None` if there were no records for that hour
    /// or `hour` is not between 0 and 23.
    pub fn average(&self, hour: u8) -> Option<f64> {
        self.averages.get(hour as usize).copied().flatten()
    }

    /// The averages indexed by hour.
    pub fn averages(&self) -> &[Option<f64>; HOURS_PER_DAY] {
        &self.averages
    }

    /// The hour with the highest average, the earliest one if several are tied.
    ///
    /// Returns `None` when there is no data.
    pub fn peak_hour(&self) -> Option<u8> {
        let mut peak: Option<(u8, f64)> = None;

        for (hour, average) in self.averages.iter().enumerate() {
            let Some(average) = *average else {
                continue;
            };

            match peak {
                Some((_, highest)) if highest >= average => {}
                _ => peak = Some((hour as u8, average)),
            }
        }

        peak.map(|(hour, _)| hour)
    }

    /// Whether no hour has an average.
    pub fn is_empty(&self) -> bool {
        self.averages.iter().all(Option::is_none)
    }
}

/// Calculates the mean `count` of the hourly records for each hour of the day.
pub fn average_rentals_by_hour(records: &[HourlyRecord]) -> HourlyProfile {
    let mut totals = [(0u64, 0u64); HOURS_PER_DAY];

    for record in records {
        let (sum, count) = &mut totals[record.hour as usize];
        *sum = sum.saturating_add(record.count);
        *count += 1;
    }

    HourlyProfile {
        averages: totals.map(|(sum, count)| (count > 0).then(|| sum as f64 / count as f64)),
    }
}

#[cfg(test)]
mod tests {
    use crate::{dataset::Season, rentals::average_rentals_by_hour, test_utils::hourly};

    #[test]
    fn averages_each_hour() {
        let records = vec![
            hourly(Season::Summer, 0, 8, 100),
            hourly(Season::Summer, 0, 8, 200),
            hourly(Season::Summer, 0, 17, 400),
        ];

        let profile = average_rentals_by_hour(&records);

        assert_eq!(profile.average(8), Some(150.0));
        assert_eq!(profile.average(17), Some(400.0));
        assert_eq!(profile.average(3), None);
        assert_eq!(profile.average(24), None);
    }

    #[test]
    fn peak_hour_is_highest_average() {
        let records = vec![
            hourly(Season::Summer, 0, 8, 300),
            hourly(Season::Summer, 0, 17, 500),
            hourly(Season::Summer, 0, 17, 300),
            hourly(Season::Summer, 0, 18, 390),
        ];

        let profile = average_rentals_by_hour(&records);

        assert_eq!(profile.peak_hour(), Some(17));
    }

    #[test]
    fn peak_hour_ties_go_to_earliest_hour() {
        let records = vec![hourly(Season::Summer, 0, 19, 50), hourly(Season::Summer, 0, 7, 50)];

        let profile = average_rentals_by_hour(&records);

        assert_eq!(profile.peak_hour(), Some(7));
    }

    #[test]
    fn no_records_has_no_peak() {
        let profile = average_rentals_by_hour(&[]);

        assert!(profile.is_empty());
        assert_eq!(profile.peak_hour(), None);
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let records = vec![
            hourly(Season::Summer, 0, 8, u64::MAX),
            hourly(Season::Summer, 0, 8, u64::MAX),
        ];

        let profile = average_rentals_by_hour(&records);

        assert_eq!(profile.average(8), Some(u64::MAX as f64 / 2.0));
    }
}
