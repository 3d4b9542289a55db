//! The rows of the hourly and daily rental datasets.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, de};
use time::Month;

use crate::Error;

/// One day of rentals from the daily dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DailyRecord {
    /// The year category, 0 for the first year of observations and 1 for the second.
    #[serde(rename = "yr")]
    pub year: u16,
    /// The calendar month of the day.
    #[serde(rename = "mnth", deserialize_with = "deserialize_month")]
    pub month: Month,
    /// Rentals by users without a membership.
    pub casual: u64,
    /// Rentals by users with a membership.
    pub registered: u64,
}

/// One hour of rentals from the hourly dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HourlyRecord {
    /// The season the hour falls in.
    pub season: Season,
    /// The year category, 0 for the first year of observations and 1 for the second.
    #[serde(rename = "yr")]
    pub year: u16,
    /// The hour of the day, 0 to 23.
    #[serde(rename = "hr", deserialize_with = "deserialize_hour")]
    pub hour: u8,
    /// Total rentals in the hour.
    #[serde(rename = "cnt")]
    pub count: u64,
}

/// The four seasons, encoded as 1 to 4 in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum Season {
    /// Season code 1.
    Spring = 1,
    /// Season code 2.
    Summer = 2,
    /// Season code 3.
    Fall = 3,
    /// Season code 4.
    Winter = 4,
}

impl Season {
    /// All seasons in the order of their codes.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// The zero-based position of the season in [Season::ALL].
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The display name of the season.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            other => Err(Error::InvalidCsv(format!(
                "{other} is not a season, expected a number from 1 to 4"
            ))),
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn deserialize_month<'de, D>(deserializer: D) -> Result<Month, D::Error>
where
    D: Deserializer<'de>,
{
    let number = u8::deserialize(deserializer)?;

    Month::try_from(number).map_err(|_| {
        de::Error::custom(format!(
            "{number} is not a month, expected a number from 1 to 12"
        ))
    })
}

fn deserialize_hour<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let hour = u8::deserialize(deserializer)?;

    if hour < 24 {
        Ok(hour)
    } else {
        Err(de::Error::custom(format!(
            "{hour} is not an hour, expected a number from 0 to 23"
        )))
    }
}
