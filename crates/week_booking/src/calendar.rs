//! Gregorian month lengths and the day clamping used by the date picker.

use std::fmt;
use std::str::FromStr;

/// One of the twelve Gregorian months.
///
/// Displayed (and parsed) by its full English name, e.g. `"March"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months, in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// 1 for January, 12 for December.
    pub fn number(self) -> i8 {
        self as i8 + 1
    }

    /// Inverse of [`Self::number`].
    pub fn from_number(number: i8) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not the full English name of a month.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown month name: {0:?}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMonth(s.to_owned()))
    }
}

/// Divisible by 4, except centuries that are not divisible by 400.
pub fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The last valid day of `month` in `year`.
pub fn days_in_month(month: Month, year: i16) -> u8 {
    match month {
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// `min(day, max_day)`.
#[inline]
pub fn clamp_day(day: u8, max_day: u8) -> u8 {
    day.min(max_day)
}
