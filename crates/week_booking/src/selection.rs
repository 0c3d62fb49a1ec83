use std::fmt;

use crate::calendar::{Month, clamp_day, days_in_month};

/// The in-progress (day, month, year) triple of the date picker.
///
/// The day is always within `1..=days_in_month(month, year)`: changing the month or
/// the year silently pulls the day back into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawSelection", into = "RawSelection")]
pub struct DateSelection {
    day: u8,
    month: Month,
    year: i16,
}

impl Default for DateSelection {
    fn default() -> Self {
        Self::new(1, Month::January, 2025)
    }
}

impl DateSelection {
    /// Creates a selection, clamping `day` into the valid range of `month` in `year`.
    pub fn new(day: u8, month: Month, year: i16) -> Self {
        let mut selection = Self {
            day: 1,
            month,
            year,
        };
        selection.set_day(day);
        selection
    }

    pub fn from_date(date: jiff::civil::Date) -> Self {
        let month = Month::from_number(date.month()).unwrap_or(Month::January);
        let day = u8::try_from(date.day()).unwrap_or(1);
        Self::new(day, month, date.year())
    }

    /// The resolved calendar date.
    ///
    /// # Errors
    /// If the year is outside the range the calendar supports.
    pub fn to_date(&self) -> crate::Result<jiff::civil::Date> {
        let day = i8::try_from(self.day).unwrap_or(i8::MAX);
        Ok(jiff::civil::Date::new(self.year, self.month.number(), day)?)
    }

    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub fn year(&self) -> i16 {
        self.year
    }

    /// Number of days in the currently selected month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// The days that can be picked for the current month and year.
    pub fn days(&self) -> Vec<u8> {
        (1..=self.days_in_month()).collect()
    }

    /// Picks a day. The UI only offers valid days, so anything else is pulled into range.
    pub fn set_day(&mut self, day: u8) {
        let max_day = self.days_in_month();
        let clamped = clamp_day(day.max(1), max_day);
        if clamped != day {
            log::debug!("Day {day} is outside 1..={max_day}, using {clamped}");
        }
        self.day = clamped;
    }

    pub fn set_month(&mut self, month: Month) {
        self.month = month;
        self.reclamp();
    }

    pub fn set_year(&mut self, year: i16) {
        self.year = year;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        let max_day = self.days_in_month();
        if self.day > max_day {
            log::debug!(
                "{} {} has {max_day} days, clamping day {} to {max_day}",
                self.month,
                self.year,
                self.day
            );
            self.day = clamp_day(self.day, max_day);
        }
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

// ----------------------------------------------------------------------------

/// What a selection looks like in a config file, before the day invariant is checked.
#[derive(serde::Deserialize, serde::Serialize)]
struct RawSelection {
    day: u8,
    month: Month,
    year: i16,
}

impl TryFrom<RawSelection> for DateSelection {
    type Error = String;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        let max_day = days_in_month(raw.month, raw.year);
        if raw.day == 0 || raw.day > max_day {
            return Err(format!(
                "day {} is not in {} {} (1..={max_day})",
                raw.day, raw.month, raw.year
            ));
        }
        Ok(Self {
            day: raw.day,
            month: raw.month,
            year: raw.year,
        })
    }
}

impl From<DateSelection> for RawSelection {
    fn from(selection: DateSelection) -> Self {
        Self {
            day: selection.day,
            month: selection.month,
            year: selection.year,
        }
    }
}
