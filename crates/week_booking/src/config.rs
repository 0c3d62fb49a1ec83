use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::catalog::{PlanOption, default_catalog};
use crate::scroll::WheelLayout;
use crate::selection::DateSelection;
use crate::{Error, Result};

/// Everything about the booking page that is data rather than logic.
///
/// Missing fields fall back to [`BookingConfig::default`], so a config file only
/// needs to name what it changes:
///
/// ```
/// # use week_booking::BookingConfig;
/// let config = BookingConfig::from_ron_str("(first_year: 2020, last_year: 2030)").unwrap();
/// assert_eq!(config.years(), 2020..=2030);
/// assert_eq!(config.catalog.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Shown above the plan cards.
    pub program_name: String,

    /// Short weekday names of the sessions, e.g. `["Mon", "Tue"]`.
    pub session_days: Vec<String>,

    pub catalog: Vec<PlanOption>,

    /// First year offered by the year wheel.
    pub first_year: i16,

    /// Last year offered by the year wheel.
    pub last_year: i16,

    /// What the date picker shows before any start date has been confirmed.
    pub default_date: DateSelection,

    pub wheel: WheelLayout,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            program_name: "Regular aftercare program".to_owned(),
            session_days: ["Mon", "Tue", "Thu", "Fri", "Sat"]
                .map(str::to_owned)
                .to_vec(),
            catalog: default_catalog(),
            first_year: 2010,
            last_year: 2025,
            default_date: DateSelection::default(),
            wheel: WheelLayout::default(),
        }
    }
}

impl BookingConfig {
    /// Parses and validates a RON config.
    ///
    /// # Errors
    /// [`Error::Parse`] for malformed RON, [`Error::InvalidConfig`] if [`Self::validate`] fails.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        let config: Self = ron::from_str(ron)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a RON config file.
    ///
    /// # Errors
    /// [`Error::Io`] if the file can't be read, otherwise as [`Self::from_ron_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ron = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_ron_str(&ron)?;
        log::debug!(
            "Loaded config from {} with {} plans",
            path.display(),
            config.catalog.len()
        );
        Ok(config)
    }

    /// Pretty RON for this config, e.g. to write a starting point for a config file.
    ///
    /// # Errors
    /// [`Error::Serialize`] if serialization fails, which it shouldn't for any value of this type.
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// The years the year wheel offers.
    pub fn years(&self) -> RangeInclusive<i16> {
        self.first_year..=self.last_year
    }

    /// Checks the things serde can't.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(invalid("the catalog has no plans"));
        }

        let mut ids = BTreeSet::new();
        for plan in &self.catalog {
            if !ids.insert(plan.id) {
                return Err(invalid(format!("plan id {} is used twice", plan.id)));
            }
        }

        if self.first_year > self.last_year {
            return Err(invalid(format!(
                "first_year {} is after last_year {}",
                self.first_year, self.last_year
            )));
        }

        if !self.years().contains(&self.default_date.year()) {
            return Err(invalid(format!(
                "default_date {} is outside {}..={}",
                self.default_date, self.first_year, self.last_year
            )));
        }

        let wheel = &self.wheel;
        if !(wheel.item_height > 0.0 && wheel.viewport_height > 0.0 && wheel.padding >= 0.0) {
            return Err(invalid(format!("bad wheel layout: {wheel:?}")));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::Month;

    #[test]
    fn default_config_is_valid() {
        let config = BookingConfig::default();
        config.validate().expect("built-in config");
        assert_eq!(config.years(), 2010..=2025);
        assert_eq!(config.default_date, DateSelection::new(1, Month::January, 2025));
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = BookingConfig::from_ron_str(
            r#"(
                program_name: "Summer camp",
                default_date: (day: 15, month: March, year: 2025),
            )"#,
        )
        .expect("valid config");
        assert_eq!(config.program_name, "Summer camp");
        assert_eq!(config.default_date, DateSelection::new(15, Month::March, 2025));
        assert_eq!(config.catalog, default_catalog());
    }

    #[test]
    fn rejects_nonsense() {
        let cases = [
            "(catalog: [])",
            "(first_year: 2030, last_year: 2020)",
            "(default_date: (day: 1, month: January, year: 1999))",
            r#"(catalog: [
                (id: 1, label: "a", week_count: 1, day_count: "1 day", price: "$1"),
                (id: 1, label: "b", week_count: 2, day_count: "2 days", price: "$2"),
            ])"#,
            "(wheel: (item_height: 0.0))",
        ];
        for ron in cases {
            let err = BookingConfig::from_ron_str(ron).expect_err(ron);
            assert!(matches!(err, Error::InvalidConfig(_)), "{ron}: {err}");
        }
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = BookingConfig::from_ron_str("(first_year: \"soon\")").expect_err("bad type");
        assert!(matches!(err, Error::Parse(_)), "{err}");
    }

    #[test]
    fn load_round_trips_through_a_file() {
        let mut config = BookingConfig::default();
        config.catalog.truncate(2);
        config.last_year = 2030;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let ron = config.to_ron_string().expect("serializable");
        file.write_all(ron.as_bytes()).expect("write config");

        assert_eq!(BookingConfig::load(file.path()).expect("load"), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = BookingConfig::load(dir.path().join("nope.ron")).expect_err("no such file");
        assert!(matches!(err, Error::Io { .. }), "{err}");
    }
}
