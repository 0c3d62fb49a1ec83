use std::path::PathBuf;

/// Anything that can go wrong while setting up a booking page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid RON for a [`crate::BookingConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A config could not be written out as RON.
    #[error("failed to write config: {0}")]
    Serialize(#[from] ron::Error),

    /// The configuration parsed, but makes no sense (e.g. an empty catalog).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The selection could not be turned into a calendar date.
    #[error("invalid date: {0}")]
    Date(#[from] jiff::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_errors_convert() {
        let err = Error::from(ron::Error::Message("unsupported value".to_owned()));
        assert!(matches!(err, Error::Serialize(_)));
        assert_eq!(err.to_string(), "failed to write config: unsupported value");
    }
}
