use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

/// Presets understood by [`format_datetime`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    #[default]
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format preset `{0}`")]
pub struct UnknownDateFormat(pub String);

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DateFormat::Full),
            "medium" => Ok(DateFormat::Medium),
            other => Err(UnknownDateFormat(other.to_string())),
        }
    }
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

pub fn format_datetime(date: NaiveDateTime, format: DateFormat) -> String {
    date.format(format.pattern()).to_string()
}

/// Accepts the layouts a browser or a hand-typed form produces.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    const LAYOUTS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    let value = value.trim();
    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn evening() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2035, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn formats_full() {
        assert_eq!(
            format_datetime(evening(), DateFormat::Full),
            "Monday May, 21, 2035 at 9:30PM"
        );
    }

    #[test]
    fn formats_medium() {
        assert_eq!(
            format_datetime(evening(), DateFormat::Medium),
            "Mon 05, 21, 2035 9:30PM"
        );
    }

    #[test]
    fn parses_presets() {
        assert_eq!("full".parse::<DateFormat>(), Ok(DateFormat::Full));
        assert_eq!("medium".parse::<DateFormat>(), Ok(DateFormat::Medium));
        assert!("short".parse::<DateFormat>().is_err());
    }

    #[test]
    fn parses_form_dates() {
        assert_eq!(parse_datetime("2035-05-21 21:30:00"), Some(evening()));
        assert_eq!(parse_datetime("2035-05-21T21:30"), Some(evening()));
        assert_eq!(parse_datetime(" 2035-05-21 21:30 "), Some(evening()));
        assert_eq!(parse_datetime("next tuesday"), None);
    }
}
