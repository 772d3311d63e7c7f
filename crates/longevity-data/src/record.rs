use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::lifespan::Lifespan;

/// Sentinel shown for death-related fields of subjects still alive.
pub const LIVING: &str = "Living";

/// Date format of the source table (e.g. `Feb 22, 1732`).
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// One row of the source table, as it appears on disk.
///
/// Death date and location are empty for living subjects; the `csv`
/// deserializer maps empty fields to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "LEADER")]
    pub name: String,
    #[serde(rename = "BIRTH DATE")]
    pub birth_date: String,
    #[serde(rename = "DEATH DATE")]
    pub death_date: Option<String>,
    #[serde(rename = "LOCATION OF DEATH")]
    pub location_of_death: Option<String>,
}

/// A leader record with its derived lifespan.
///
/// Derivation happens exactly once, in [`Record::derive`]; the record is
/// treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub birth_date: NaiveDate,
    /// `None` for subjects still alive.
    pub death_date: Option<NaiveDate>,
    /// `None` for subjects still alive.
    pub location_of_death: Option<String>,
    pub year_of_birth: i32,
    pub lifespan: Lifespan,
}

impl Record {
    /// Builds a record from a raw row, measuring the lifespan against the
    /// death date or, for living subjects, against `as_of`.
    pub fn derive(raw: &RawRecord, as_of: NaiveDate) -> anyhow::Result<Self> {
        let birth_date = parse_date(&raw.birth_date)
            .with_context(|| format!("invalid birth date for {}", raw.name))?;
        let death_date = raw
            .death_date
            .as_deref()
            .map(|s| parse_date(s).with_context(|| format!("invalid death date for {}", raw.name)))
            .transpose()?;

        let end = death_date.unwrap_or(as_of);
        let lifespan = Lifespan::between(birth_date, end);

        Ok(Self {
            name: raw.name.clone(),
            birth_date,
            death_date,
            location_of_death: raw.location_of_death.clone(),
            year_of_birth: birth_date.year(),
            lifespan,
        })
    }

    /// Whether the record has no death date.
    #[must_use]
    pub fn is_living(&self) -> bool {
        self.death_date.is_none()
    }

    /// Birth date formatted for display.
    #[must_use]
    pub fn birth_date_label(&self) -> String {
        self.birth_date.format(DATE_FORMAT).to_string()
    }

    /// Death date for display; the [`LIVING`] sentinel when the subject is
    /// alive.
    #[must_use]
    pub fn death_date_label(&self) -> String {
        self.death_date
            .map_or_else(|| LIVING.to_owned(), |d| d.format(DATE_FORMAT).to_string())
    }

    /// Location of death for display, with the same sentinel substitution.
    #[must_use]
    pub fn location_label(&self) -> &str {
        self.location_of_death.as_deref().unwrap_or(LIVING)
    }
}

/// Parses a date in the source table's format, accepting the long month
/// spelling and ISO dates as fallbacks.
pub(crate) fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    const FORMATS: [&str; 3] = [DATE_FORMAT, "%B %d, %Y", "%Y-%m-%d"];

    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .with_context(|| format!("unrecognized date {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("Feb 22, 1732").unwrap(), date(1732, 2, 22));
        assert_eq!(parse_date("February 22, 1732").unwrap(), date(1732, 2, 22));
        assert_eq!(parse_date("1732-02-22").unwrap(), date(1732, 2, 22));
        assert!(parse_date("22nd of February").is_err());
    }

    #[test]
    fn test_living_labels() {
        let raw = RawRecord {
            name: "Second Leader".to_owned(),
            birth_date: "Jun 15, 1920".to_owned(),
            death_date: None,
            location_of_death: None,
        };
        let record = Record::derive(&raw, date(2026, 8, 6)).unwrap();
        assert!(record.is_living());
        assert_eq!(record.death_date_label(), LIVING);
        assert_eq!(record.location_label(), LIVING);
        assert_eq!(record.year_of_birth, 1920);
    }

    #[test]
    fn test_deceased_labels() {
        let raw = RawRecord {
            name: "First Leader".to_owned(),
            birth_date: "Jan 01, 1900".to_owned(),
            death_date: Some("Jan 01, 1950".to_owned()),
            location_of_death: Some("Springfield, Illinois".to_owned()),
        };
        let record = Record::derive(&raw, date(2026, 8, 6)).unwrap();
        assert!(!record.is_living());
        assert_eq!(record.death_date_label(), "Jan 01, 1950");
        assert_eq!(record.location_label(), "Springfield, Illinois");
        assert_eq!(record.lifespan.days, 18262.0);
    }
}
