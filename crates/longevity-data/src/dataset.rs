use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use chrono::NaiveDate;

use crate::record::{RawRecord, Record};

/// Loads and derives records from a CSV file.
///
/// Living subjects are measured against `as_of`. Errors carry the file path
/// as context; an empty dataset (after the footer drop) is an error.
pub fn load_records<P>(path: P, as_of: NaiveDate) -> anyhow::Result<Vec<Record>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let records =
        read_records(file, as_of).with_context(|| format!("failed to parse {}", path.display()))?;

    if records.is_empty() {
        anyhow::bail!("{} is empty", path.display());
    }

    Ok(records)
}

/// Reads records from any CSV source.
///
/// The last row is discarded unconditionally; the shipped dataset carries a
/// trailing attribution row there. Rows are deserialized as raw strings
/// first, so the footer never reaches date parsing.
pub fn read_records<R>(reader: R, as_of: NaiveDate) -> anyhow::Result<Vec<Record>>
where
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut raws = Vec::new();
    for row in csv_reader.deserialize() {
        let raw: RawRecord = row?;
        raws.push(raw);
    }
    raws.pop();

    raws.iter()
        .enumerate()
        .map(|(idx, raw)| Record::derive(raw, as_of).with_context(|| format!("row {}", idx + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LIVING;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const CSV: &str = "\
LEADER,BIRTH DATE,DEATH DATE,LOCATION OF DEATH
First Leader,\"Jan 01, 1900\",\"Jan 01, 1950\",\"Springfield, Illinois\"
Second Leader,\"Jun 15, 1920\",,
Source: footer row to discard,,,
";

    #[test]
    fn test_footer_row_is_dropped() {
        let records = read_records(CSV.as_bytes(), date(2026, 8, 6)).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.name.starts_with("Source:")));
    }

    #[test]
    fn test_end_to_end_derivation() {
        let as_of = date(2026, 8, 6);
        let records = read_records(CSV.as_bytes(), as_of).unwrap();

        assert_eq!(records[0].lifespan.days, 18262.0);

        let second = &records[1];
        assert!(second.is_living());
        #[expect(clippy::cast_precision_loss)]
        let expected = (as_of - date(1920, 6, 15)).num_days() as f64;
        assert_eq!(second.lifespan.days, expected);
        assert_eq!(second.death_date_label(), LIVING);
        assert_eq!(second.location_label(), LIVING);
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let csv = "\
LEADER,BIRTH DATE,DEATH DATE,LOCATION OF DEATH
Broken,not a date,,
Source: footer,,,
";
        assert!(read_records(csv.as_bytes(), date(2026, 8, 6)).is_err());
    }

    #[test]
    fn test_footer_only_input_yields_nothing() {
        let csv = "\
LEADER,BIRTH DATE,DEATH DATE,LOCATION OF DEATH
Source: footer,,,
";
        let records = read_records(csv.as_bytes(), date(2026, 8, 6)).unwrap();
        assert!(records.is_empty());
    }
}
