//! Record model and dataset loading for the leaders lifespan analysis.
//!
//! This crate owns everything between the CSV file on disk and the series
//! the statistics are computed over:
//!
//! - [`record`]: the raw CSV row and the derived [`Record`](record::Record)
//! - [`lifespan`]: day/month/year duration derivation with as-of
//!   substitution for living subjects
//! - [`dataset`]: CSV loading, including the unconditional footer-row drop
//! - [`ranking`]: top-10 views ordered by lived days
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use longevity_data::{dataset, ranking::{RankedView, SortDirection}};
//!
//! # fn main() -> anyhow::Result<()> {
//! let csv = "\
//! LEADER,BIRTH DATE,DEATH DATE,LOCATION OF DEATH
//! First Leader,\"Jan 01, 1900\",\"Jan 01, 1950\",\"Springfield, Illinois\"
//! Second Leader,\"Jun 15, 1920\",,
//! Source: footer row,,,
//! ";
//! let as_of = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let records = dataset::read_records(csv.as_bytes(), as_of)?;
//! assert_eq!(records.len(), 2); // the footer row never becomes a record
//!
//! let oldest = RankedView::build(&records, SortDirection::Descending);
//! assert_eq!(oldest.rows[0].name, "Second Leader");
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod lifespan;
pub mod ranking;
pub mod record;
