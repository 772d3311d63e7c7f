//! Statistical analysis utilities for the longevity project.
//!
//! This crate provides the aggregate computations over a lived-days series:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation,
//!   extrema
//! - **Frequency tables**: value counts over the truncated whole-year
//!   domain, including mode extraction and per-record weights
//! - **Lifespan summary**: the seven reported statistics combining both,
//!   with day-to-year unit scaling
//!
//! # Modules
//!
//! - [`descriptive`]: descriptive statistics for summarizing datasets
//! - [`frequency`]: value counts, modes, and weights over discrete values
//! - [`summary`]: the combined seven-statistic summary
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use longevity_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing the full summary
//!
//! ```
//! use longevity_stats::summary::LifespanSummary;
//!
//! let lived_days = [18262.0, 18263.0, 29000.0];
//! let lived_years = [50, 50, 80];
//! let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();
//!
//! // Records sharing a truncated-year value weigh more.
//! assert_eq!(summary.weighted_mean, 20410.0);
//! assert_eq!(summary.mode, vec![50.0 * 365.0]);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod summary;
