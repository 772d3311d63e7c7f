use crate::{descriptive::DescriptiveStats, frequency::FrequencyTable};

/// Days-per-year scale used for the year-units view and the mode rescaling.
///
/// The report divides by a flat 365, not the Julian 365.25 used when
/// deriving fractional years from day counts.
pub const REPORT_DAYS_PER_YEAR: f64 = 365.0;

/// The seven summary statistics over a lived-days series, in day units.
///
/// Built from two parallel series: the continuous lived-days values and the
/// truncated whole-year values. The mode lives in the years domain and is
/// rescaled to a days-equivalent; everything else is computed on the days
/// series directly.
///
/// # Examples
///
/// ```
/// use longevity_stats::summary::LifespanSummary;
///
/// let lived_days = [18262.0, 18263.0, 29000.0];
/// let lived_years = [50, 50, 80];
/// let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();
///
/// // weights {2, 2, 1}: (2·18262 + 2·18263 + 29000) / 5
/// assert_eq!(summary.weighted_mean, 20410.0);
/// assert_eq!(summary.median, 18263.0);
/// ```
#[derive(Debug, Clone)]
pub struct LifespanSummary {
    /// Arithmetic mean of lived days.
    pub mean: f64,
    /// Mean of lived days where each record is weighted by how many records
    /// share its truncated-year value. Over-weights commonly occurring ages;
    /// intentional, reproduced from the modeled report.
    pub weighted_mean: f64,
    /// Median of lived days.
    pub median: f64,
    /// Days-equivalents of the most frequent truncated-year value(s),
    /// ascending. More than one entry on a frequency tie.
    pub mode: Vec<f64>,
    /// Longest lived days.
    pub max: f64,
    /// Shortest lived days.
    pub min: f64,
    /// Sample standard deviation of lived days.
    pub std_dev: f64,
}

impl LifespanSummary {
    /// Computes the summary from parallel lived-days / truncated-years
    /// series.
    ///
    /// Returns `None` for empty input.
    ///
    /// # Panics
    ///
    /// Panics if the series lengths differ.
    #[must_use]
    pub fn new(lived_days: &[f64], lived_years: &[i64]) -> Option<Self> {
        assert_eq!(
            lived_days.len(),
            lived_years.len(),
            "series must be parallel"
        );

        let stats = DescriptiveStats::new(lived_days.iter().copied())?;
        let frequency = FrequencyTable::new(lived_years.iter().copied());

        #[expect(clippy::cast_precision_loss)]
        let mode = frequency
            .modes()
            .into_iter()
            .map(|year| year as f64 * REPORT_DAYS_PER_YEAR)
            .collect();

        Some(Self {
            mean: stats.mean,
            weighted_mean: weighted_mean(lived_days, lived_years, &frequency),
            median: stats.median,
            mode,
            max: stats.max,
            min: stats.min,
            std_dev: stats.std_dev,
        })
    }

    /// The same statistics in year units (day figures divided by 365).
    #[must_use]
    pub fn in_years(&self) -> Self {
        Self {
            mean: self.mean / REPORT_DAYS_PER_YEAR,
            weighted_mean: self.weighted_mean / REPORT_DAYS_PER_YEAR,
            median: self.median / REPORT_DAYS_PER_YEAR,
            mode: self
                .mode
                .iter()
                .map(|days| days / REPORT_DAYS_PER_YEAR)
                .collect(),
            max: self.max / REPORT_DAYS_PER_YEAR,
            min: self.min / REPORT_DAYS_PER_YEAR,
            std_dev: self.std_dev / REPORT_DAYS_PER_YEAR,
        }
    }
}

/// `Σ(weight_i × days_i) / Σ(weight_i)` with each record's weight equal to
/// the frequency of its truncated-year value across the dataset.
#[expect(clippy::cast_precision_loss)]
fn weighted_mean(lived_days: &[f64], lived_years: &[i64], frequency: &FrequencyTable) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for (&days, &years) in lived_days.iter().zip(lived_years) {
        let weight = frequency.count(years) as f64;
        weighted_sum += weight * days;
        weight_total += weight;
    }
    weighted_sum / weight_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        assert!(LifespanSummary::new(&[], &[]).is_none());
    }

    #[test]
    fn test_weighted_mean_matches_hand_computation() {
        let lived_days = [18262.0, 18263.0, 29000.0];
        let lived_years = [50, 50, 80];
        let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();

        let expected = (2.0 * 18262.0 + 2.0 * 18263.0 + 29000.0) / 5.0;
        assert_eq!(summary.weighted_mean, expected);
        assert_eq!(summary.weighted_mean, 20410.0);
    }

    #[test]
    fn test_mode_is_rescaled_from_years() {
        let lived_days = [18262.0, 18300.0, 29200.0, 29300.0, 22000.0];
        let lived_years = [50, 50, 80, 80, 60];
        let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();

        // Tie between 50 and 80; both reported, as days-equivalents.
        assert_eq!(summary.mode, vec![50.0 * 365.0, 80.0 * 365.0]);
    }

    #[test]
    fn test_year_units_divide_by_flat_365() {
        let lived_days = [18262.0, 18263.0, 29000.0];
        let lived_years = [50, 50, 80];
        let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();

        let years = summary.in_years();
        assert_eq!(years.mean, summary.mean / 365.0);
        assert_eq!(years.max, summary.max / 365.0);
        assert_eq!(years.mode, vec![50.0]);
    }

    #[test]
    fn test_unweighted_statistics_match_descriptive() {
        let lived_days = [10000.0, 20000.0, 30000.0, 40000.0];
        let lived_years = [27, 54, 82, 109];
        let summary = LifespanSummary::new(&lived_days, &lived_years).unwrap();

        assert_eq!(summary.mean, 25000.0);
        assert_eq!(summary.median, 25000.0);
        assert_eq!(summary.min, 10000.0);
        assert_eq!(summary.max, 40000.0);
        // All weights are 1, so the weighted mean collapses to the mean.
        assert_eq!(summary.weighted_mean, summary.mean);
    }
}
