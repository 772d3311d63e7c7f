use chrono::NaiveDate;

/// Average days per calendar month used for fractional month counts.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Julian-year length used for fractional year counts.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Duration of a life measured between two calendar dates.
///
/// The day count is exact; month and year counts are fractional, derived
/// with the Julian-style conversion constants above.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use longevity_data::lifespan::Lifespan;
///
/// let birth = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
/// let death = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
/// let lifespan = Lifespan::between(birth, death);
/// assert_eq!(lifespan.days, 18262.0);
/// assert_eq!(lifespan.truncated_years(), 49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifespan {
    /// Exact number of days between the two dates.
    pub days: f64,
    /// Fractional months (`days / 30.44`).
    pub months: f64,
    /// Fractional years (`days / 365.25`).
    pub years: f64,
}

impl Lifespan {
    /// Measures the span from `birth` to `end`.
    ///
    /// No ordering validation is performed: an `end` before `birth` yields
    /// a negative span that propagates into every derived statistic.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn between(birth: NaiveDate, end: NaiveDate) -> Self {
        let days = (end - birth).num_days() as f64;
        Self {
            days,
            months: days / DAYS_PER_MONTH,
            years: days / DAYS_PER_YEAR,
        }
    }

    /// Whole years lived, truncated toward zero (never rounded).
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn truncated_years(&self) -> i64 {
        self.years.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_day_count() {
        // 50 calendar years with 12 leap days in between.
        let lifespan = Lifespan::between(date(1900, 1, 1), date(1950, 1, 1));
        assert_eq!(lifespan.days, 18262.0);
    }

    #[test]
    fn test_fractional_units_track_day_count() {
        let lifespan = Lifespan::between(date(1920, 6, 15), date(2003, 2, 1));
        assert!((lifespan.years - lifespan.days / DAYS_PER_YEAR).abs() < 1e-9);
        assert!((lifespan.months - lifespan.days / DAYS_PER_MONTH).abs() < 1e-9);
    }

    #[test]
    fn test_truncation_never_rounds_up() {
        // 18262 days is just shy of 50 Julian years.
        let lifespan = Lifespan::between(date(1900, 1, 1), date(1950, 1, 1));
        assert!(lifespan.years > 49.99);
        assert_eq!(lifespan.truncated_years(), 49);
    }

    #[test]
    fn test_reversed_dates_go_negative() {
        // Not validated; a malformed pair propagates as a negative span.
        let lifespan = Lifespan::between(date(1950, 1, 1), date(1900, 1, 1));
        assert_eq!(lifespan.days, -18262.0);
        assert!(lifespan.years < 0.0);
    }
}
