use std::collections::BTreeMap;

/// Frequency table of discrete values (truncated whole years, here).
///
/// Entries are ordered by descending count, ties by ascending value, so the
/// order is deterministic. The table doubles as the histogram input: one
/// chart bar per entry, in entry order.
///
/// # Examples
///
/// ```
/// use longevity_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::new([67, 67, 90, 53, 67, 90]);
/// assert_eq!(table.entries(), &[(67, 3), (90, 2), (53, 1)]);
/// assert_eq!(table.count(67), 3);
/// assert_eq!(table.modes(), vec![67]);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<(i64, u64)>,
    counts: BTreeMap<i64, u64>,
}

impl FrequencyTable {
    /// Counts occurrences of each distinct value.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0_u64) += 1;
        }

        let mut entries = counts.iter().map(|(&v, &c)| (v, c)).collect::<Vec<_>>();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Self { entries, counts }
    }

    /// Distinct values with their counts, most frequent first.
    #[must_use]
    pub fn entries(&self) -> &[(i64, u64)] {
        &self.entries
    }

    /// How many records share `value`; 0 when the value is absent.
    #[must_use]
    pub fn count(&self, value: i64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Highest count in the table (0 for an empty table).
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.entries.first().map_or(0, |&(_, count)| count)
    }

    /// The most frequent value(s), ascending. Multiple on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use longevity_stats::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::new([90, 90, 53, 53, 67]);
    /// assert_eq!(table.modes(), vec![53, 90]);
    /// ```
    #[must_use]
    pub fn modes(&self) -> Vec<i64> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }

        let mut modes = self
            .entries
            .iter()
            .filter(|&&(_, count)| count == max)
            .map(|&(value, _)| value)
            .collect::<Vec<_>>();
        modes.sort_unstable();
        modes
    }

    /// Whether the table holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert!(table.modes().is_empty());
        assert_eq!(table.count(50), 0);
    }

    #[test]
    fn test_entry_order_is_count_then_value() {
        let table = FrequencyTable::new([80, 50, 50, 80, 60]);
        // Counts tie at 2 for 50 and 80; the smaller value comes first.
        assert_eq!(table.entries(), &[(50, 2), (80, 2), (60, 1)]);
    }

    #[test]
    fn test_tied_modes_are_all_reported() {
        let table = FrequencyTable::new([80, 50, 50, 80, 60]);
        assert_eq!(table.modes(), vec![50, 80]);
    }

    #[test]
    fn test_counts_are_per_value() {
        let table = FrequencyTable::new([67, 67, 67, 53]);
        assert_eq!(table.count(67), 3);
        assert_eq!(table.count(53), 1);
        assert_eq!(table.max_count(), 3);
    }
}
