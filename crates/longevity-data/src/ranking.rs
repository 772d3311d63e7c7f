use crate::record::Record;

/// Number of rows a ranked view keeps.
pub const TOP_N: usize = 10;

/// Ordering direction for ranked views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A display row of a ranked view.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub name: String,
    pub birth_date: String,
    pub death_date: String,
    pub location_of_death: String,
    /// Whole years lived, truncated toward zero.
    pub age: i64,
    /// Highlight marker for subjects still alive.
    pub living: bool,
}

impl RankedRow {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            birth_date: record.birth_date_label(),
            death_date: record.death_date_label(),
            location_of_death: record.location_label().to_owned(),
            age: record.lifespan.truncated_years(),
            living: record.is_living(),
        }
    }
}

/// Top-10 view of the dataset ordered by lived days.
#[derive(Debug, Clone)]
pub struct RankedView {
    pub caption: String,
    pub rows: Vec<RankedRow>,
}

impl RankedView {
    /// Builds the view: stable sort by lived days in `direction`, keeping
    /// the first [`TOP_N`] rows. Ties keep the original record order.
    #[must_use]
    pub fn build(records: &[Record], direction: SortDirection) -> Self {
        let mut ordered = records.iter().collect::<Vec<_>>();
        ordered.sort_by(|a, b| {
            let cmp = a.lifespan.days.total_cmp(&b.lifespan.days);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });

        let rows = ordered
            .into_iter()
            .take(TOP_N)
            .map(RankedRow::from_record)
            .collect();
        let caption = match direction {
            SortDirection::Descending => "Top 10 leaders by age lived, oldest first",
            SortDirection::Ascending => "Top 10 leaders by age lived, youngest first",
        };

        Self {
            caption: caption.to_owned(),
            rows,
        }
    }
}
