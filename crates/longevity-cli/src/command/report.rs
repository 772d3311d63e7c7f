//! Plain-text report: the ranked tables and the statistics summary on
//! stdout.

use anyhow::Context as _;
use clap::Args;
use longevity_data::ranking::{RankedView, SortDirection};
use longevity_stats::summary::LifespanSummary;

use crate::command::{DatasetArg, lifespan_series};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let records = arg.dataset.load()?;

    print_ranked_table(&RankedView::build(&records, SortDirection::Descending));
    println!();
    print_ranked_table(&RankedView::build(&records, SortDirection::Ascending));
    println!();

    let (lived_days, lived_years) = lifespan_series(&records);
    let summary =
        LifespanSummary::new(&lived_days, &lived_years).context("no records to summarize")?;
    print_summary_table(&summary);

    Ok(())
}

fn print_ranked_table(view: &RankedView) {
    println!("{}", view.caption);
    println!(
        "  {:<28} {:>14} {:>14} {:<26} {:>4}",
        "LEADER", "BIRTH DATE", "DEATH DATE", "LOCATION OF DEATH", "AGE"
    );
    println!("  {}", "-".repeat(90));
    for row in &view.rows {
        let marker = if row.living { "*" } else { " " };
        println!(
            "{marker} {:<28} {:>14} {:>14} {:<26} {:>4}",
            row.name, row.birth_date, row.death_date, row.location_of_death, row.age
        );
    }
    println!("  * still living; age measured as of the report date");
}

fn print_summary_table(summary: &LifespanSummary) {
    let years = summary.in_years();

    println!("Lifespan statistics");
    println!(
        "  {:<22} {:>18} {:>14}",
        "Statistic", "Age (Days)", "Age (Years)"
    );
    println!("  {}", "-".repeat(56));

    let rows = [
        ("Mean Age", fmt(summary.mean), fmt(years.mean)),
        (
            "Weighted Mean Age",
            fmt(summary.weighted_mean),
            fmt(years.weighted_mean),
        ),
        ("Median Age", fmt(summary.median), fmt(years.median)),
        ("Mode Age", fmt_list(&summary.mode), fmt_list(&years.mode)),
        ("Maximum Age", fmt(summary.max), fmt(years.max)),
        ("Minimum Age", fmt(summary.min), fmt(years.min)),
        (
            "Standard Deviation",
            fmt(summary.std_dev),
            fmt(years.std_dev),
        ),
    ];
    for (label, days, years) in rows {
        println!("  {label:<22} {days:>18} {years:>14}");
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.2}")
}

/// The mode may hold several values; render it as a bracketed list.
fn fmt_list(values: &[f64]) -> String {
    let joined = values.iter().map(|v| fmt(*v)).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_list_renders_ties() {
        assert_eq!(fmt_list(&[18250.0, 29200.0]), "[18250.00, 29200.00]");
        assert_eq!(fmt_list(&[18250.0]), "[18250.00]");
    }
}
