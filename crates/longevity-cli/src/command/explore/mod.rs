//! Interactive terminal UI over the same data as the report: the two
//! ranked tables, the statistics bar chart, and the age-frequency
//! histogram, one page at a time.

use anyhow::Context as _;
use clap::Args;
use longevity_data::ranking::{RankedView, SortDirection};
use longevity_stats::{frequency::FrequencyTable, summary::LifespanSummary};

use self::app::{AppData, ExploreApp};
use crate::{
    command::{DatasetArg, lifespan_series},
    tui::Tui,
};

mod app;
mod screens;

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ExploreArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,
}

pub(crate) fn run(arg: &ExploreArg) -> anyhow::Result<()> {
    let records = arg.dataset.load()?;

    let oldest = RankedView::build(&records, SortDirection::Descending);
    let youngest = RankedView::build(&records, SortDirection::Ascending);

    let (lived_days, lived_years) = lifespan_series(&records);
    let summary =
        LifespanSummary::new(&lived_days, &lived_years).context("no records to summarize")?;
    let frequency = FrequencyTable::new(lived_years);

    let mut app = ExploreApp::new(AppData {
        oldest,
        youngest,
        summary,
        frequency,
    });
    Tui::new().run(&mut app)
}
