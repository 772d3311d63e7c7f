use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use longevity_data::{dataset, record::Record};

use self::{explore::ExploreArg, report::ReportArg};

mod explore;
mod report;

/// Default location of the shipped dataset.
const DEFAULT_DATA_PATH: &str = "data/leaders.csv";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the ranked tables and lifespan statistics to stdout
    Report(#[clap(flatten)] ReportArg),
    /// Browse the tables and charts in the terminal
    Explore(#[clap(flatten)] ExploreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Explore(ExploreArg::default())) {
        Mode::Report(arg) => report::run(&arg),
        Mode::Explore(arg) => explore::run(&arg),
    }
}

/// Arguments shared by every mode that reads the dataset.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the leaders CSV file
    #[arg(default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Measure living subjects against this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl Default for DatasetArg {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            as_of: None,
        }
    }
}

impl DatasetArg {
    pub(crate) fn load(&self) -> anyhow::Result<Vec<Record>> {
        let as_of = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        let records = dataset::load_records(&self.data, as_of)?;
        eprintln!("Loaded {} records from {}", records.len(), self.data.display());
        Ok(records)
    }
}

/// Extracts the parallel series the statistics are computed over.
pub(crate) fn lifespan_series(records: &[Record]) -> (Vec<f64>, Vec<i64>) {
    let lived_days = records.iter().map(|r| r.lifespan.days).collect();
    let lived_years = records
        .iter()
        .map(|r| r.lifespan.truncated_years())
        .collect();
    (lived_days, lived_years)
}
