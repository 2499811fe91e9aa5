//! Command implementations for the campsite CLI.
//!
//! Provides subcommands for downloading a campground's campsites and
//! filtering them against availability and site criteria.

use clap::Subcommand;

pub mod fetch;
pub mod filter;

#[derive(Subcommand)]
pub enum Command {
    /// Filter campsites and print the survivors with their month calendar
    Filter(filter::FilterArgs),

    /// List the distinct campsite types of a campground
    Types {
        /// Search response JSON, or a merged campsite list written by `fetch`
        #[arg(short = 's', long)]
        search_json: String,
    },

    /// Download campsites and month availability from recreation.gov
    Fetch {
        /// recreation.gov campground (facility) id, e.g. 233563
        #[arg(short = 'c', long)]
        campground_id: String,

        /// Month to fetch as YYYY-MM (defaults to next month)
        #[arg(short = 'm', long)]
        month: Option<String>,

        /// Output path for the merged campsite JSON ("-" for stdout)
        #[arg(short = 'o', long, default_value = "-")]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Filter(args) => filter::run_filter(&args),
        Command::Types { search_json } => filter::run_types(&search_json),
        Command::Fetch {
            campground_id,
            month,
            output,
        } => fetch::run_fetch(&campground_id, month.as_deref(), &output).await,
    }
}
