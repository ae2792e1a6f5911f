//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;
use crate::eggs::params::{self, Params};
use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(
    name = "henhouse",
    version,
    about = "Egg production records, farm blog and FAQ"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Write output to FILE instead of stdout
    #[arg(long = "out", global = true, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Document store directory [env: HENHOUSE_DATA_DIR]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Egg record export (.csv, or .json sheet values) [env: HENHOUSE_SHEET]
    #[arg(long, global = true, value_name = "FILE")]
    pub sheet: Option<PathBuf>,

    /// Signed-in user [env: HENHOUSE_USER]
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Role of the signed-in user: admin or staff [env: HENHOUSE_ROLE]
    #[arg(long, global = true)]
    pub role: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Global flags that override the environment configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_dir: self.data_dir.clone(),
            sheet: self.sheet.clone(),
            user: self.user.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Egg production records
    #[command(subcommand)]
    Eggs(EggsCommand),
    /// Blog posts
    #[command(subcommand)]
    Blog(BlogCommand),
    /// Frequently asked questions
    #[command(subcommand)]
    Faq(FaqCommand),
    /// The about page
    #[command(subcommand)]
    About(AboutCommand),
}

#[derive(Debug, Subcommand)]
pub enum EggsCommand {
    /// List one page of matching records
    List(FilterArgs),
    /// Production totals over matching records
    Stats(StatsArgs),
    /// Houses present in matching records
    Houses(FilterArgs),
}

/// Record filters. Values are passed through as raw request parameters,
/// so malformed input is normalized rather than rejected.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring of the house name
    #[arg(long, value_name = "TEXT")]
    pub search_house: Option<String>,

    /// Exact date text as it appears in the sheet
    #[arg(long, value_name = "DATE")]
    pub search_date: Option<String>,

    /// Exact house name
    #[arg(long, value_name = "HOUSE")]
    pub filter_house: Option<String>,

    /// First day of the date range (inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the date range (inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Page number, 8 records per page
    #[arg(long, value_name = "N")]
    pub page: Option<String>,

    /// Field to order by; prefix with - for descending
    #[arg(long, value_name = "FIELD", allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// How the two search options combine: all or any
    #[arg(long = "match", value_name = "MODE")]
    pub match_mode: Option<String>,
}

impl FilterArgs {
    /// The request parameters these flags stand for.
    pub fn to_params(&self) -> Params {
        [
            (params::SEARCH_HOUSE, &self.search_house),
            (params::SEARCH_DATE, &self.search_date),
            (params::FILTER_HOUSE, &self.filter_house),
            (params::FILTER_DATE_START, &self.from),
            (params::FILTER_DATE_END, &self.to),
            (params::PAGE, &self.page),
            (params::SORT, &self.sort),
            (params::MATCH_MODE, &self.match_mode),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Day counted as today (defaults to the local date)
    #[arg(long, value_name = "DATE", value_parser = parse_day)]
    pub today: Option<NaiveDate>,
}

fn parse_day(text: &str) -> Result<NaiveDate, String> {
    henhouse_seeker::parse_date(text).ok_or_else(|| format!("not a date: {text}"))
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    /// List all posts
    List,
    /// Show one post
    Show { id: String },
    /// Publish a post
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
    /// Delete a post (admin)
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum FaqCommand {
    /// List all entries
    List,
    /// Add an entry (admin)
    Add {
        #[arg(long, default_value = "")]
        question: String,
        #[arg(long, default_value = "")]
        answer: String,
    },
    /// Delete an entry (admin)
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum AboutCommand {
    /// Show the about page
    Show,
    /// Replace the about page content (admin)
    Set { content: String },
}
