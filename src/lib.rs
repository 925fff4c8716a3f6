use chrono::{Local, NaiveDate};
use clap::{ArgAction, ArgMatches, Command, arg, value_parser};
use std::{ffi::OsString, path::PathBuf};
use tracing::{debug, info};

pub mod calendar_path;
pub mod dates;
pub mod error;
pub mod logging;
pub mod tree;

pub use calendar_path::CalendarPath;
pub use dates::{DateRange, parse_date};
pub use error::{CalResult, CalendarError};
pub use tree::TreeStats;

pub const BASE_PATH_ENV: &str = "CALENDAR_BASE_PATH";
pub const DEFAULT_BASE_PATH: &str = "./calendar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub range: DateRange,
    pub base_path: PathBuf,
    pub verbose: bool,
}

impl Config {
    fn from_matches(matches: &ArgMatches, today: NaiveDate) -> CalResult<Self> {
        let range = DateRange::resolve(
            matches.get_one::<NaiveDate>("start_date").copied(),
            matches.get_one::<NaiveDate>("end_date").copied(),
            today,
        )?;

        Ok(Config {
            range,
            base_path: matches
                .get_one::<PathBuf>("base_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_PATH)),
            verbose: matches.get_flag("verbose"),
        })
    }

    /// Builds a config from an explicit argument list, `today` standing in
    /// for the current date.
    pub fn try_from_args<I, T>(args: I, today: NaiveDate) -> CalResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Self::from_matches(&matches, today)
    }
}

pub fn command() -> Command {
    Command::new("calendar-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a year/month/day calendar folder structure")
        .args([
            arg!([START_DATE] "Start date (YYYY-MM-DD), defaults to today")
                .value_parser(parse_date)
                .id("start_date"),
            arg!([END_DATE] "End date (YYYY-MM-DD), defaults to start date + 5 years")
                .value_parser(parse_date)
                .id("end_date"),
            arg!(-b --base <PATH> "Directory the calendar tree is created in")
                .required(false)
                .env(BASE_PATH_ENV)
                .default_value(DEFAULT_BASE_PATH)
                .value_parser(value_parser!(PathBuf))
                .id("base_path"),
            arg!(-v --verbose "Print a message for each created directory")
                .action(ArgAction::SetTrue)
                .id("verbose"),
        ])
}

/// Loads `.env` and parses the process arguments.
///
/// Variables already present in the environment win over the file. Argument
/// errors come back as `CalendarError::Usage` for the caller to report.
pub fn read_config() -> CalResult<Config> {
    match dotenv::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) => debug!("no environment file loaded: {e}"),
    }

    Config::try_from_args(std::env::args_os(), Local::now().date_naive())
}

pub fn run(config: &Config) -> CalResult<TreeStats> {
    println!("Generating calendar structure from {}", config.range);
    println!("Base path: {}", config.base_path.display());
    info!(days = config.range.len(), "resolved date range");

    let stats = tree::materialize(&config.base_path, &config.range, config.verbose)?;

    println!("Calendar structure generated successfully!");
    Ok(stats)
}
