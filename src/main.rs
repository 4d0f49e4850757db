//! Demo CLI for rmonth_sort
//!
//! Prints a list of dates before and after sorting them: months with an 'r'
//! first and ascending, the rest after and descending.

use anyhow::{Context, Result};
use clap::Parser;
use rmonth_sort::{Date, sort_dates};
use tracing_subscriber::EnvFilter;

/// Two dates in every month of 2023, used when no dates are given
const SAMPLE_DATES: [(u16, u8, u8); 24] = [
    (2023, 1, 15),
    (2023, 2, 28),
    (2023, 3, 10),
    (2023, 4, 5),
    (2023, 5, 20),
    (2023, 6, 8),
    (2023, 7, 17),
    (2023, 8, 3),
    (2023, 9, 29),
    (2023, 10, 12),
    (2023, 11, 15),
    (2023, 12, 2),
    (2023, 1, 14),
    (2023, 2, 25),
    (2023, 3, 11),
    (2023, 4, 6),
    (2023, 5, 21),
    (2023, 6, 9),
    (2023, 7, 18),
    (2023, 8, 2),
    (2023, 9, 28),
    (2023, 10, 13),
    (2023, 11, 14),
    (2023, 12, 1),
];

#[derive(Parser)]
#[command(name = "rmonth-sort")]
#[command(
    about = "Sort dates: months with an 'r' first (ascending), the rest after (descending)",
    long_about = None
)]
struct Cli {
    /// Dates to sort, as YYYY-MM-DD or MM/DD/YYYY. Uses a built-in sample when empty.
    dates: Vec<String>,

    /// Print the sorted dates as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dates = if cli.dates.is_empty() {
        tracing::debug!(count = SAMPLE_DATES.len(), "no dates given, using sample list");
        sample_dates()?
    } else {
        parse_dates(&cli.dates)?
    };

    let sorted = sort_dates(&dates);
    tracing::debug!(count = sorted.len(), "sorted dates");

    if cli.json {
        println!("{}", serde_json::to_string(&sorted)?);
    } else {
        println!("before: {}", format_list(&dates));
        println!("after:  {}", format_list(&sorted));
    }

    Ok(())
}

fn sample_dates() -> Result<Vec<Date>> {
    SAMPLE_DATES
        .iter()
        .map(|&ymd| Date::try_from(ymd).with_context(|| format!("invalid sample date {ymd:?}")))
        .collect()
}

fn parse_dates(args: &[String]) -> Result<Vec<Date>> {
    args.iter()
        .map(|arg| {
            arg.parse::<Date>()
                .with_context(|| format!("invalid date argument '{arg}'"))
        })
        .collect()
}

fn format_list(dates: &[Date]) -> String {
    let items: Vec<String> = dates.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dates_are_valid() {
        let dates = sample_dates().expect("sample dates should all be valid");
        assert_eq!(dates.len(), SAMPLE_DATES.len());
    }

    #[test]
    fn test_sample_sorts_by_month_sequence() {
        let dates = sample_dates().expect("sample dates should all be valid");
        let sorted: Vec<String> = sort_dates(&dates).iter().map(ToString::to_string).collect();
        assert_eq!(
            sorted,
            [
                "2023-01-14", "2023-01-15", "2023-02-25", "2023-02-28", "2023-03-10", "2023-03-11",
                "2023-04-05", "2023-04-06", "2023-09-28", "2023-09-29", "2023-10-12", "2023-10-13",
                "2023-11-14", "2023-11-15", "2023-12-01", "2023-12-02", "2023-08-03", "2023-08-02",
                "2023-07-18", "2023-07-17", "2023-06-09", "2023-06-08", "2023-05-21", "2023-05-20",
            ]
        );
    }

    #[test]
    fn test_parse_dates_reports_bad_argument() {
        let args = vec!["2023-01-15".to_owned(), "2023-02-30".to_owned()];
        let err = parse_dates(&args).expect_err("expected invalid date argument");
        assert!(err.to_string().contains("2023-02-30"));
    }

    #[test]
    fn test_format_list() {
        let dates = parse_dates(&["2005-01-01".to_owned(), "2005-05-03".to_owned()])
            .expect("failed to parse dates");
        assert_eq!(format_list(&dates), "[2005-01-01, 2005-05-03]");
        assert_eq!(format_list(&[]), "[]");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["rmonth-sort", "--json", "-v", "2005-07-01"])
            .expect("failed to parse CLI");
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.dates, ["2005-07-01"]);
    }
}
