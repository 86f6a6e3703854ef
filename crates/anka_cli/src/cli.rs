use std::path::PathBuf;

use anka_base::{BirthDate, NaiveDate};
use clap::{Args, Parser, Subcommand};

/// Numerology derivation engine.
#[derive(Parser)]
#[command(name = "anka", version, about = "Numerology derivation engine")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Reduce an integer and show the chain of sums
    Reduce {
        /// Non-negative integer
        n: u32,
        /// Use the 1..=22 matrix reduction
        #[arg(long, conflicts_with = "preserve")]
        matrix: bool,
        /// Keep master numbers 11, 22 and 33
        #[arg(long)]
        preserve: bool,
    },
    /// Full numerology profile for a person
    Profile {
        #[command(flatten)]
        person: PersonArgs,
        #[command(flatten)]
        today: TodayArgs,
    },
    /// Life Path number with its reduction chain
    LifePath {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: BirthDate,
    },
    /// Karmic lessons and karmic debts
    Karmic {
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Personal year, month and day
    Personal {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: BirthDate,
        #[command(flatten)]
        today: TodayArgs,
    },
    /// Life Path compatibility between two dates
    Compat {
        /// First birth date (YYYY-MM-DD)
        #[arg(long)]
        date_a: BirthDate,
        /// Second birth date (YYYY-MM-DD)
        #[arg(long)]
        date_b: BirthDate,
        /// romantic, friendship, business or family (default from config)
        #[arg(long)]
        relationship: Option<String>,
    },
    /// Destiny matrix
    Matrix {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: BirthDate,
    },
    /// Symbolic tree: sephiroth, significant paths and pillars
    Tree {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: BirthDate,
        /// Number of significant paths (default from config)
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Birth date and full name.
#[derive(Args)]
pub struct PersonArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: BirthDate,
    /// Full name
    #[arg(long)]
    pub name: String,
}

/// Reference date for personal cycles.
#[derive(Args)]
pub struct TodayArgs {
    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl TodayArgs {
    pub fn resolve(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_profile() {
        let cli = Cli::try_parse_from([
            "anka",
            "-vv",
            "profile",
            "--date",
            "1990-03-15",
            "--name",
            "Ada Lovelace",
            "--today",
            "2024-10-18",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Profile { person, today } = cli.command else {
            panic!("expected profile");
        };
        assert_eq!(person.date.canonical(), "1990-03-15");
        assert_eq!(today.resolve(), NaiveDate::from_ymd_opt(2024, 10, 18).unwrap());
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["anka", "life-path", "--date", "1990-02-30"]).is_err());
        assert!(Cli::try_parse_from(["anka", "matrix", "--date", "15.03.1990"]).is_err());
    }

    #[test]
    fn reduce_flags_conflict() {
        assert!(Cli::try_parse_from(["anka", "reduce", "28", "--matrix", "--preserve"]).is_err());
    }
}
