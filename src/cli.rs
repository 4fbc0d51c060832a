//! Command-line flags and the listing options they produce.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use clap::{ArgAction, Parser};

use crate::error::ListingError;

/// Day/month/year with milliseconds, e.g. `15/01/2024 12:30:45.000`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S%.3f";

#[derive(Parser, Debug)]
#[command(
    name = "filefetch",
    about = "List the current directory as aligned, colour-coded columns",
    disable_help_flag = true,
    after_help = "\
Examples:
  filefetch -l -m -p
  filefetch -ld --humanreadable=false
  filefetch -lm -f '%Y-%m-%d %H:%M'"
)]
pub struct Args {
    /// Use long mode
    #[arg(short, long)]
    pub long: bool,

    /// List directories before files
    #[arg(short = 'd', long = "directoriesfirst")]
    pub directories_first: bool,

    /// Scale sizes by powers of 1024 (Ki, Mi, ...); pass =false for exact byte counts
    #[arg(
        short = 'h',
        long = "humanreadable",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub human_readable: bool,

    /// Spaces added after the widest value of each column
    #[arg(short = 's', long = "sectionmargin", default_value_t = 1, value_name = "N")]
    pub section_margin: usize,

    /// Show the last modified column in long mode
    #[arg(short = 'm', long = "lastmodified")]
    pub last_modified: bool,

    /// Show the permissions column in long mode
    #[arg(short, long)]
    pub permissions: bool,

    /// strftime template for the last modified column
    #[arg(short, long, default_value = DEFAULT_DATE_FORMAT, value_name = "FORMAT")]
    pub format: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    pub fn into_config(self) -> Result<ListingConfig, ListingError> {
        validate_date_format(&self.format)?;
        Ok(ListingConfig {
            long_mode: self.long,
            directories_first: self.directories_first,
            human_readable: self.human_readable,
            show_last_modified: self.last_modified,
            show_permissions: self.permissions,
            date_format: self.format,
            section_margin: self.section_margin,
        })
    }
}

/// Options for one listing. Filled once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub long_mode: bool,
    pub directories_first: bool,
    pub human_readable: bool,
    pub show_last_modified: bool,
    pub show_permissions: bool,
    pub date_format: String,
    pub section_margin: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            long_mode: false,
            directories_first: false,
            human_readable: true,
            show_last_modified: false,
            show_permissions: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            section_margin: 1,
        }
    }
}

/// Reject templates chrono cannot render, and templates whose output contains control
/// characters (`%t`, `%n`, a literal tab): those have no fixed terminal width to pad against.
pub fn validate_date_format(template: &str) -> Result<(), ListingError> {
    let invalid = || ListingError::InvalidDateFormat(template.to_string());

    if StrftimeItems::new(template).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut sample = String::new();
    write!(sample, "{}", Local::now().format(template)).map_err(|_| invalid())?;
    if sample.chars().any(char::is_control) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("filefetch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_config_default() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config, ListingConfig::default());
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["-l", "-d", "-m", "-p", "-s", "3"]).into_config().unwrap();
        assert!(config.long_mode);
        assert!(config.directories_first);
        assert!(config.show_last_modified);
        assert!(config.show_permissions);
        assert!(config.human_readable);
        assert_eq!(config.section_margin, 3);
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&[
            "--long",
            "--directoriesfirst",
            "--lastmodified",
            "--permissions",
            "--sectionmargin",
            "0",
            "--format",
            "%Y",
        ])
        .into_config()
        .unwrap();
        assert!(config.long_mode);
        assert!(config.directories_first);
        assert_eq!(config.section_margin, 0);
        assert_eq!(config.date_format, "%Y");
    }

    #[test]
    fn test_human_readable_can_be_turned_off() {
        assert!(parse(&["-h"]).human_readable);
        assert!(parse(&["--humanreadable"]).human_readable);
        assert!(!parse(&["--humanreadable=false"]).human_readable);
        assert!(!parse(&["-h=false"]).human_readable);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let result = Args::try_parse_from(["filefetch", "-s", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let err = parse(&["-f", "%Y %"]).into_config().unwrap_err();
        assert!(matches!(err, ListingError::InvalidDateFormat(ref t) if t == "%Y %"));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
        assert!(validate_date_format("plain text").is_ok());
        assert!(validate_date_format("%").is_err());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(validate_date_format("%Y%t%m").is_err());
        assert!(validate_date_format("%Y%n%m").is_err());
        assert!(validate_date_format("%Y\t%m").is_err());
        assert!(validate_date_format("%Y %m").is_ok());
    }
}
