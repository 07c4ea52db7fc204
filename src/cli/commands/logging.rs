//! Logging flags shared by every subcommand.
//!
//! `-v` is counted, `USERSERVICE_LOG_LEVEL` takes a level name or its index in
//! [`LEVELS`]. Both land in the same `u8`, which [`Options::parse`] turns into
//! the tracing level handed to the subscriber.

use clap::{builder::ValueParser, Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_JSON: &str = "log-json";

/// Level names in verbosity order, index 0 is the default.
pub const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

fn parse_level(level: &str) -> Result<u8, String> {
    let index = match level.parse::<usize>() {
        Ok(index) => index,
        Err(_) => LEVELS
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(level.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = LEVELS.iter().map(|(name, _)| *name).collect();
                format!("invalid log level '{level}', expected one of {}", names.join(", "))
            })?,
    };

    if index >= LEVELS.len() {
        return Err(format!("log level must be between 0 and {}", LEVELS.len() - 1));
    }

    u8::try_from(index).map_err(|e| e.to_string())
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERSERVICE_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(ValueParser::from(parse_level)),
        )
        .arg(
            Arg::new(ARG_LOG_JSON)
                .long("log-json")
                .help("Write logs to stderr as JSON lines")
                .env("USERSERVICE_LOG_JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub level: Level,
    pub json: bool,
}

impl Options {
    /// Repeated `-v` past the last level stays at TRACE.
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let verbosity = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
        let index = usize::from(verbosity).min(LEVELS.len() - 1);

        Self {
            level: LEVELS[index].1,
            json: matches.get_flag(ARG_LOG_JSON),
        }
    }
}
