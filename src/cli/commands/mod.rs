pub mod logging;

use crate::users::BASE_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_ID: &str = "id";

pub const CMD_USERS: &str = "users";
pub const CMD_USER: &str = "user";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("userservice")
        .about("Client for the jsonplaceholder users API")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_BASE_URL)
                .long("base-url")
                .help("API base URL")
                .default_value(BASE_URL)
                .env("USERSERVICE_BASE_URL")
                .global(true),
        )
        .subcommand(Command::new(CMD_USERS).about("List all users"))
        .subcommand(
            Command::new(CMD_USER).about("Fetch a user by id").arg(
                Arg::new(ARG_ID)
                    .help("User id, sent as-is")
                    .required(true)
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            ),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userservice");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Client for the jsonplaceholder users API"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_default_base_url() {
        temp_env::with_vars([("USERSERVICE_BASE_URL", None::<&str>)], || {
            let matches = new().get_matches_from(vec!["userservice", "users"]);
            assert_eq!(
                matches.get_one::<String>(ARG_BASE_URL).map(String::as_str),
                Some(BASE_URL)
            );
            assert_eq!(matches.subcommand_name(), Some(CMD_USERS));
        });
    }

    #[test]
    fn test_check_base_url_and_id() {
        temp_env::with_vars([("USERSERVICE_BASE_URL", None::<&str>)], || {
            let matches = new().get_matches_from(vec![
                "userservice",
                "--base-url",
                "http://localhost:3000",
                "user",
                "42",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_BASE_URL).map(String::as_str),
                Some("http://localhost:3000")
            );

            let (name, sub_m) = matches.subcommand().unwrap();
            assert_eq!(name, CMD_USER);
            assert_eq!(sub_m.get_one::<i64>(ARG_ID).copied(), Some(42));
        });
    }

    #[test]
    fn test_negative_id() {
        let matches = new().get_matches_from(vec!["userservice", "user", "-1"]);

        let (_, sub_m) = matches.subcommand().unwrap();
        assert_eq!(sub_m.get_one::<i64>(ARG_ID).copied(), Some(-1));
    }

    #[test]
    fn test_invalid_id() {
        let result = new().try_get_matches_from(vec!["userservice", "user", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["userservice"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERSERVICE_BASE_URL", Some("http://localhost:3000")),
                ("USERSERVICE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userservice", "users"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_BASE_URL).map(String::as_str),
                    Some("http://localhost:3000")
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERSERVICE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userservice", "users"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("USERSERVICE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userservice".to_string(), "users".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
