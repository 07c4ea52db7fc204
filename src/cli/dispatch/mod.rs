//! Map parsed command-line arguments to an [`Action`].

use crate::cli::actions::Action;
use crate::cli::commands::{ARG_BASE_URL, ARG_ID, CMD_USER, CMD_USERS};
use anyhow::{anyhow, Context, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let base_url = matches
        .get_one::<String>(ARG_BASE_URL)
        .cloned()
        .context("missing required argument: --base-url")?;

    match matches.subcommand() {
        Some((CMD_USERS, _)) => Ok(Action::ListUsers { base_url }),
        Some((CMD_USER, sub_m)) => {
            let id = sub_m
                .get_one::<i64>(ARG_ID)
                .copied()
                .context("missing required argument: <id>")?;

            Ok(Action::GetUser { base_url, id })
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
