use crate::cli::{actions::Action, commands, commands::logging, dispatch, telemetry};
use anyhow::Result;

/// Parse arguments, install the subscriber, and hand back the action to run.
///
/// # Errors
///
/// Returns an error if logging initialization or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(logging::Options::parse(&matches))?;

    dispatch::handler(&matches)
}
