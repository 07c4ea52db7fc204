use super::{users, Action};
use anyhow::Result;
use std::io::stdout;

pub(super) async fn execute(action: Action) -> Result<()> {
    let mut out = stdout();

    match action {
        Action::ListUsers { base_url } => users::list(&base_url, &mut out).await,
        Action::GetUser { base_url, id } => users::show(&base_url, id, &mut out).await,
    }
}
