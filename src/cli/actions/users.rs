use crate::users::UserClient;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::info;

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}

/// Handle the `users` action
/// # Errors
/// Returns an error if the client cannot be built, the fetch fails, or output cannot be written.
pub async fn list<W: Write>(base_url: &str, out: &mut W) -> Result<()> {
    let client = UserClient::new(base_url)?;

    let users = client.get_users().await?;

    info!("fetched {} users from {}", users.len(), client.base_url());

    write_json(out, &users)
}

/// Handle the `user` action
/// # Errors
/// Returns an error if the client cannot be built, the fetch fails, or output cannot be written.
pub async fn show<W: Write>(base_url: &str, id: i64, out: &mut W) -> Result<()> {
    let client = UserClient::new(base_url)?;

    let user = client.get_user_by_id(id).await?;

    info!("fetched user {} from {}", user.id, client.base_url());

    write_json(out, &user)
}
