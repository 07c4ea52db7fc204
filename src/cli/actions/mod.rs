pub mod users;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    ListUsers { base_url: String },
    GetUser { base_url: String, id: i64 },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
