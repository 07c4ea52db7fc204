use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as served by `/users` and `/users/{id}`.
///
/// Fields beyond the four required ones (address, phone, company...) are kept
/// in `extra` so a decoded record serializes back to the object received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
