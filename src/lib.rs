//! # userservice
//!
//! Client for the users resource of the public jsonplaceholder REST API.
//!
//! [`users::UserClient`] exposes two read operations, listing every user and
//! fetching one user by id. Each call is a single GET whose JSON body is
//! decoded into [`users::User`] records. Any failure (transport, non-2xx
//! status, malformed body) collapses into one fixed message per operation.
//!
//! The `userservice` binary wraps both operations behind a small CLI, see
//! [`cli`].

pub mod cli;
pub mod users;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
