//! GitHub remote source

mod auth;
mod client;

pub use auth::{github_token, github_token_from, TOKEN_ENV_VARS};
pub use client::GitHubSource;
