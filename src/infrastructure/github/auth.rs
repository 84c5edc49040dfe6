//! GitHub token discovery

use tracing::warn;

/// Variables checked for a token, in priority order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Token from the process environment
pub fn github_token() -> Option<String> {
    github_token_from(|key| std::env::var(key).ok())
}

/// First non-empty token among `TOKEN_ENV_VARS`.
///
/// Missing credentials are not an error: public repositories work
/// unauthenticated, just with a lower rate limit.
pub fn github_token_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let token = TOKEN_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty());

    if token.is_none() {
        warn!(
            "no GitHub token found, using unauthenticated requests (set {} or {} for private repos and higher rate limits)",
            TOKEN_ENV_VARS[0], TOKEN_ENV_VARS[1]
        );
    }
    token
}
