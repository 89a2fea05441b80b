use chrono::NaiveDate;
use serde::Serialize;
use std::env;
use std::fmt;

/// Owner/name pair identifying one GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// API token, if any. Anonymous runs hit GitHub's unauthenticated limits.
    pub github_token: Option<String>,
}

impl Config {
    /// An explicit CLI token wins over GITHUB_TOKEN from the environment.
    pub fn resolve(cli_token: Option<String>) -> Self {
        let github_token = cli_token.or_else(|| env::var("GITHUB_TOKEN").ok());
        Self { github_token }
    }
}

/// Parse a YYYY-MM-DD argument. Wired into clap as a value parser, so a bad
/// date is rejected before anything touches the network.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{raw}': expected YYYY-MM-DD"))
}
