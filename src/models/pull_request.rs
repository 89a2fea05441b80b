use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;

/// One element of `GET /repos/{owner}/{repo}/pulls`. A timestamp that fails
/// to parse is a decode error, never a zero value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Lifecycle for PullRequest {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}
