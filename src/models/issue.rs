use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;

/// One element of `GET /repos/{owner}/{repo}/issues`. The endpoint also
/// returns pull requests; they count as issues here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Lifecycle for Issue {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}
