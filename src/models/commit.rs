use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

/// GitHub can null out the whole signature or individual fields, so
/// everything on the attribution path is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl CommitRecord {
    pub fn author_name(&self) -> Option<&str> {
        self.commit.author.as_ref()?.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_commit() {
        let json = r#"{
            "sha": "4e2b1dca",
            "commit": {
                "message": "tighten parser",
                "author": {
                    "name": "Alice",
                    "email": "alice@example.com",
                    "date": "2024-01-02T10:30:00Z"
                }
            },
            "author": {"login": "alice"}
        }"#;

        let record: CommitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sha, "4e2b1dca");
        assert_eq!(record.author_name(), Some("Alice"));
    }

    #[test]
    fn test_author_name_none_when_attribution_broken() {
        let no_author: CommitRecord =
            serde_json::from_str(r#"{"sha": "aa", "commit": {"author": null}}"#).unwrap();
        assert_eq!(no_author.author_name(), None);

        let no_name: CommitRecord =
            serde_json::from_str(r#"{"sha": "bb", "commit": {"author": {"email": "x@y"}}}"#)
                .unwrap();
        assert_eq!(no_name.author_name(), None);
    }
}
