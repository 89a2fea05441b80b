use chrono::NaiveDate;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::RepoId;
use crate::error::{Error, Result};
use crate::github::paginator::{collect_pages, PagedEndpoint};
use crate::models::{CommitRecord, Issue, PullRequest};

// Results per page. Pull and issue payloads are heavy; higher values risk
// oversized responses.
const COMMITS_PER_PAGE: u32 = 100;
const PULLS_PER_PAGE: u32 = 30;
const ISSUES_PER_PAGE: u32 = 50;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// State filter for pull-request and issue listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StateFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StateFilter::All => "all",
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
        }
    }
}

/// Per-call options for the commits endpoint.
#[derive(Debug, Clone, Default)]
pub struct CommitQuery {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    /// Branch name or SHA; GitHub's `sha` parameter.
    pub branch: Option<String>,
}

impl CommitQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(since) = self.since {
            pairs.push(("since", since.format(DATE_FORMAT).to_string()));
        }
        if let Some(until) = self.until {
            pairs.push(("until", until.format(DATE_FORMAT).to_string()));
        }
        if let Some(branch) = &self.branch {
            pairs.push(("sha", branch.clone()));
        }
        pairs
    }
}

/// Per-call options for the pulls endpoint.
#[derive(Debug, Clone, Default)]
pub struct PullQuery {
    pub state: StateFilter,
    /// Restrict to pull requests targeting this base branch.
    pub base: Option<String>,
}

impl PullQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("state", self.state.as_str().to_string())];
        if let Some(base) = &self.base {
            pairs.push(("base", base.clone()));
        }
        pairs
    }
}

/// Per-call options for the issues endpoint.
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    pub state: StateFilter,
    /// Only issues updated at or after this date.
    pub since: Option<NaiveDate>,
}

impl IssueQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("state", self.state.as_str().to_string())];
        if let Some(since) = self.since {
            pairs.push(("since", since.format(DATE_FORMAT).to_string()));
        }
        pairs
    }
}

/// Authenticated GitHub REST client for the three repository listings.
/// Headers are fixed at construction; the repository and all query options
/// are explicit per call.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("repostats/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    /// Point the client at a different API root; tests use this.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn list_commits(
        &self,
        repo: &RepoId,
        query: &CommitQuery,
        max_pages: Option<u32>,
    ) -> Result<Vec<CommitRecord>> {
        let url = format!("{}/repos/{}/commits", self.base_url, repo);
        tracing::info!("Fetching commits for: {}", repo);
        let endpoint = PagedEndpoint::new(&self.client, url, query.to_pairs(), COMMITS_PER_PAGE);
        collect_pages(&endpoint, max_pages).await
    }

    pub async fn list_pulls(
        &self,
        repo: &RepoId,
        query: &PullQuery,
        max_pages: Option<u32>,
    ) -> Result<Vec<PullRequest>> {
        let url = format!("{}/repos/{}/pulls", self.base_url, repo);
        tracing::info!("Fetching pull requests for: {}", repo);
        let endpoint = PagedEndpoint::new(&self.client, url, query.to_pairs(), PULLS_PER_PAGE);
        collect_pages(&endpoint, max_pages).await
    }

    pub async fn list_issues(
        &self,
        repo: &RepoId,
        query: &IssueQuery,
        max_pages: Option<u32>,
    ) -> Result<Vec<Issue>> {
        let url = format!("{}/repos/{}/issues", self.base_url, repo);
        tracing::info!("Fetching issues for: {}", repo);
        let endpoint = PagedEndpoint::new(&self.client, url, query.to_pairs(), ISSUES_PER_PAGE);
        collect_pages(&endpoint, max_pages).await
    }
}

/// GitHub's error envelope.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Decode a list response, mapping non-success statuses onto the error set.
pub(crate) async fn decode_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(classify_failure(status, &body))
    }
}

/// The 401/403 message matching follows the bodies GitHub actually sends
/// for each case; anything unrecognized lands in `Error::Api`.
fn classify_failure(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let lowered = message.to_lowercase();

    match status.as_u16() {
        401 if message == "Bad credentials" || message == "Unauthorized" => {
            Error::BadCredentials(message)
        }
        403 if message.starts_with("Missing or invalid User Agent string") => {
            Error::BadUserAgent(message)
        }
        403 if lowered.starts_with("api rate limit exceeded")
            || lowered.ends_with("please wait a few minutes before you try again.") =>
        {
            Error::RateLimitExceeded(message)
        }
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_bad_credentials() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Bad credentials"}"#,
        );
        assert!(matches!(err, Error::BadCredentials(_)));

        let err = classify_failure(StatusCode::UNAUTHORIZED, r#"{"message": "Unauthorized"}"#);
        assert!(matches!(err, Error::BadCredentials(_)));
    }

    #[test]
    fn test_unexpected_401_message_is_unrecognized() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Requires authentication"}"#,
        );
        assert!(matches!(err, Error::Api { status: 401, .. }));
    }

    #[test]
    fn test_classify_bad_user_agent() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            r#"{"message": "Missing or invalid User Agent string"}"#,
        );
        assert!(matches!(err, Error::BadUserAgent(_)));
    }

    #[test]
    fn test_classify_rate_limit_messages() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            r#"{"message": "API rate limit exceeded for 203.0.113.7."}"#,
        );
        assert!(matches!(err, Error::RateLimitExceeded(_)));

        let err = classify_failure(
            StatusCode::FORBIDDEN,
            r#"{"message": "You have exceeded a secondary rate limit. Please wait a few minutes before you try again."}"#,
        );
        assert!(matches!(err, Error::RateLimitExceeded(_)));
    }

    #[test]
    fn test_other_403_messages_are_unrecognized() {
        let err = classify_failure(
            StatusCode::FORBIDDEN,
            r#"{"message": "Resource not accessible by integration"}"#,
        );
        assert!(matches!(err, Error::Api { status: 403, .. }));
    }

    #[test]
    fn test_non_json_body_falls_back_to_raw_text() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "upstream exploded\n");
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_query_pairs() {
        let query = CommitQuery {
            since: Some(date(2024, 1, 1)),
            until: Some(date(2024, 1, 31)),
            branch: Some("main".into()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("since", "2024-01-01".to_string()),
                ("until", "2024-01-31".to_string()),
                ("sha", "main".to_string()),
            ]
        );

        assert!(CommitQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_pull_query_pairs() {
        let query = PullQuery {
            state: StateFilter::All,
            base: Some("develop".into()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("state", "all".to_string()),
                ("base", "develop".to_string()),
            ]
        );
        assert_eq!(
            PullQuery::default().to_pairs(),
            vec![("state", "all".to_string())]
        );
    }

    #[test]
    fn test_issue_query_pairs() {
        let query = IssueQuery {
            state: StateFilter::Open,
            since: Some(date(2024, 6, 1)),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("state", "open".to_string()),
                ("since", "2024-06-01".to_string()),
            ]
        );
    }
}
