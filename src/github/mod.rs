pub mod client;
pub mod paginator;

pub use client::{CommitQuery, GitHubClient, IssueQuery, PullQuery, StateFilter};
pub use paginator::{collect_pages, PageFetch, PagedEndpoint};
