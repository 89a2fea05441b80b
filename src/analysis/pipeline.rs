use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::activity::rank_active_users;
use crate::analysis::lifecycle::summarize;
use crate::config::RepoId;
use crate::error::Result;
use crate::github::{CommitQuery, GitHubClient, PullQuery};
use crate::models::{DateWindow, RepoReport};

/// Everything a single report run needs besides the client.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    pub repo: RepoId,
    pub window: DateWindow,
    /// Branch for the commit listing and base branch for pull requests.
    pub branch: Option<String>,
    /// How many ranked authors to keep.
    pub top: usize,
    pub pr_retirement_days: i64,
    pub issue_retirement_days: i64,
    /// Cap on pages fetched per endpoint.
    pub max_pages: Option<u32>,
}

pub struct StatsPipeline {
    github: GitHubClient,
    options: StatsOptions,
}

impl StatsPipeline {
    pub fn new(github: GitHubClient, options: StatsOptions) -> Self {
        Self { github, options }
    }

    /// Fetch the three listings one after another and aggregate them into
    /// a report. API failures mid-listing leave that listing truncated;
    /// transport and decode failures abort the run.
    pub async fn collect(&self) -> Result<RepoReport> {
        let repo = &self.options.repo;
        let window = self.options.window;

        // Step 1: Fetch commits for the activity ranking
        let spinner = phase_spinner(format!("Fetching commits for {}", repo));
        let commit_query = CommitQuery {
            since: Some(window.since),
            until: Some(window.until),
            branch: self.options.branch.clone(),
        };
        let commits = self
            .github
            .list_commits(repo, &commit_query, self.options.max_pages)
            .await?;
        spinner.finish_with_message(format!("Fetched {} commits", commits.len()));
        tracing::info!("Fetched {} commits", commits.len());

        // Step 2: Fetch pull requests, all states
        let spinner = phase_spinner(format!("Fetching pull requests for {}", repo));
        let pull_query = PullQuery {
            base: self.options.branch.clone(),
            ..PullQuery::default()
        };
        let pulls = self
            .github
            .list_pulls(repo, &pull_query, self.options.max_pages)
            .await?;
        spinner.finish_with_message(format!("Fetched {} pull requests", pulls.len()));
        tracing::info!("Fetched {} pull requests", pulls.len());

        // Step 3: Fetch issues, all states; the endpoint mixes pull
        // requests in and they count as issues here
        let spinner = phase_spinner(format!("Fetching issues for {}", repo));
        let issues = self
            .github
            .list_issues(repo, &Default::default(), self.options.max_pages)
            .await?;
        spinner.finish_with_message(format!("Fetched {} issues", issues.len()));
        tracing::info!("Fetched {} issues", issues.len());

        // Step 4: Aggregate
        let report = RepoReport {
            repo: repo.clone(),
            window,
            active_users: rank_active_users(&commits, self.options.top),
            pull_requests: summarize(&pulls, window, self.options.pr_retirement_days),
            issues: summarize(&issues, window, self.options.issue_retirement_days),
        };

        Ok(report)
    }
}

fn phase_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
