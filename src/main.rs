use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use repostats::config::parse_date;
use repostats::models::{DateWindow, RepoReport};
use repostats::{Config, GitHubClient, RepoId, StatsOptions, StatsPipeline};

#[derive(Parser, Debug)]
#[command(name = "repostats")]
#[command(version = "0.1.0")]
#[command(about = "Report commit, pull request and issue activity for a GitHub repository")]
struct Args {
    /// Repository owner (user or organization)
    #[arg(short, long)]
    owner: String,

    /// Repository name
    #[arg(short, long)]
    repo: String,

    /// Start of the reporting window, YYYY-MM-DD (inclusive)
    #[arg(long, value_parser = parse_date)]
    since: NaiveDate,

    /// End of the reporting window, YYYY-MM-DD (inclusive)
    #[arg(long, value_parser = parse_date)]
    until: NaiveDate,

    /// Branch for the commit listing and base branch for pull requests
    #[arg(short, long)]
    branch: Option<String>,

    /// API token; falls back to GITHUB_TOKEN from the environment
    #[arg(long)]
    token: Option<String>,

    /// How many ranked committers to display
    #[arg(long, default_value = "30")]
    top: usize,

    /// Days an open pull request may age before counting as retired
    #[arg(long, default_value = "30")]
    pr_retirement_days: i64,

    /// Days an open issue may age before counting as retired
    #[arg(long, default_value = "14")]
    issue_retirement_days: i64,

    /// Stop after this many pages per endpoint
    #[arg(long)]
    max_pages: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("repostats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    let window = DateWindow::new(args.since, args.until)?;
    let repo = RepoId::new(args.owner, args.repo);

    let config = Config::resolve(args.token);
    if config.github_token.is_none() {
        tracing::warn!("No API token configured, unauthenticated rate limits apply");
    }

    let github = GitHubClient::new(config.github_token.as_deref())?;

    let options = StatsOptions {
        repo: repo.clone(),
        window,
        branch: args.branch,
        top: args.top,
        pr_retirement_days: args.pr_retirement_days,
        issue_retirement_days: args.issue_retirement_days,
        max_pages: args.max_pages,
    };

    tracing::info!("Starting activity report for: {}", repo);
    let pipeline = StatsPipeline::new(github, options);
    let report = pipeline.collect().await?;

    println!("{}", format_report(&report));

    Ok(())
}

fn format_report(report: &RepoReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Repository activity: {} ({} to {}) ===\n\n",
        report.repo, report.window.since, report.window.until
    ));

    output.push_str("Table of active users, based on number of commits\n");
    output.push_str(&format!("{:<20}|Number Of Commits:\n", "Username:"));
    for author in &report.active_users {
        output.push_str(&format!("{:<20}|{}\n", author.name, author.commits));
    }
    output.push('\n');

    output.push_str(&format!(
        "Number of opened pull requests: {}\n",
        report.pull_requests.opened
    ));
    output.push_str(&format!(
        "Number of closed pull requests: {}\n\n",
        report.pull_requests.closed
    ));
    output.push_str(&format!(
        "Number of retired pull requests: {}\n\n",
        report.pull_requests.retired
    ));

    output.push_str(&format!(
        "Number of opened issues: {}\n",
        report.issues.opened
    ));
    output.push_str(&format!(
        "Number of closed issues: {}\n\n",
        report.issues.closed
    ));
    output.push_str(&format!(
        "Number of retired issues: {}\n",
        report.issues.retired
    ));

    output
}
