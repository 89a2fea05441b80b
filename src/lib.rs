pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;

pub use config::{Config, RepoId};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use analysis::{StatsOptions, StatsPipeline};
