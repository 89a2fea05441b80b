pub mod activity;
pub mod lifecycle;
pub mod pipeline;

pub use activity::rank_active_users;
pub use lifecycle::{count_opened_closed, count_retired, summarize};
pub use pipeline::{StatsOptions, StatsPipeline};
