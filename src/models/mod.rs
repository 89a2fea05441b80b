pub mod commit;
pub mod issue;
pub mod pull_request;
pub mod report;

pub use commit::*;
pub use issue::*;
pub use pull_request::*;
pub use report::*;

use chrono::{DateTime, Utc};

/// Creation and closure timestamps shared by pull requests and issues; the
/// windowed counts and the retirement scan are generic over this.
pub trait Lifecycle {
    fn created_at(&self) -> DateTime<Utc>;
    fn closed_at(&self) -> Option<DateTime<Utc>>;
}
