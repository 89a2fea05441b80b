use chrono::NaiveDate;
use serde::Serialize;

use crate::config::RepoId;
use crate::error::{Error, Result};

/// Inclusive [since, until] window of UTC calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DateWindow {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self> {
        if since > until {
            return Err(Error::Config(format!(
                "window start {since} is after window end {until}"
            )));
        }
        Ok(Self { since, until })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since <= date && date <= self.until
    }
}

/// One ranked commit author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorActivity {
    pub name: String,
    pub commits: u64,
}

/// Opened/closed tallies inside the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityCounts {
    pub opened: usize,
    pub closed: usize,
}

/// Window tallies plus the retirement count for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifecycleSummary {
    pub opened: usize,
    pub closed: usize,
    pub retired: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoReport {
    pub repo: RepoId,
    pub window: DateWindow,
    pub active_users: Vec<AuthorActivity>,
    pub pull_requests: LifecycleSummary,
    pub issues: LifecycleSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2024, 1, 31)));
        assert!(!window.contains(date(2023, 12, 31)));
        assert!(!window.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_single_day_window_is_valid() {
        let window = DateWindow::new(date(2024, 1, 5), date(2024, 1, 5)).unwrap();
        assert!(window.contains(date(2024, 1, 5)));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let err = DateWindow::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("after window end"));
    }
}
