use std::collections::HashMap;

use crate::models::{AuthorActivity, CommitRecord};

/// Rank commit authors by display name, keeping at most `limit` entries.
/// Ties keep first-encounter order, so the sort must stay stable. Commits
/// missing any field on the attribution path are skipped.
pub fn rank_active_users(commits: &[CommitRecord], limit: usize) -> Vec<AuthorActivity> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<AuthorActivity> = Vec::new();

    for record in commits {
        let Some(name) = record.author_name() else {
            tracing::debug!("Commit {} has no author attribution, skipping", record.sha);
            continue;
        };
        match index.get(name) {
            Some(&pos) => tallies[pos].commits += 1,
            None => {
                index.insert(name, tallies.len());
                tallies.push(AuthorActivity {
                    name: name.to_string(),
                    commits: 1,
                });
            }
        }
    }

    tallies.sort_by(|a, b| b.commits.cmp(&a.commits));
    tallies.truncate(limit);
    tallies
}
