//! Per-class ranking with RANK semantics.
//!
//! Within a class, scores are ordered by reward descending and each row gets
//! rank = 1 + (number of strictly greater scores in the class). Tied rows
//! share a rank and the next distinct score skips ahead. Ties keep the order
//! the entries arrive in (insertion order when fed from the store).

use crate::{
    model::{RankingEntry, RankingRow},
    types::ClassId,
};
use std::collections::BTreeMap;

/// Rank every entry within its class. Output is ordered by (class_id, rank).
pub fn compute_rankings(entries: Vec<RankingEntry>) -> Vec<RankingRow> {
    let mut by_class: BTreeMap<ClassId, Vec<RankingEntry>> = BTreeMap::new();
    for entry in entries {
        by_class.entry(entry.class_id).or_default().push(entry);
    }

    let mut out = Vec::new();
    for (class_id, mut partition) in by_class {
        // Stable: equal scores stay in arrival order.
        partition.sort_by(|a, b| b.reward_score.cmp(&a.reward_score));

        let mut rank = 0u64;
        let mut previous: Option<i64> = None;
        for (position, entry) in partition.into_iter().enumerate() {
            if previous != Some(entry.reward_score) {
                rank = position as u64 + 1;
                previous = Some(entry.reward_score);
            }
            out.push(RankingRow {
                username: entry.username,
                class_id,
                reward_score: entry.reward_score,
                rank,
            });
        }
    }
    out
}

/// Keep the first `limit` rows of each class from an already ranked list.
pub fn top_per_class(rows: &[RankingRow], limit: usize) -> Vec<RankingRow> {
    let mut taken: BTreeMap<ClassId, usize> = BTreeMap::new();
    rows.iter()
        .filter(|row| {
            let n = taken.entry(row.class_id).or_insert(0);
            *n += 1;
            *n <= limit
        })
        .cloned()
        .collect()
}
