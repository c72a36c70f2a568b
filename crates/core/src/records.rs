use serde::{Deserialize, Serialize};

pub const MAX_RECORDS: usize = 10;

/// One finished run: the round score at the moment of loss and the round
/// reached. The adapter persists the list; this module only orders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: i64,
    pub round: u32,
}

/// Insert keeping the list sorted by score descending, then round
/// descending, truncated to the top ten.
pub fn insert_record(records: &mut Vec<ScoreRecord>, record: ScoreRecord) {
    records.push(record);
    records.sort_by(|a, b| b.score.cmp(&a.score).then(b.round.cmp(&a.round)));
    records.truncate(MAX_RECORDS);
}
