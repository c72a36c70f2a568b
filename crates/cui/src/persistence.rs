use banatro_core::{insert_record, ScoreRecord, MAX_RECORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SCORES_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    records: Vec<ScoreRecord>,
}

/// Where the top-ten table lives: `$BANATRO_SCORES` when set, otherwise
/// `~/.banatro_scores.json`. `None` when neither is available.
pub fn default_scores_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BANATRO_SCORES") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".banatro_scores.json"))
}

/// A missing file is an empty table, not an error. A corrupt or mismatched
/// file is reported so the caller can decide whether to clobber it.
pub fn load_records(path: &Path) -> Result<Vec<ScoreRecord>, String> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let payload: ScoreFile = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    if payload.version != SCORES_SCHEMA_VERSION {
        return Err(format!(
            "unsupported scores version {} (expected {})",
            payload.version, SCORES_SCHEMA_VERSION
        ));
    }
    let mut records = Vec::new();
    for record in payload.records {
        insert_record(&mut records, record);
    }
    Ok(records)
}

pub fn save_records(records: &[ScoreRecord], path: &Path) -> Result<(), String> {
    let payload = ScoreFile {
        version: SCORES_SCHEMA_VERSION,
        records: records[..records.len().min(MAX_RECORDS)].to_vec(),
    };
    let body = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
    fs::write(path, body).map_err(|err| err.to_string())
}
