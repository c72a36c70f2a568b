use serde::{Deserialize, Serialize};

pub const BASE_HANDS: u8 = 5;
pub const BASE_REDRAWS: u8 = 5;

/// Score goals for rounds 1..=24, grouped in antes of three
/// (small, big, boss).
pub const BLIND_GOALS: [i64; 24] = [
    300, 600, 900, // ante 1
    500, 1000, 1500, // ante 2
    800, 1600, 2400, // ante 3
    1100, 2200, 3300, // ante 4
    1500, 3000, 4500, // ante 5
    2000, 4000, 6000, // ante 6
    2500, 5000, 7500, // ante 7
    3000, 6000, 9000, // ante 8
];

/// Goal for a 1-based round number. Beyond the table the last goal grows by
/// 1.5x per round, floored to an integer.
pub fn blind_goal(round_no: u32) -> i64 {
    let table_len = BLIND_GOALS.len() as u32;
    if round_no == 0 {
        return BLIND_GOALS[0];
    }
    if round_no <= table_len {
        return BLIND_GOALS[(round_no - 1) as usize];
    }
    let last = BLIND_GOALS[BLIND_GOALS.len() - 1] as f64;
    (last * 1.5f64.powi((round_no - table_len) as i32)).floor() as i64
}

/// Per-round counters, reset at the start of every round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRules {
    pub score_goal: i64,
    pub hands_remaining: u8,
    pub redraws_remaining: u8,
}

impl RoundRules {
    pub fn for_round(round_no: u32, redraw_bonus: u8) -> Self {
        Self {
            score_goal: blind_goal(round_no),
            hands_remaining: BASE_HANDS,
            redraws_remaining: BASE_REDRAWS.saturating_add(redraw_bonus),
        }
    }
}
