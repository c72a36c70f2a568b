use crate::{evaluate_hand, Card, HandKind, JokerKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total(&self) -> i64 {
        (self.chips as f64 * self.mult).floor() as i64
    }
}

/// Mutable accumulator threaded through the joker chain.
#[derive(Debug)]
pub struct ScoreContext<'a> {
    pub score: Score,
    pub kind: HandKind,
    pub cards: &'a [Card],
    pub bonus_coins: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub kind: HandKind,
    pub base: Score,
    pub card_chips: i64,
    pub points: i64,
    pub coins: i64,
}

/// Score a played selection against the owned joker chain. Pure: identical
/// inputs always produce identical output, with no hidden state.
pub fn score_play(cards: &[Card], jokers: &[JokerKind]) -> ScoreBreakdown {
    let kind = evaluate_hand(cards);
    let (base_chips, base_mult) = kind.base();
    let base = Score {
        chips: base_chips,
        mult: base_mult,
    };
    let card_chips: i64 = cards.iter().map(|card| card.chip_value()).sum();

    let mut ctx = ScoreContext {
        score: Score {
            chips: base.chips + card_chips,
            mult: base.mult,
        },
        kind,
        cards,
        bonus_coins: 0,
    };
    for joker in jokers {
        joker.apply(&mut ctx);
    }

    let points = ctx.score.total();
    let coins = (points / 10).max(1) + ctx.bonus_coins;
    ScoreBreakdown {
        kind,
        base,
        card_chips,
        points,
        coins,
    }
}
