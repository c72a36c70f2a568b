use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }

    /// (base chips, base mult) for a play of this category.
    pub fn base(self) -> (i64, f64) {
        match self {
            HandKind::HighCard => (5, 1.0),
            HandKind::Pair => (10, 2.0),
            HandKind::TwoPair => (20, 2.0),
            HandKind::Trips => (30, 3.0),
            HandKind::Straight => (30, 4.0),
            HandKind::Flush => (35, 4.0),
            HandKind::FullHouse => (40, 4.0),
            HandKind::Quads => (60, 7.0),
            HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8.0),
        }
    }
}

/// Classify a played selection of 1 to 5 cards (caller-enforced bounds).
/// Order-independent in the input. Straight, Flush, and Full House require
/// all five cards; smaller selections fall through to the best rank-count
/// grouping under a fixed Quads > Trips > TwoPair > Pair precedence.
pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    debug_assert!(!cards.is_empty() && cards.len() <= 5);
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_by(|a, b| b.cmp(a));

    if cards.len() == 5 {
        let is_flush = cards.iter().all(|card| card.suit == cards[0].suit);
        let is_straight = is_straight(cards);
        if is_flush && is_straight {
            return if is_royal(cards) {
                HandKind::RoyalFlush
            } else {
                HandKind::StraightFlush
            };
        }
        if counts[0] == 4 {
            return HandKind::Quads;
        }
        if counts == [3, 2] {
            return HandKind::FullHouse;
        }
        if is_flush {
            return HandKind::Flush;
        }
        if is_straight {
            return HandKind::Straight;
        }
    }

    match counts.as_slice() {
        [4, ..] => HandKind::Quads,
        [3, ..] => HandKind::Trips,
        [2, 2, ..] => HandKind::TwoPair,
        [2, ..] => HandKind::Pair,
        _ => HandKind::HighCard,
    }
}

fn is_straight(cards: &[Card]) -> bool {
    has_run(cards.iter().map(|card| card.ordinal()))
        || has_run(cards.iter().map(|card| card.low_ordinal()))
}

/// Five consecutive integers among the de-duplicated values.
fn has_run(values: impl Iterator<Item = u8>) -> bool {
    let mut values: Vec<u8> = values.collect();
    values.sort_unstable();
    values.dedup();
    if values.len() < 5 {
        return false;
    }
    values.windows(5).any(|window| window[4] - window[0] == 4)
}

fn is_royal(cards: &[Card]) -> bool {
    let mut values: Vec<u8> = cards.iter().map(|card| card.ordinal()).collect();
    values.sort_unstable();
    values == [10, 11, 12, 13, 14]
}
