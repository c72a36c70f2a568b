use crate::{Card, Suit};
use serde::{Deserialize, Serialize};

/// Presentation ordering for the held hand. Re-sorting never affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    Rank,
    Suit,
}

/// Cards currently held by the player, bounded by `max_size`.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub max_size: usize,
}

impl Hand {
    pub fn with_size(max_size: usize) -> Self {
        Self {
            cards: Vec::new(),
            max_size,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn space(&self) -> usize {
        self.max_size.saturating_sub(self.cards.len())
    }

    /// Append only as many cards as fit under `max_size` and report how many
    /// were accepted. Callers should size their draw to `space()` up front.
    pub fn add(&mut self, mut cards: Vec<Card>) -> usize {
        let space = self.space();
        cards.truncate(space);
        let accepted = cards.len();
        self.cards.append(&mut cards);
        accepted
    }

    /// Remove the cards at `indices` (pre-validated: in bounds, no duplicates),
    /// returning them in their original relative order. The rest compact down
    /// without reordering.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<Card> {
        let mut take = vec![false; self.cards.len()];
        for &idx in indices {
            take[idx] = true;
        }
        let mut removed = Vec::with_capacity(indices.len());
        let mut kept = Vec::with_capacity(self.cards.len() - indices.len());
        for (idx, card) in self.cards.drain(..).enumerate() {
            if take[idx] {
                removed.push(card);
            } else {
                kept.push(card);
            }
        }
        self.cards = kept;
        removed
    }

    pub fn clear(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn sort(&mut self, by: SortBy) {
        match by {
            SortBy::Rank => self
                .cards
                .sort_by(|a, b| b.ordinal().cmp(&a.ordinal())),
            SortBy::Suit => self
                .cards
                .sort_by_key(|card| (suit_order(card.suit), std::cmp::Reverse(card.ordinal()))),
        }
    }
}

fn suit_order(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    }
}
