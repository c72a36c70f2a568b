use crate::{Card, Rank, RngState, Suit};
use std::collections::VecDeque;

/// Draw pile (FIFO queue, front = next card) plus a discard stack.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: VecDeque<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// Every (suit, rank) pair exactly once, in canonical order, empty discard.
    pub fn standard52() -> Self {
        let mut draw = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push_back(Card::new(suit, rank));
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    /// Uniformly permute the draw pile. The discard is never touched.
    pub fn shuffle(&mut self, rng: &mut RngState) {
        let mut cards: Vec<Card> = self.draw.drain(..).collect();
        rng.shuffle(&mut cards);
        self.draw.extend(cards);
    }

    /// Pop up to `count` cards from the front. A short draw is not an error;
    /// callers must handle receiving fewer cards than asked for.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw.pop_front() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    pub fn toss(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    /// Move the discard back into the draw pile and reshuffle. Only called at
    /// round boundaries; cards are never recycled mid-round.
    pub fn recycle(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.extend(self.discard.drain(..));
        self.shuffle(rng);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    pub fn discarded(&self) -> usize {
        self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard52_has_every_card_once() {
        let mut deck = Deck::standard52();
        let cards = deck.draw_cards(52);
        assert_eq!(cards.len(), 52);
        assert_eq!(deck.remaining(), 0);
        let unique: HashSet<Card> = cards.into_iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn draw_is_fifo_and_short_draws_are_allowed() {
        let mut deck = Deck::standard52();
        let front: Vec<Card> = deck.draw.iter().copied().take(3).collect();
        assert_eq!(deck.draw_cards(3), front);
        let rest = deck.draw_cards(100);
        assert_eq!(rest.len(), 49);
        assert!(deck.draw_cards(1).is_empty());
    }

    #[test]
    fn shuffle_leaves_discard_alone() {
        let mut rng = RngState::from_seed(7);
        let mut deck = Deck::standard52();
        let tossed = deck.draw_cards(5);
        deck.toss(tossed.clone());
        deck.shuffle(&mut rng);
        assert_eq!(deck.discard, tossed);
        assert_eq!(deck.remaining(), 47);
    }

    #[test]
    fn recycle_returns_discard_to_the_draw_pile() {
        let mut rng = RngState::from_seed(7);
        let mut deck = Deck::standard52();
        let tossed = deck.draw_cards(10);
        deck.toss(tossed);
        deck.recycle(&mut rng);
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.discarded(), 0);
    }

    #[test]
    fn recycle_with_empty_discard_is_a_noop() {
        let mut rng = RngState::from_seed(7);
        let mut deck = Deck::standard52();
        let before: Vec<Card> = deck.draw.iter().copied().collect();
        deck.recycle(&mut rng);
        let after: Vec<Card> = deck.draw.iter().copied().collect();
        assert_eq!(before, after);
    }
}
