use crate::{Deck, Hand, JokerKind, BASE_REDRAWS};
use serde::{Deserialize, Serialize};

pub const BASE_HAND_SIZE: usize = 8;
pub const BASE_JOKER_SLOTS: usize = 5;

/// Run-scoped permanent bonuses. Monotone within a run, zeroed on a new run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upgrades {
    pub hand_size_bonus: u8,
    pub redraw_bonus: u8,
    pub joker_slot_bonus: u8,
}

#[derive(Debug)]
pub struct Player {
    pub deck: Deck,
    pub hand: Hand,
    pub jokers: Vec<JokerKind>,
    pub upgrades: Upgrades,
    pub score: i64,
    pub coins: i64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            deck: Deck::standard52(),
            hand: Hand::with_size(BASE_HAND_SIZE),
            jokers: Vec::new(),
            upgrades: Upgrades::default(),
            score: 0,
            coins: 0,
        }
    }

    pub fn effective_hand_size(&self) -> usize {
        BASE_HAND_SIZE + self.upgrades.hand_size_bonus as usize
    }

    pub fn effective_redraws(&self) -> u8 {
        BASE_REDRAWS.saturating_add(self.upgrades.redraw_bonus)
    }

    pub fn effective_joker_slots(&self) -> usize {
        BASE_JOKER_SLOTS + self.upgrades.joker_slot_bonus as usize
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_capacities_track_upgrades() {
        let mut player = Player::new();
        assert_eq!(player.effective_hand_size(), 8);
        assert_eq!(player.effective_redraws(), 5);
        assert_eq!(player.effective_joker_slots(), 5);

        player.upgrades.hand_size_bonus = 2;
        player.upgrades.redraw_bonus = 1;
        player.upgrades.joker_slot_bonus = 3;
        assert_eq!(player.effective_hand_size(), 10);
        assert_eq!(player.effective_redraws(), 6);
        assert_eq!(player.effective_joker_slots(), 8);
    }

    #[test]
    fn hand_add_respects_the_upgraded_bound() {
        let mut player = Player::new();
        player.upgrades.hand_size_bonus = 2;
        player.hand.max_size = player.effective_hand_size();
        let drawn = player.deck.draw_cards(20);
        let accepted = player.hand.add(drawn);
        assert_eq!(accepted, 10);
        assert_eq!(player.hand.len(), 10);
    }
}
