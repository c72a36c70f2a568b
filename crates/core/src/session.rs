use crate::{
    score_play, Deck, Event, EventBus, JokerKind, OfferItem, Player, RngState, RoundRules,
    ScoreBreakdown, ScoreRecord, ShopOffer, SortBy, UpgradeKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Shopping,
    GameOver,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("action not allowed in phase {0:?}")]
    InvalidPhase(Phase),
    #[error("no hands left this round")]
    NoHandsLeft,
    #[error("no redraws left this round")]
    NoRedrawsLeft,
    #[error("select between 1 and 5 cards")]
    InvalidCardCount,
    #[error("invalid card selection")]
    InvalidSelection,
    #[error("not enough coins")]
    NotEnoughCoins,
    #[error("no joker slot available")]
    NoJokerSlot,
    #[error("shop not available")]
    ShopNotAvailable,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
}

/// The whole run: player state, per-round counters, and the phase machine.
/// Every operation validates its preconditions up front and either applies
/// atomically or rejects without touching state.
#[derive(Debug)]
pub struct GameSession {
    pub rng: RngState,
    pub player: Player,
    pub rules: RoundRules,
    pub round_no: u32,
    pub phase: Phase,
    pub shop: Option<ShopOffer>,
    shop_available: bool,
    joker_pool: Vec<JokerKind>,
}

impl GameSession {
    pub fn from_seed(seed: u64) -> Self {
        let mut session = Self {
            rng: RngState::from_seed(seed),
            player: Player::new(),
            rules: RoundRules::for_round(1, 0),
            round_no: 1,
            phase: Phase::Playing,
            shop: None,
            shop_available: false,
            joker_pool: JokerKind::CATALOG.to_vec(),
        };
        session.player.deck.shuffle(&mut session.rng);
        session
    }

    /// Jokers still purchasable this run.
    pub fn joker_pool(&self) -> &[JokerKind] {
        &self.joker_pool
    }

    pub fn shop_available(&self) -> bool {
        self.shop_available
    }

    /// Reset everything run-scoped and start over at round 1. The hand is
    /// dealt by an explicit `deal`; the adapter drives it.
    pub fn new_run(&mut self, events: &mut EventBus) {
        self.player = Player::new();
        self.player.deck.shuffle(&mut self.rng);
        self.joker_pool = JokerKind::CATALOG.to_vec();
        self.round_no = 1;
        self.rules = RoundRules::for_round(1, 0);
        self.shop = None;
        self.shop_available = false;
        self.phase = Phase::Playing;
        events.push(Event::RunStarted {
            seed: self.rng.seed(),
            goal: self.rules.score_goal,
        });
    }

    /// Fill the hand up to its bound. Reports how many cards were dealt.
    pub fn deal(&mut self, events: &mut EventBus) -> Result<usize, SessionError> {
        self.ensure_phase(Phase::Playing)?;
        Ok(self.refill_hand(events))
    }

    /// Play 1-5 selected cards: score them, bank points and coins, then
    /// resolve the round outcome in order (deck exhausted, goal reached,
    /// hands exhausted).
    pub fn play(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<ScoreBreakdown, SessionError> {
        self.ensure_phase(Phase::Playing)?;
        if self.rules.hands_remaining == 0 {
            return Err(SessionError::NoHandsLeft);
        }
        if indices.is_empty() || indices.len() > 5 {
            return Err(SessionError::InvalidCardCount);
        }
        self.validate_selection(indices)?;

        let played = self.player.hand.remove_indices(indices);
        let breakdown = score_play(&played, &self.player.jokers);
        self.player.deck.toss(played);
        self.player.score += breakdown.points;
        self.player.coins += breakdown.coins;
        self.rules.hands_remaining -= 1;
        events.push(Event::HandScored {
            kind: breakdown.kind,
            points: breakdown.points,
            coins: breakdown.coins,
            round_score: self.player.score,
        });

        self.refill_hand(events);
        if self.phase == Phase::GameOver {
            return Ok(breakdown);
        }
        if self.player.score >= self.rules.score_goal {
            self.clear_round(events)?;
        } else if self.rules.hands_remaining == 0 {
            self.end_run(events);
        }
        Ok(breakdown)
    }

    /// Swap out a non-empty selection for fresh cards. Costs one redraw and
    /// changes nothing else.
    pub fn redraw(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<usize, SessionError> {
        self.ensure_phase(Phase::Playing)?;
        if self.rules.redraws_remaining == 0 {
            return Err(SessionError::NoRedrawsLeft);
        }
        if indices.is_empty() {
            return Err(SessionError::InvalidCardCount);
        }
        self.validate_selection(indices)?;

        let removed = self.player.hand.remove_indices(indices);
        let count = removed.len();
        self.player.deck.toss(removed);
        let drawn = self.player.deck.draw_cards(count);
        self.player.hand.add(drawn);
        self.rules.redraws_remaining -= 1;
        events.push(Event::Redrawn {
            count,
            redraws_left: self.rules.redraws_remaining,
        });
        Ok(count)
    }

    /// Presentation-only reorder of the held hand.
    pub fn sort_hand(&mut self, by: SortBy) {
        self.player.hand.sort(by);
    }

    pub fn enter_shop(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        if !self.shop_available {
            return Err(SessionError::ShopNotAvailable);
        }
        self.ensure_phase(Phase::Playing)?;
        let offer = ShopOffer::roll(&self.joker_pool, &mut self.rng);
        events.push(Event::ShopEntered {
            offers: offer.items.len(),
        });
        self.shop = Some(offer);
        self.phase = Phase::Shopping;
        Ok(())
    }

    /// Buy the offer entry at `index`. Rejections (funds, slots) leave the
    /// balance and the offer untouched.
    pub fn purchase(&mut self, index: usize, events: &mut EventBus) -> Result<(), SessionError> {
        self.ensure_phase(Phase::Shopping)?;
        let item = self
            .shop
            .as_ref()
            .and_then(|offer| offer.items.get(index).copied())
            .ok_or(SessionError::InvalidOfferIndex)?;
        if self.player.coins < item.price() {
            return Err(SessionError::NotEnoughCoins);
        }
        match item {
            OfferItem::Joker(kind) => {
                if self.player.jokers.len() >= self.player.effective_joker_slots() {
                    return Err(SessionError::NoJokerSlot);
                }
                self.player.coins -= kind.price();
                self.player.jokers.push(kind);
                self.joker_pool.retain(|pooled| *pooled != kind);
            }
            OfferItem::Upgrade(upgrade) => {
                self.player.coins -= upgrade.price();
                self.apply_upgrade(upgrade);
            }
        }
        if let Some(offer) = self.shop.as_mut() {
            offer.items.remove(index);
        }
        events.push(Event::Purchased {
            item: item.name().to_string(),
            price: item.price(),
            coins: self.player.coins,
        });
        Ok(())
    }

    /// Leave the shop and start the next round.
    pub fn exit_shop(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.ensure_phase(Phase::Shopping)?;
        self.shop = None;
        self.shop_available = false;
        self.round_no += 1;
        self.new_round(events);
        Ok(())
    }

    fn ensure_phase(&self, phase: Phase) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase(self.phase))
        }
    }

    fn validate_selection(&self, indices: &[usize]) -> Result<(), SessionError> {
        let len = self.player.hand.len();
        let mut seen = vec![false; len];
        for &idx in indices {
            if idx >= len || seen[idx] {
                return Err(SessionError::InvalidSelection);
            }
            seen[idx] = true;
        }
        Ok(())
    }

    /// Draw into the free hand space. A refill that leaves the draw pile
    /// empty without the goal met loses the run.
    fn refill_hand(&mut self, events: &mut EventBus) -> usize {
        let space = self.player.hand.space();
        let drawn = self.player.deck.draw_cards(space);
        let placed = self.player.hand.add(drawn);
        if self.player.deck.remaining() == 0 && self.player.score < self.rules.score_goal {
            self.end_run(events);
        }
        placed
    }

    fn clear_round(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        let leftovers = self.player.hand.clear();
        self.player.deck.toss(leftovers);
        events.push(Event::RoundCleared {
            round: self.round_no,
            score: self.player.score,
        });
        self.player.score = 0;
        self.shop_available = true;
        self.enter_shop(events)
    }

    fn new_round(&mut self, events: &mut EventBus) {
        self.player.score = 0;
        self.rules = RoundRules::for_round(self.round_no, self.player.upgrades.redraw_bonus);
        self.player.deck.recycle(&mut self.rng);
        if self.player.deck.remaining() == 0 {
            // Only possible when nothing was ever discarded (a fresh run).
            self.player.deck = Deck::standard52();
            self.player.deck.shuffle(&mut self.rng);
        }
        self.player.hand.max_size = self.player.effective_hand_size();
        self.phase = Phase::Playing;
        events.push(Event::RoundStarted {
            round: self.round_no,
            goal: self.rules.score_goal,
            hands: self.rules.hands_remaining,
            redraws: self.rules.redraws_remaining,
        });
        self.refill_hand(events);
    }

    fn apply_upgrade(&mut self, upgrade: UpgradeKind) {
        let upgrades = &mut self.player.upgrades;
        match upgrade {
            UpgradeKind::HandSize => upgrades.hand_size_bonus = upgrades.hand_size_bonus.saturating_add(1),
            UpgradeKind::Redraw => upgrades.redraw_bonus = upgrades.redraw_bonus.saturating_add(1),
            UpgradeKind::JokerSlot => {
                upgrades.joker_slot_bonus = upgrades.joker_slot_bonus.saturating_add(1)
            }
        }
        // Hand size grows in place for the next refill; redraws top up the
        // counter for the round in progress.
        self.player.hand.max_size = self.player.effective_hand_size();
        self.rules.redraws_remaining = self.player.effective_redraws();
    }

    fn end_run(&mut self, events: &mut EventBus) {
        self.phase = Phase::GameOver;
        events.push(Event::RunEnded {
            record: ScoreRecord {
                score: self.player.score,
                round: self.round_no,
            },
        });
    }
}
