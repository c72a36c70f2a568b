use crate::{HandKind, ScoreRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RunStarted {
        seed: u64,
        goal: i64,
    },
    RoundStarted {
        round: u32,
        goal: i64,
        hands: u8,
        redraws: u8,
    },
    HandScored {
        kind: HandKind,
        points: i64,
        coins: i64,
        round_score: i64,
    },
    Redrawn {
        count: usize,
        redraws_left: u8,
    },
    RoundCleared {
        round: u32,
        score: i64,
    },
    ShopEntered {
        offers: usize,
    },
    Purchased {
        item: String,
        price: i64,
        coins: i64,
    },
    RunEnded {
        record: ScoreRecord,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
