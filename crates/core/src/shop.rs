use crate::{JokerKind, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    HandSize,
    Redraw,
    JokerSlot,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [
        UpgradeKind::HandSize,
        UpgradeKind::Redraw,
        UpgradeKind::JokerSlot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UpgradeKind::HandSize => "Hand +1",
            UpgradeKind::Redraw => "Redraw +1",
            UpgradeKind::JokerSlot => "Joker Slot +1",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            UpgradeKind::HandSize => "+1 card hand size (permanent this run)",
            UpgradeKind::Redraw => "+1 redraw each round",
            UpgradeKind::JokerSlot => "+1 joker slot",
        }
    }

    pub fn price(self) -> i64 {
        match self {
            UpgradeKind::HandSize => 30,
            UpgradeKind::Redraw => 40,
            UpgradeKind::JokerSlot => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferItem {
    Joker(JokerKind),
    Upgrade(UpgradeKind),
}

impl OfferItem {
    pub fn name(self) -> &'static str {
        match self {
            OfferItem::Joker(kind) => kind.name(),
            OfferItem::Upgrade(kind) => kind.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OfferItem::Joker(kind) => kind.description(),
            OfferItem::Upgrade(kind) => kind.description(),
        }
    }

    pub fn price(self) -> i64 {
        match self {
            OfferItem::Joker(kind) => kind.price(),
            OfferItem::Upgrade(kind) => kind.price(),
        }
    }
}

/// One round boundary's worth of purchasable entries: up to two jokers from
/// the not-yet-owned pool plus exactly one upgrade, each consumed as bought.
#[derive(Debug, Clone, Default)]
pub struct ShopOffer {
    pub items: Vec<OfferItem>,
}

impl ShopOffer {
    pub fn roll(pool: &[JokerKind], rng: &mut RngState) -> Self {
        let mut jokers = pool.to_vec();
        rng.shuffle(&mut jokers);
        jokers.truncate(2);
        let mut items: Vec<OfferItem> = jokers.into_iter().map(OfferItem::Joker).collect();
        let upgrade = UpgradeKind::ALL[rng.pick_index(UpgradeKind::ALL.len())];
        items.push(OfferItem::Upgrade(upgrade));
        Self { items }
    }
}
