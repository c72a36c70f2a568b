use crate::{HandKind, ScoreContext, Suit};
use serde::{Deserialize, Serialize};

/// The built-in joker catalog. Every joker is a passive scoring modifier:
/// one capability, `apply`, folded over the scoring context in owned-list
/// order. Effects are additive and never read each other's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerKind {
    Joker,
    GreedyJoker,
    LustyJoker,
    WrathfulJoker,
    GluttonousJoker,
    JollyJoker,
    ZanyJoker,
    MadJoker,
    CrazyJoker,
    DrollJoker,
    SlyJoker,
    WilyJoker,
    CleverJoker,
    DeviousJoker,
    CraftyJoker,
    TheMask,
}

impl JokerKind {
    pub const CATALOG: [JokerKind; 16] = [
        JokerKind::Joker,
        JokerKind::GreedyJoker,
        JokerKind::LustyJoker,
        JokerKind::WrathfulJoker,
        JokerKind::GluttonousJoker,
        JokerKind::JollyJoker,
        JokerKind::ZanyJoker,
        JokerKind::MadJoker,
        JokerKind::TheMask,
        JokerKind::CrazyJoker,
        JokerKind::DrollJoker,
        JokerKind::SlyJoker,
        JokerKind::WilyJoker,
        JokerKind::CleverJoker,
        JokerKind::DeviousJoker,
        JokerKind::CraftyJoker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JokerKind::Joker => "Joker",
            JokerKind::GreedyJoker => "Greedy Joker",
            JokerKind::LustyJoker => "Lusty Joker",
            JokerKind::WrathfulJoker => "Wrathful Joker",
            JokerKind::GluttonousJoker => "Gluttonous Joker",
            JokerKind::JollyJoker => "Jolly Joker",
            JokerKind::ZanyJoker => "Zany Joker",
            JokerKind::MadJoker => "Mad Joker",
            JokerKind::CrazyJoker => "Crazy Joker",
            JokerKind::DrollJoker => "Droll Joker",
            JokerKind::SlyJoker => "Sly Joker",
            JokerKind::WilyJoker => "Wily Joker",
            JokerKind::CleverJoker => "Clever Joker",
            JokerKind::DeviousJoker => "Devious Joker",
            JokerKind::CraftyJoker => "Crafty Joker",
            JokerKind::TheMask => "The Mask",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            JokerKind::Joker => "+4 Mult",
            JokerKind::GreedyJoker => "+4 Mult when a Diamond is played",
            JokerKind::LustyJoker => "+4 Mult when a Heart is played",
            JokerKind::WrathfulJoker => "+4 Mult when a Spade is played",
            JokerKind::GluttonousJoker => "+4 Mult when a Club is played",
            JokerKind::JollyJoker => "+8 Mult if the hand is a Pair",
            JokerKind::ZanyJoker => "+8 Mult if the hand is a Three of a Kind",
            JokerKind::MadJoker => "+20 Mult if the hand is a Four of a Kind",
            JokerKind::CrazyJoker => "+12 Mult if the hand is a Straight",
            JokerKind::DrollJoker => "+10 Mult if the hand is a Flush",
            JokerKind::SlyJoker => "+50 Chips if the hand is a Pair",
            JokerKind::WilyJoker => "+100 Chips if the hand is a Three of a Kind",
            JokerKind::CleverJoker => "+150 Chips if the hand is a Four of a Kind",
            JokerKind::DeviousJoker => "+100 Chips if the hand is a Straight",
            JokerKind::CraftyJoker => "+80 Chips if the hand is a Flush",
            JokerKind::TheMask => "+5 Mult",
        }
    }

    pub fn price(self) -> i64 {
        match self {
            JokerKind::Joker => 10,
            JokerKind::GreedyJoker
            | JokerKind::LustyJoker
            | JokerKind::WrathfulJoker
            | JokerKind::GluttonousJoker => 15,
            JokerKind::JollyJoker | JokerKind::SlyJoker | JokerKind::TheMask => 20,
            JokerKind::ZanyJoker
            | JokerKind::CrazyJoker
            | JokerKind::DrollJoker
            | JokerKind::WilyJoker
            | JokerKind::DeviousJoker
            | JokerKind::CraftyJoker => 25,
            JokerKind::MadJoker | JokerKind::CleverJoker => 30,
        }
    }

    pub fn apply(self, ctx: &mut ScoreContext<'_>) {
        match self {
            JokerKind::Joker => ctx.score.mult += 4.0,
            JokerKind::TheMask => ctx.score.mult += 5.0,
            JokerKind::GreedyJoker => suit_mult(ctx, Suit::Diamonds, 4.0),
            JokerKind::LustyJoker => suit_mult(ctx, Suit::Hearts, 4.0),
            JokerKind::WrathfulJoker => suit_mult(ctx, Suit::Spades, 4.0),
            JokerKind::GluttonousJoker => suit_mult(ctx, Suit::Clubs, 4.0),
            JokerKind::JollyJoker => kind_mult(ctx, HandKind::Pair, 8.0),
            JokerKind::ZanyJoker => kind_mult(ctx, HandKind::Trips, 8.0),
            JokerKind::MadJoker => kind_mult(ctx, HandKind::Quads, 20.0),
            JokerKind::CrazyJoker => kind_mult(ctx, HandKind::Straight, 12.0),
            JokerKind::DrollJoker => kind_mult(ctx, HandKind::Flush, 10.0),
            JokerKind::SlyJoker => kind_chips(ctx, HandKind::Pair, 50),
            JokerKind::WilyJoker => kind_chips(ctx, HandKind::Trips, 100),
            JokerKind::CleverJoker => kind_chips(ctx, HandKind::Quads, 150),
            JokerKind::DeviousJoker => kind_chips(ctx, HandKind::Straight, 100),
            JokerKind::CraftyJoker => kind_chips(ctx, HandKind::Flush, 80),
        }
    }
}

fn suit_mult(ctx: &mut ScoreContext<'_>, suit: Suit, bonus: f64) {
    if ctx.cards.iter().any(|card| card.suit == suit) {
        ctx.score.mult += bonus;
    }
}

fn kind_mult(ctx: &mut ScoreContext<'_>, kind: HandKind, bonus: f64) {
    if ctx.kind == kind {
        ctx.score.mult += bonus;
    }
}

fn kind_chips(ctx: &mut ScoreContext<'_>, kind: HandKind, bonus: i64) {
    if ctx.kind == kind {
        ctx.score.chips += bonus;
    }
}
