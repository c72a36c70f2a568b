//! Game-rules engine for Banatro. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod eval;
pub mod events;
pub mod hand;
pub mod jokers;
pub mod player;
pub mod records;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod shop;

pub use cards::*;
pub use deck::*;
pub use eval::*;
pub use events::*;
pub use hand::*;
pub use jokers::*;
pub use player::*;
pub use records::*;
pub use rng::*;
pub use rules::*;
pub use scoring::*;
pub use session::*;
pub use shop::*;
