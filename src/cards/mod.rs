//! Cards, decks and hand categories.
//!
//! - [`Card`]: an immutable `(Rank, Suit)` value
//! - [`Hand`]: an unordered set of cards as a 52-bit mask
//! - [`Hole`]: a player's two private cards
//! - [`Deck`]: a shuffled deck with slot-indexed removal
//! - [`Evaluator`]: best [`Ranking`] among five or more cards
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
