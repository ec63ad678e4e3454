use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

const ABSENT: u8 = u8::MAX;

/// A shuffled deck owned by one hand in progress.
///
/// The remaining cards sit in post-shuffle order and are dealt off the end.
/// Alongside them, 52 fixed slots record where each card currently lives,
/// so excluding a visible card is a swap-remove rather than a linear scan.
/// Removed cards never come back until [`Deck::reset`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    slots: [u8; 52],
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck shuffled by the thread-local rng.
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }
    /// Creates a fresh 52-card deck shuffled by the given rng.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(52),
            slots: [ABSENT; 52],
        };
        deck.reset(rng);
        deck
    }
    /// Restores all 52 cards and reshuffles.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.clear();
        self.cards.extend((0..52u8).map(Card::from));
        self.cards.shuffle(rng);
        for (i, card) in self.cards.iter().enumerate() {
            self.slots[u8::from(*card) as usize] = i as u8;
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.slots[u8::from(*card) as usize] != ABSENT
    }
    /// the remaining cards as an unordered set
    pub fn remaining(&self) -> Hand {
        Hand::from(self.cards.as_slice())
    }

    /// Excludes a specific card, e.g. one already visible on the table.
    /// Returns false if the card was already gone.
    pub fn remove(&mut self, card: Card) -> bool {
        let index = u8::from(card) as usize;
        match self.slots[index] {
            ABSENT => false,
            slot => {
                let slot = slot as usize;
                self.cards.swap_remove(slot);
                if let Some(moved) = self.cards.get(slot) {
                    self.slots[u8::from(*moved) as usize] = slot as u8;
                }
                self.slots[index] = ABSENT;
                true
            }
        }
    }

    /// Removes and returns the card at the end of the remaining order.
    pub fn draw(&mut self) -> Result<Card, Error> {
        let card = self.cards.pop().ok_or(Error::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;
        self.slots[u8::from(card) as usize] = ABSENT;
        Ok(card)
    }

    /// Removes and returns `n` cards off the end, or nothing at all if
    /// fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.len(),
            });
        }
        (0..n).map(|_| self.draw()).collect()
    }

    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        let cards = self.deal(2)?;
        Ok(Hole::from((cards[0], cards[1])))
    }
}
