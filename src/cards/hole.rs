use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use crate::Error;

/// A player's two private cards.
///
/// Stored as a [`Hand`] so that the pair is unordered: `As Kd` and `Kd As`
/// are the same Hole, and everything derived from it is too.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// the higher card, by rank then suit
    pub fn high(&self) -> Card {
        Vec::<Card>::from(self.0)[1]
    }
    /// the lower card, by rank then suit
    pub fn low(&self) -> Card {
        Vec::<Card>::from(self.0)[0]
    }
    pub fn suited(&self) -> bool {
        self.high().suit() == self.low().suit()
    }
    pub fn paired(&self) -> bool {
        self.high().rank() == self.low().rank()
    }
    /// distance between the two face values, 0 for a pair
    pub fn gap(&self) -> u8 {
        self.high().rank().value() - self.low().rank().value()
    }
    pub fn has(&self, rank: Rank) -> bool {
        self.high().rank() == rank || self.low().rank() == rank
    }
    /// Canonical key into the strength table.
    ///
    /// Pairs are `"RR"`, everything else is high rank, low rank and an
    /// `s` or `o` suffix for suited or offsuit: `"AA"`, `"AKs"`, `"T9o"`.
    pub fn descriptor(&self) -> String {
        let hi = self.high().rank();
        let lo = self.low().rank();
        match (self.paired(), self.suited()) {
            (true, _) => format!("{}{}", hi, lo),
            (false, true) => format!("{}{}s", hi, lo),
            (false, false) => format!("{}{}o", hi, lo),
        }
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must differ");
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

/// exactly two distinct cards, anything else is degenerate
impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let hand = Hand::from(cards);
        match (cards.len(), hand.size()) {
            (2, 2) => Ok(Self(hand)),
            (n, _) => Err(Error::DegenerateHand(n)),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = super::deck::Deck::shuffled(rng);
        deck.hole().expect("fresh deck holds two cards")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_descriptor() {
        assert_eq!(Hole::try_from("Ah As").unwrap().descriptor(), "AA");
        assert_eq!(Hole::try_from("Td Tc").unwrap().descriptor(), "TT");
    }

    #[test]
    fn suited_descriptor() {
        assert_eq!(Hole::try_from("Ks As").unwrap().descriptor(), "AKs");
    }

    #[test]
    fn offsuit_descriptor() {
        assert_eq!(Hole::try_from("Kd Ah").unwrap().descriptor(), "AKo");
        assert_eq!(Hole::try_from("9c Th").unwrap().descriptor(), "T9o");
    }

    #[test]
    fn order_independent() {
        assert_eq!(
            Hole::try_from("Kd Ah").unwrap(),
            Hole::try_from("Ah Kd").unwrap()
        );
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(Hole::try_from("Ah"), Err(Error::DegenerateHand(1)));
        assert_eq!(Hole::try_from("Ah Kd Qc"), Err(Error::DegenerateHand(3)));
        assert_eq!(Hole::try_from("Ah Ah"), Err(Error::DegenerateHand(2)));
    }

    #[test]
    fn gap_and_flags() {
        let hole = Hole::try_from("5h 7h").unwrap();
        assert_eq!(hole.gap(), 2);
        assert!(hole.suited());
        assert!(!hole.paired());
        assert!(!hole.has(Rank::Ace));
    }
}
