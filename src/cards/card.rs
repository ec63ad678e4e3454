use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card.
///
/// Cards are plain values: two cards are equal iff rank and suit match,
/// and they order by rank first, then suit. A card drawn from a [`Deck`]
/// and the same card typed in by hand compare equal.
///
/// # Representations
///
/// - `u8`: index `rank * 4 + suit` in `0..52`, used by [`Deck`] slots
/// - `u64`: a single bit, used for set membership in [`Hand`]
/// - `String`: two-character notation like `"As"` or `"Td"`, used by serde
///
/// [`Deck`]: super::deck::Deck
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Parses a whitespace or comma separated list like `"As Kd 10h"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// the last character is the suit, everything before it the rank
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| Error::InvalidCard(s.to_string()))?;
        let rank = Rank::try_from(&s[..split])?;
        let suit = Suit::try_from(&s[split..])?;
        Ok(Card::from((rank, suit)))
    }
}
impl TryFrom<String> for Card {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..52u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::random();
        assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
    }

    #[test]
    fn parse_list() {
        let cards = Card::parse("As, 10d  2♥").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::from((Rank::Ace, Suit::Spade)),
                Card::from((Rank::Ten, Suit::Diamond)),
                Card::from((Rank::Two, Suit::Heart)),
            ]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::try_from("s").is_err());
        assert!(Card::try_from("Zs").is_err());
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("").is_err());
    }

    #[test]
    fn orders_by_rank_then_suit() {
        let two_spades = Card::try_from("2s").unwrap();
        let three_clubs = Card::try_from("3c").unwrap();
        let three_hearts = Card::try_from("3h").unwrap();
        assert!(two_spades < three_clubs);
        assert!(three_clubs < three_hearts);
    }

    #[test]
    fn serde_as_string() {
        let card = Card::try_from("Qh").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qh\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
