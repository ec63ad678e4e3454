/// A poker hand's category.
///
/// Ordered from HighCard (1) to RoyalFlush (10). Two hands in the same
/// category compare equal: there are no kickers here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Ranking {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Ranking {
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
            Ranking::RoyalFlush => write!(f, "RoyalFlush"),
        }
    }
}
