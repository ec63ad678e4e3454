use crate::Chips;
use crate::Probability;
use crate::cards::Street;
use crate::equity::Position;

/// The betting context of one decision: where we sit, what street it is,
/// what is in the pot, what we face and what we can put in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Spot {
    pub street: Street,
    pub position: Position,
    pub pot: Chips,
    pub bet: Chips,
    pub stack: Chips,
}

impl Spot {
    /// Bet relative to pot. An empty pot counts as 1.
    pub fn pot_ratio(&self) -> Probability {
        match self.pot {
            0 => 1.0,
            pot => self.bet as Probability / pot as Probability,
        }
    }
}
