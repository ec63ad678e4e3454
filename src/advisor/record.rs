use super::action::Action;
use super::advisor::Decision;
use super::spot::Spot;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::cards::Card;
use crate::equity::Position;

/// One completed decision and what it returned.
///
/// Positive results are chips won, zero or negative are chips lost or a
/// fold. Serialises to one JSON object per record for training sets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandRecord {
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub win_prob: Probability,
    pub action: Action,
    pub result: Utility,
    pub position: Position,
    pub pot: Chips,
    pub bet: Chips,
}

impl HandRecord {
    pub fn new(hole: &[Card], board: &[Card], spot: &Spot, decision: &Decision, result: Utility) -> Self {
        Self {
            hole: hole.to_vec(),
            board: board.to_vec(),
            win_prob: decision.probability,
            action: decision.action,
            result,
            position: spot.position,
            pot: spot.pot,
            bet: decision.amount,
        }
    }
}

impl std::fmt::Display for HandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, "Hand       {}", join(&self.hole))?;
        writeln!(f, "Community  {}", join(&self.board))?;
        writeln!(f, "Position   {}", self.position)?;
        writeln!(f, "Win Rate   {:.1}%", self.win_prob * 100.0)?;
        writeln!(f, "Action     {}", self.action)?;
        writeln!(f, "Bet Amount ${}", self.bet)?;
        writeln!(f, "Pot Size   ${}", self.pot)?;
        write!(f, "Result     {:+.0}", self.result)
    }
}
