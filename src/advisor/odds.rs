use crate::Chips;
use crate::Probability;
use crate::Utility;

/// Pot size per chip of bet. Free to continue when nothing is bet.
pub fn pot_odds(pot: Chips, bet: Chips) -> Utility {
    match bet {
        0 => Utility::INFINITY,
        bet => pot as Utility / bet as Utility,
    }
}

/// Win the pot with probability p, lose the bet otherwise.
pub fn expected_value(p: Probability, pot: Chips, bet: Chips) -> Utility {
    p * pot as Utility - (1.0 - p) * bet as Utility
}

/// Like [`expected_value`] but the bet joins the pot when we win.
pub fn implied_odds(pot: Chips, bet: Chips, p: Probability) -> Utility {
    match pot.saturating_add(bet) {
        0 => 0.0,
        total => total as Utility * p - bet as Utility * (1.0 - p),
    }
}

/// Share of the final pot we are asked to put in. Zero when nothing is at stake.
pub fn pot_share(pot: Chips, bet: Chips) -> Probability {
    match pot.saturating_add(bet) {
        0 => 0.0,
        total => bet as Probability / total as Probability,
    }
}
