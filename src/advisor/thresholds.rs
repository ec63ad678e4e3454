use super::action::Action;
use super::spot::Spot;
use crate::Probability;
use crate::cards::Street;

/// Win-rate cutoffs for raising and calling at one spot.
///
/// Late seats start lower than early ones. Both cutoffs grow with the
/// street and grow again when the bet is large relative to the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub raise: Probability,
    pub call: Probability,
}

impl Thresholds {
    pub fn street_multiplier(street: Street) -> Probability {
        match street {
            Street::Pref => 1.00,
            Street::Flop => 1.05,
            Street::Turn => 1.10,
            Street::Rive => 1.15,
        }
    }
    /// strictly above raise raises, strictly above call calls, else fold
    pub fn classify(&self, p: Probability) -> Action {
        if p > self.raise {
            Action::Raise
        } else if p > self.call {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

impl From<&Spot> for Thresholds {
    fn from(spot: &Spot) -> Self {
        let (raise, call) = match spot.position.is_late() {
            true => (crate::RAISE_LATE, crate::CALL_LATE),
            false => (crate::RAISE_EARLY, crate::CALL_EARLY),
        };
        let street = Self::street_multiplier(spot.street);
        let pressure = match spot.pot_ratio() > crate::BIG_BET_RATIO {
            true => crate::BIG_BET_INFLATION,
            false => 1.0,
        };
        Self {
            raise: raise * street * pressure,
            call: call * street * pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Position;

    fn spot(street: Street, position: Position, pot: u32, bet: u32) -> Spot {
        Spot {
            street,
            position,
            pot,
            bet,
            stack: 1000,
        }
    }

    #[test]
    fn late_is_looser() {
        let late = Thresholds::from(&spot(Street::Pref, Position::Button, 100, 10));
        let early = Thresholds::from(&spot(Street::Pref, Position::UnderTheGun, 100, 10));
        assert!(late.raise < early.raise);
        assert!(late.call < early.call);
        assert_eq!(late.raise, 0.48);
        assert_eq!(early.call, 0.32);
    }

    #[test]
    fn streets_tighten() {
        let t = |street| Thresholds::from(&spot(street, Position::Middle, 100, 10));
        assert!(t(Street::Pref).raise < t(Street::Flop).raise);
        assert!(t(Street::Flop).raise < t(Street::Turn).raise);
        assert!(t(Street::Turn).raise < t(Street::Rive).raise);
        assert!((t(Street::Rive).call - 0.32 * 1.15).abs() < 1e-6);
    }

    #[test]
    fn big_bets_inflate() {
        let small = Thresholds::from(&spot(Street::Flop, Position::Cutoff, 100, 70));
        let large = Thresholds::from(&spot(Street::Flop, Position::Cutoff, 100, 71));
        assert!((large.raise - small.raise * 1.1).abs() < 1e-6);
        assert!((large.call - small.call * 1.1).abs() < 1e-6);
    }

    #[test]
    fn empty_pot_counts_as_large() {
        let t = Thresholds::from(&spot(Street::Pref, Position::Button, 0, 0));
        assert!((t.raise - 0.48 * 1.1).abs() < 1e-6);
    }

    #[test]
    fn raise_sits_above_call() {
        use crate::Arbitrary;
        for _ in 0..100 {
            let street = Street::random();
            for position in Position::all() {
                let t = Thresholds::from(&spot(street, position, 100, 80));
                assert!(t.raise > t.call);
                assert!(t.raise < 1.0);
            }
        }
    }

    #[test]
    fn classification_is_strict() {
        let t = Thresholds {
            raise: 0.5,
            call: 0.3,
        };
        assert_eq!(t.classify(0.51), Action::Raise);
        assert_eq!(t.classify(0.5), Action::Call);
        assert_eq!(t.classify(0.3), Action::Fold);
    }
}
