use super::action::Action;
use super::spot::Spot;
use crate::Chips;
use crate::Probability;
use crate::cards::Street;
use rand::Rng;

/// Controlled deviation from the threshold policy.
///
/// A fold is kept with probability `1 - chance(spot)`; otherwise it becomes
/// a call (`calls` of the time) or a raise. Calls and raises are never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bluff {
    pub base: Probability,
    pub preflop: Probability,
    pub river: Probability,
    pub small_pot: Chips,
    pub calls: Probability,
}

impl Default for Bluff {
    fn default() -> Self {
        Self {
            base: crate::BLUFF_BASE,
            preflop: crate::BLUFF_PREFLOP,
            river: crate::BLUFF_RIVER,
            small_pot: crate::SMALL_POT,
            calls: crate::BLUFF_CALLS,
        }
    }
}

impl Bluff {
    /// never deviates
    pub fn disabled() -> Self {
        Self {
            base: 0.0,
            preflop: 0.0,
            river: 0.0,
            ..Self::default()
        }
    }
    /// Higher in small pre-flop pots, lower on the river.
    pub fn chance(&self, spot: &Spot) -> Probability {
        match spot.street {
            Street::Pref if spot.pot < self.small_pot => self.preflop,
            Street::Rive => self.river,
            _ => self.base,
        }
    }
    fn unit(p: Probability) -> f64 {
        match p {
            p if p.is_nan() => 0.0,
            p => p.clamp(0.0, 1.0) as f64,
        }
    }
    /// The action to play after deviation, and whether it deviated.
    pub fn apply<R: Rng + ?Sized>(&self, action: Action, spot: &Spot, rng: &mut R) -> (Action, bool) {
        let chance = Self::unit(self.chance(spot));
        match action {
            Action::Fold if rng.random_bool(chance) => {
                match rng.random_bool(Self::unit(self.calls)) {
                    true => (Action::Call, true),
                    false => (Action::Raise, true),
                }
            }
            action => (action, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Position;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn spot(street: Street, pot: Chips) -> Spot {
        Spot {
            street,
            position: Position::BigBlind,
            pot,
            bet: 10,
            stack: 500,
        }
    }

    #[test]
    fn chance_by_street() {
        let bluff = Bluff::default();
        assert_eq!(bluff.chance(&spot(Street::Pref, 30)), 0.15);
        assert_eq!(bluff.chance(&spot(Street::Pref, 300)), 0.08);
        assert_eq!(bluff.chance(&spot(Street::Flop, 30)), 0.08);
        assert_eq!(bluff.chance(&spot(Street::Rive, 30)), 0.05);
    }

    #[test]
    fn disabled_never_deviates() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let bluff = Bluff::disabled();
        for _ in 0..1000 {
            assert_eq!(
                bluff.apply(Action::Fold, &spot(Street::Pref, 10), rng),
                (Action::Fold, false)
            );
        }
    }

    #[test]
    fn only_folds_deviate() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let always = Bluff {
            base: 1.0,
            preflop: 1.0,
            river: 1.0,
            ..Bluff::default()
        };
        for _ in 0..100 {
            assert_eq!(always.apply(Action::Call, &spot(Street::Flop, 10), rng), (Action::Call, false));
            assert_eq!(always.apply(Action::Raise, &spot(Street::Flop, 10), rng), (Action::Raise, false));
            assert_ne!(always.apply(Action::Fold, &spot(Street::Flop, 10), rng).0, Action::Fold);
        }
    }

    #[test]
    fn nan_rates_never_deviate() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let broken = Bluff {
            base: Probability::NAN,
            calls: Probability::NAN,
            ..Bluff::default()
        };
        for _ in 0..100 {
            assert_eq!(
                broken.apply(Action::Fold, &spot(Street::Flop, 500), rng),
                (Action::Fold, false)
            );
        }
    }

    #[test]
    fn deviations_mostly_call() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let always = Bluff {
            base: 1.0,
            ..Bluff::default()
        };
        let calls = (0..10_000)
            .map(|_| always.apply(Action::Fold, &spot(Street::Turn, 10), rng).0)
            .filter(|a| *a == Action::Call)
            .count();
        assert!((7_500..8_500).contains(&calls), "{} calls", calls);
    }
}
