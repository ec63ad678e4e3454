use super::action::Action;
use super::bluff::Bluff;
use super::features::Features;
use super::history::History;
use super::odds::implied_odds;
use super::policy::Policy;
use super::predictor::Predictor;
use super::record::HandRecord;
use super::spot::Spot;
use super::thresholds::Thresholds;
use crate::Chips;
use crate::Error;
use crate::Probability;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Hole;
use crate::equity::Estimator;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A concrete action with its chip amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub probability: Probability,
    pub action: Action,
    pub amount: Chips,
    /// implied-odds expected value of continuing
    pub ev: Utility,
    /// a fold turned into a call or raise
    pub bluffed: bool,
    /// the action came from the predictor rather than the thresholds
    pub predicted: bool,
}

/// Turns win rates into actions.
///
/// [`Advisor::decide`] is the threshold policy over a known probability.
/// [`Advisor::advise`] estimates the probability first and, when a
/// [`Predictor`] is attached, lets it replace the threshold action. Either
/// way the bluff override and bet sizing run last, so every call ends in a
/// concrete action and an amount no larger than the stack.
///
/// Completed decisions go into a bounded [`History`]; [`Advisor::learn`]
/// rebuilds a bucketed [`Policy`] from it. The policy is advisory and only
/// surfaces through [`Advisor::suggest`].
pub struct Advisor {
    estimator: Estimator,
    bluff: Bluff,
    predictor: Option<Box<dyn Predictor>>,
    policy: Policy,
    history: History,
    rng: SmallRng,
}

impl Advisor {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            bluff: Bluff::default(),
            predictor: None,
            policy: Policy::default(),
            history: History::default(),
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    /// fixes the bluff rng
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..self
        }
    }
    pub fn with_bluff(self, bluff: Bluff) -> Self {
        Self { bluff, ..self }
    }
    pub fn with_capacity(self, capacity: usize) -> Self {
        Self {
            history: History::new(capacity),
            ..self
        }
    }
    /// Attaches the outcome of loading a predictor. A failed load is
    /// logged and the advisor stays rule-based.
    pub fn with_predictor(self, loaded: anyhow::Result<Box<dyn Predictor>>) -> Self {
        match loaded {
            Ok(predictor) => Self {
                predictor: Some(predictor),
                ..self
            },
            Err(e) => {
                log::warn!("{}", Error::PredictorUnavailable(e.to_string()));
                Self {
                    predictor: None,
                    ..self
                }
            }
        }
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Threshold policy for a known win probability.
    pub fn decide(&mut self, win_prob: Probability, spot: &Spot) -> Decision {
        let action = Thresholds::from(spot).classify(win_prob);
        self.finish(win_prob, action, false, spot)
    }

    /// Estimates the win rate for these cards and decides on it.
    pub fn advise(&mut self, hole: &[Card], board: &[Card], spot: &Spot) -> Decision {
        let win_prob = self
            .estimator
            .estimate_win_rate(hole, board, spot.position);
        let action = Thresholds::from(spot).classify(win_prob);
        match self.predict(hole, board, spot) {
            Some(predicted) => self.finish(win_prob, predicted, true, spot),
            None => self.finish(win_prob, action, false, spot),
        }
    }

    /// Saves a finished hand.
    pub fn record(&mut self, record: HandRecord) {
        self.history.push(record);
    }
    /// Rebuilds the policy from the whole history.
    pub fn learn(&mut self) {
        self.policy.learn(&self.history);
        log::info!(
            "learned {} policy buckets from {} hands",
            self.policy.len(),
            self.history.len()
        );
    }
    /// The learned action for this win probability's bucket, if any.
    pub fn suggest(&self, win_prob: Probability) -> Option<Action> {
        self.policy.get(win_prob)
    }

    /// None when there is no predictor or the cards do not form a hole.
    /// A failing predictor is dropped after its first error.
    fn predict(&mut self, hole: &[Card], board: &[Card], spot: &Spot) -> Option<Action> {
        let predictor = self.predictor.as_ref()?;
        let hole = Hole::try_from(hole).ok()?;
        let features = Features::new(&hole, board, spot.position, spot.pot, spot.bet);
        match predictor.predict(&features) {
            Ok(action) => Some(action),
            Err(e) => {
                log::warn!(
                    "{}, falling back to thresholds",
                    Error::PredictorUnavailable(e.to_string())
                );
                self.predictor = None;
                None
            }
        }
    }

    fn finish(&mut self, win_prob: Probability, action: Action, predicted: bool, spot: &Spot) -> Decision {
        let (action, bluffed) = self.bluff.apply(action, spot, &mut self.rng);
        let amount = match action {
            Action::Raise => spot.bet.saturating_mul(2).min(spot.stack),
            Action::Call => spot.bet.min(spot.stack),
            Action::Fold => 0,
        };
        let ev = implied_odds(spot.pot, spot.bet, win_prob);
        log::debug!(
            "{} {} @ {} | p {:.3} ev {:+.1} -> {} {}{}",
            spot.street,
            spot.position,
            spot.pot,
            win_prob,
            ev,
            action,
            amount,
            if bluffed { " (bluff)" } else { "" }
        );
        Decision {
            probability: win_prob,
            action,
            amount,
            ev,
            bluffed,
            predicted,
        }
    }
}
