use super::action::Action;
use super::features::Features;

/// An external classifier that picks an action from a feature vector.
///
/// Loading one is the caller's business. Hand the result to
/// [`Advisor::with_predictor`](super::advisor::Advisor::with_predictor); a
/// failed load leaves the advisor on its rule-based path.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &Features) -> anyhow::Result<Action>;
}

impl<F> Predictor for F
where
    F: Fn(&Features) -> anyhow::Result<Action> + Send + Sync,
{
    fn predict(&self, features: &Features) -> anyhow::Result<Action> {
        self(features)
    }
}
