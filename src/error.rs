/// Failures surfaced by the card model, the estimator and the advisor.
///
/// Most of these are recovered locally: an exhausted deck aborts a single
/// trial, a degenerate hole reads as zero equity, a missing table falls
/// back to built-in values and a missing predictor disables that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InsufficientCards { requested: usize, remaining: usize },
    DegenerateHand(usize),
    ConfigurationMissing(String),
    PredictorUnavailable(String),
    InvalidCard(String),
    InvalidPosition(String),
    InvalidAction(String),
    InvalidStreet(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientCards {
                requested,
                remaining,
            } => write!(f, "cannot deal {} cards from {}", requested, remaining),
            Self::DegenerateHand(n) => write!(f, "hole hand has {} cards, expected 2", n),
            Self::ConfigurationMissing(s) => write!(f, "configuration missing: {}", s),
            Self::PredictorUnavailable(s) => write!(f, "predictor unavailable: {}", s),
            Self::InvalidCard(s) => write!(f, "invalid card: {}", s),
            Self::InvalidPosition(s) => write!(f, "invalid position: {}", s),
            Self::InvalidAction(s) => write!(f, "invalid action: {}", s),
            Self::InvalidStreet(s) => write!(f, "invalid street: {}", s),
        }
    }
}

impl std::error::Error for Error {}
