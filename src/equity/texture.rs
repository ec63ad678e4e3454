use crate::cards::Card;

/// Qualitative class of the community cards.
///
/// Checked in priority order: a paired board is Paired even when it is
/// also connected, a monotone board is Monotone even when connected.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Paired,
    Monotone,
    Connected,
    Rainbow,
}

impl Texture {
    /// None for an empty board.
    pub fn classify(board: &[Card]) -> Option<Self> {
        if board.is_empty() {
            return None;
        }
        let mut ranks = board.iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort();
        ranks.dedup();
        if ranks.len() < board.len() {
            return Some(Self::Paired);
        }
        if board.iter().all(|c| c.suit() == board[0].suit()) {
            return Some(Self::Monotone);
        }
        if ranks.windows(2).all(|w| w[1].value() - w[0].value() <= 2) {
            return Some(Self::Connected);
        }
        Some(Self::Rainbow)
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Paired => write!(f, "paired"),
            Self::Monotone => write!(f, "monotone"),
            Self::Connected => write!(f, "connected"),
            Self::Rainbow => write!(f, "rainbow"),
        }
    }
}
