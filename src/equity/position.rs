use crate::Error;

/// Seat label relative to the button.
///
/// The six-handed seating order is UTG, MP, CO, BTN, SB, BB. Hijack is
/// accepted as a label and plays as a late seat, but it has no slot in
/// the six-handed order and so indexes as 0 wherever an index is needed.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Position {
    #[default]
    UnderTheGun,
    Middle,
    Hijack,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
}

impl Position {
    pub const fn all() -> [Self; 7] {
        [
            Self::UnderTheGun,
            Self::Middle,
            Self::Hijack,
            Self::Cutoff,
            Self::Button,
            Self::SmallBlind,
            Self::BigBlind,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnderTheGun => "UTG",
            Self::Middle => "MP",
            Self::Hijack => "HJ",
            Self::Cutoff => "CO",
            Self::Button => "BTN",
            Self::SmallBlind => "SB",
            Self::BigBlind => "BB",
        }
    }
    /// button, cutoff and hijack act late and play wider
    pub const fn is_late(&self) -> bool {
        matches!(self, Self::Button | Self::Cutoff | Self::Hijack)
    }
    /// fixed six-handed enumeration used in feature vectors
    pub const fn index(&self) -> usize {
        match self {
            Self::UnderTheGun => 0,
            Self::Middle => 1,
            Self::Cutoff => 2,
            Self::Button => 3,
            Self::SmallBlind => 4,
            Self::BigBlind => 5,
            Self::Hijack => 0,
        }
    }
}

impl std::str::FromStr for Position {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}
impl TryFrom<String> for Position {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.label().to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
