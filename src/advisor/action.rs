use crate::Error;

/// What to do at a decision point.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub const fn all() -> [Self; 3] {
        [Self::Fold, Self::Call, Self::Raise]
    }
}

impl std::str::FromStr for Action {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fold" => Ok(Self::Fold),
            "call" => Ok(Self::Call),
            "raise" => Ok(Self::Raise),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for action in Action::all() {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
        assert_eq!(" RAISE ".parse::<Action>(), Ok(Action::Raise));
        assert!("check".parse::<Action>().is_err());
    }
}
