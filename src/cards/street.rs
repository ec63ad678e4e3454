use crate::Error;

/// The four betting rounds, ordered by how much of the board is visible.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    #[serde(rename = "preflop")]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    #[serde(rename = "river")]
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

/// community card count to street
impl TryFrom<usize> for Street {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(Error::InvalidStreet(format!("{} community cards", n))),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        Self::all()[rand::random_range(0..4)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_size() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_observed()), Ok(*street));
        }
        assert!(Street::try_from(2).is_err());
    }
}
