use super::odds::pot_share;
use crate::Chips;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::equity::Position;

/// Numeric input to an external [`Predictor`](super::predictor::Predictor).
///
/// Fixed order:
///
/// | # | field | range |
/// |---|---|---|
/// | 0 | suited | 0/1 |
/// | 1 | rank gap | 0..=12 |
/// | 2 | high card value | 2..=14 |
/// | 3 | position index (UTG MP CO BTN SB BB) | 0..=5 |
/// | 4 | pot | chips |
/// | 5 | current bet | chips |
/// | 6 | community cards | 0..=5 |
/// | 7 | paired | 0/1 |
/// | 8 | connector (gap 1) | 0/1 |
/// | 9 | holds an ace | 0/1 |
/// | 10 | bet / (pot + bet) | 0..=1 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features([f32; 11]);

impl Features {
    pub fn new(hole: &Hole, board: &[Card], position: Position, pot: Chips, bet: Chips) -> Self {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        Self([
            flag(hole.suited()),
            hole.gap() as f32,
            hole.high().rank().value() as f32,
            position.index() as f32,
            pot as f32,
            bet as f32,
            board.len() as f32,
            flag(hole.paired()),
            flag(hole.gap() == 1),
            flag(hole.has(Rank::Ace)),
            pot_share(pot, bet),
        ])
    }
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Features> for [f32; 11] {
    fn from(features: Features) -> Self {
        features.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order() {
        let hole = Hole::try_from("Ah Kh").unwrap();
        let board = Card::parse("2c 7d 9s").unwrap();
        let features = Features::new(&hole, &board, Position::Button, 75, 25);
        assert_eq!(
            <[f32; 11]>::from(features),
            [1.0, 1.0, 14.0, 3.0, 75.0, 25.0, 3.0, 0.0, 1.0, 1.0, 0.25]
        );
    }

    #[test]
    fn indicators_stay_binary() {
        use crate::Arbitrary;
        for _ in 0..200 {
            let hole = Hole::random();
            let f = Features::new(&hole, &[], Position::SmallBlind, 30, 10);
            for i in [0, 7, 8, 9] {
                assert!(f.as_slice()[i] == 0.0 || f.as_slice()[i] == 1.0);
            }
            assert!((0.0..=12.0).contains(&f.as_slice()[1]));
            assert!((2.0..=14.0).contains(&f.as_slice()[2]));
            assert_eq!(f.as_slice()[7] == 1.0, f.as_slice()[1] == 0.0);
        }
    }

    #[test]
    fn pair_without_stakes() {
        let hole = Hole::try_from("7c 7d").unwrap();
        let features = Features::new(&hole, &[], Position::Hijack, 0, 0);
        assert_eq!(
            features.as_slice(),
            &[0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]
        );
    }
}
