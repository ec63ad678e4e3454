use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A-2-3-4-5, where the Ace plays low
const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's category.
///
/// Using a compact representation of the Hand, rank multiplicities, the
/// flush suit and straights all fall out of bitwise operations. Categories
/// are tried from strongest to weakest and the first hit wins.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}
impl From<&[Card]> for Evaluator {
    fn from(cards: &[Card]) -> Self {
        Self(Hand::from(cards))
    }
}

impl Evaluator {
    /// Best category among any five of the cards. Fewer than five cards
    /// are High Card by definition.
    pub fn find_ranking(&self) -> Ranking {
        if self.0.size() < 5 {
            return Ranking::HighCard;
        }
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(self.0.of(&suit)))
            .map(|high| match high {
                Rank::Ace => Ranking::RoyalFlush,
                _ => Ranking::StraightFlush,
            })
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(|_| Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|_| Ranking::FullHouse)
        })
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(|_| Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(|_| Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|_| Ranking::TwoPair)
        })
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(|_| Ranking::OnePair)
    }

    /// highest rank topping five consecutive ranks
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    /// highest rank held at least n times, other than skip
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.multiplicity(*rank) >= n)
    }
}

/// Evaluates any set of cards, see [`Evaluator::find_ranking`].
pub fn evaluate(cards: &[Card]) -> Ranking {
    Evaluator::from(cards).find_ranking()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(s: &str) -> Ranking {
        evaluate(&Card::parse(s).unwrap())
    }

    #[test]
    fn high_card() {
        assert_eq!(rank("As Kh Qd Jc 9s"), Ranking::HighCard);
    }

    #[test]
    fn one_pair() {
        assert_eq!(rank("As Ah Kd Qc Js"), Ranking::OnePair);
    }

    #[test]
    fn two_pair() {
        assert_eq!(rank("As Ah Kd Kc 2c"), Ranking::TwoPair);
    }

    #[test]
    fn three_oak() {
        assert_eq!(rank("As Ah Ad Kc Qs"), Ranking::ThreeOAK);
    }

    #[test]
    fn straight() {
        assert_eq!(rank("2h 3d 4c 5s 6h"), Ranking::Straight);
        assert_eq!(rank("Ts Jh Qd Kc As"), Ranking::Straight);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(rank("As 2h 3d 4c 5s"), Ranking::Straight);
    }

    #[test]
    fn no_wraparound() {
        assert_eq!(rank("Qs Kh Ad 2c 3s"), Ranking::HighCard);
    }

    #[test]
    fn flush() {
        assert_eq!(rank("As Ks Qs Js 9s"), Ranking::Flush);
    }

    #[test]
    fn full_house() {
        assert_eq!(rank("2s 2h 2d 3c 3s"), Ranking::FullHouse);
    }

    #[test]
    fn four_oak() {
        assert_eq!(rank("As Ah Ad Ac Ks"), Ranking::FourOAK);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank("2s 3s 4s 5s 6s"), Ranking::StraightFlush);
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(rank("As 2s 3s 4s 5s"), Ranking::StraightFlush);
    }

    #[test]
    fn royal_flush() {
        assert_eq!(rank("Th Jh Qh Kh Ah"), Ranking::RoyalFlush);
    }

    #[test]
    fn partial_hands_are_high_card() {
        assert_eq!(rank("As Ah Ad Ac"), Ranking::HighCard);
        assert_eq!(rank(""), Ranking::HighCard);
    }

    #[test]
    fn seven_card_two_pair() {
        assert_eq!(rank("As Ah Kd Kc Qs Jh 9d"), Ranking::TwoPair);
    }

    #[test]
    fn three_pair_is_two_pair() {
        assert_eq!(rank("As Ah Kd Kc Qs Qh Jd"), Ranking::TwoPair);
    }

    #[test]
    fn two_three_oak_is_full_house() {
        assert_eq!(rank("As Ah Ad Kc Ks Kh Qd"), Ranking::FullHouse);
    }

    #[test]
    fn flush_over_straight() {
        assert_eq!(rank("4h 6h 7h 8h 9h Ts"), Ranking::Flush);
    }

    #[test]
    fn full_house_over_flush() {
        assert_eq!(rank("Kh Ah Ad As Ks Qs Js 9s"), Ranking::FullHouse);
    }

    #[test]
    fn four_oak_over_full_house() {
        assert_eq!(rank("As Ah Ad Ac Ks Kh Qd"), Ranking::FourOAK);
    }

    #[test]
    fn straight_flush_over_four_oak() {
        assert_eq!(rank("9s Ts Js Qs Ks Kh Kd Kc"), Ranking::StraightFlush);
    }

    #[test]
    fn royal_inside_seven_cards() {
        assert_eq!(rank("2c 9s Ts Js Qs Ks As"), Ranking::RoyalFlush);
    }

    #[test]
    fn flush_and_offsuit_straight_is_flush() {
        assert_eq!(rank("2h 5h 8h Jh Kh 9c Tc Qd"), Ranking::Flush);
        assert_eq!(rank("2h 4h 6h 8h Th 7c 9d"), Ranking::Flush);
    }

    #[test]
    fn categories_are_ordered() {
        assert!(Ranking::RoyalFlush > Ranking::StraightFlush);
        assert!(Ranking::FullHouse > Ranking::Flush);
        assert!(Ranking::OnePair > Ranking::HighCard);
        assert_eq!(Ranking::HighCard.ordinal(), 1);
        assert_eq!(Ranking::RoyalFlush.ordinal(), 10);
    }
}
