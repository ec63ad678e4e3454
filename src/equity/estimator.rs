use super::position::Position;
use super::table::Table;
use super::texture::Texture;
use crate::Error;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Hole;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// How the board-texture factor enters the final probability.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// reported in the [`Estimate`], left out of the probability
    #[default]
    Ignore,
    /// the blended probability is scaled by `1 - factor`
    Dampen,
}

/// Runtime knobs for an [`Estimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub trials: usize,
    /// weight of the table prior, the sampled rate gets `1 - prior`
    pub prior: Probability,
    pub blend: Blend,
    /// fixes every trial's rng; None draws a fresh base seed per estimate
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trials: crate::TRIALS,
            prior: crate::PRIOR_WEIGHT,
            blend: Blend::default(),
            seed: None,
        }
    }
}

/// Everything that went into one win-rate estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub probability: Probability,
    pub prior: Probability,
    pub sampled: Probability,
    pub positional: Probability,
    pub texture: Option<(Texture, Probability)>,
    pub wins: usize,
    pub trials: usize,
}

impl Estimate {
    fn degenerate() -> Self {
        Self {
            probability: 0.0,
            prior: 0.0,
            sampled: 0.0,
            positional: 1.0,
            texture: None,
            wins: 0,
            trials: 0,
        }
    }
}

/// Monte Carlo equity against one unknown opponent hand.
///
/// Each trial shuffles its own deck, removes every visible card, runs the
/// board out to five, deals the opponent two cards and compares categories.
/// Ties are not wins. Trials share nothing mutable, so they run on rayon and
/// only the win counts are summed. Trial `i` seeds its rng from the base
/// seed and `i`, which keeps a seeded estimate identical across thread counts.
#[derive(Debug, Clone)]
pub struct Estimator {
    table: Arc<Table>,
    settings: Settings,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Arc::new(Table::builtin().clone()), Settings::default())
    }
}

impl Estimator {
    pub fn new(table: Arc<Table>, settings: Settings) -> Self {
        Self { table, settings }
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Blended win probability in [0, 1]. Zero unless `hole` is exactly two cards.
    pub fn estimate_win_rate(
        &self,
        hole: &[Card],
        board: &[Card],
        position: Position,
    ) -> Probability {
        self.estimate(hole, board, position).probability
    }

    pub fn estimate(&self, hole: &[Card], board: &[Card], position: Position) -> Estimate {
        let hole = match Hole::try_from(hole) {
            Ok(hole) => hole,
            Err(e) => {
                log::debug!("{}, equity is zero", e);
                return Estimate::degenerate();
            }
        };
        if board.len() > 5 {
            log::warn!("{} community cards, equity is zero", board.len());
            return Estimate::degenerate();
        }
        let visible = Hand::add(Hand::from(hole), Hand::from(board));
        if visible.size() != 2 + board.len() {
            log::warn!("{} ~ {} repeats a card, equity is zero", hole, Hand::from(board));
            return Estimate::degenerate();
        }
        let prior = self.table.prior(&hole);
        let positional = self.table.positional(&position);
        let texture = Texture::classify(board).map(|t| (t, self.table.texture(&t)));
        let (wins, trials) = self.simulate(hole, Hand::from(board));
        let sampled = match trials {
            0 => 0.0,
            n => wins as Probability / n as Probability,
        };
        let weight = match self.settings.prior {
            w if w.is_nan() => 0.0,
            w => w.clamp(0.0, 1.0),
        };
        let blended = (prior * weight + sampled * (1.0 - weight)) * positional;
        let dampened = match (self.settings.blend, texture) {
            (Blend::Dampen, Some((_, factor))) => blended * (1.0 - factor),
            _ => blended,
        };
        let probability = dampened.clamp(0.0, 1.0);
        log::debug!(
            "{} ~ {} @ {} | prior {:.3} sampled {:.3} ({}/{}) positional {:.2} -> {:.3}",
            hole,
            Hand::from(board),
            position,
            prior,
            sampled,
            wins,
            trials,
            positional,
            probability
        );
        Estimate {
            probability,
            prior,
            sampled,
            positional,
            texture,
            wins,
            trials,
        }
    }

    /// (wins, completed trials)
    fn simulate(&self, hole: Hole, board: Hand) -> (usize, usize) {
        let base = self.settings.seed.unwrap_or_else(rand::random);
        (0..self.settings.trials)
            .into_par_iter()
            .map(|i| {
                let ref mut rng = Self::rng(base, i);
                match Self::trial(rng, hole, board) {
                    Ok(won) => (won as usize, 1),
                    Err(e) => {
                        log::error!("trial {} aborted: {}", i, e);
                        debug_assert!(false, "deck underflow with 9 cards in play: {}", e);
                        (0, 0)
                    }
                }
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    }

    fn rng(base: u64, trial: usize) -> SmallRng {
        let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
        base.hash(hasher);
        trial.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    /// One runout: true iff the hero's category strictly beats the opponent's.
    fn trial<R: Rng + ?Sized>(rng: &mut R, hole: Hole, board: Hand) -> Result<bool, Error> {
        let mut deck = Deck::shuffled(rng);
        for card in Hand::add(Hand::from(hole), board) {
            deck.remove(card);
        }
        let runout = deck.deal(5usize.saturating_sub(board.size()))?;
        let villain = deck.hole()?;
        let public = Hand::add(board, Hand::from(runout));
        let hero = Evaluator::from(Hand::add(Hand::from(hole), public)).find_ranking();
        let them = Evaluator::from(Hand::add(Hand::from(villain), public)).find_ranking();
        Ok(hero > them)
    }
}
