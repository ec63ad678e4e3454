//! Heads-up equity estimation and betting advice.
//!
//! Three layers, leaves first:
//!
//! - [`cards`]: cards, decks and the hand-category evaluator
//! - [`equity`]: Monte Carlo win-rate estimation blended with a static strength table
//! - [`advisor`]: threshold policy turning a win rate into fold / call / raise
pub mod advisor;
pub mod cards;
pub mod equity;
pub mod error;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, bets and stacks in whole chips.
pub type Chips = u32;
/// Win rates, thresholds and blend weights.
pub type Probability = f32;
/// Realized results and expected values.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EQUITY ESTIMATION
// final = (prior · PRIOR_WEIGHT + sampled · (1 - PRIOR_WEIGHT)) · positional
// ============================================================================
/// Monte Carlo trials per estimate.
pub const TRIALS: usize = 1000;
/// Weight of the static table in the blend. The sampled rate gets the rest.
pub const PRIOR_WEIGHT: Probability = 0.6;
/// Base rate for hands missing from the strength table.
pub const PRIOR_DEFAULT: Probability = 0.5;
/// Positional discount per seat of distance from the first to act.
pub const POSITION_STEP: Probability = 0.05;

// ============================================================================
// DECISION THRESHOLDS
// Late seats (BTN, CO, HJ) open wider than early ones.
// ============================================================================
/// Raise threshold in late position.
pub const RAISE_LATE: Probability = 0.48;
/// Call threshold in late position.
pub const CALL_LATE: Probability = 0.28;
/// Raise threshold everywhere else.
pub const RAISE_EARLY: Probability = 0.58;
/// Call threshold everywhere else.
pub const CALL_EARLY: Probability = 0.32;
/// Bet-to-pot ratio above which a bet counts as large.
pub const BIG_BET_RATIO: Probability = 0.7;
/// Threshold inflation when facing a large bet.
pub const BIG_BET_INFLATION: Probability = 1.1;

// ============================================================================
// BLUFFING
// A fold is turned into a call or raise with street-dependent probability.
// ============================================================================
/// Default deviation rate.
pub const BLUFF_BASE: Probability = 0.08;
/// Deviation rate in small pre-flop pots.
pub const BLUFF_PREFLOP: Probability = 0.15;
/// Deviation rate on the river.
pub const BLUFF_RIVER: Probability = 0.05;
/// Pots below this many chips count as small.
pub const SMALL_POT: Chips = 100;
/// Share of deviations that call rather than raise.
pub const BLUFF_CALLS: Probability = 0.8;

// ============================================================================
// LEARNING
// ============================================================================
/// Records kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 1000;
/// Win-probability buckets in the learned policy.
pub const BUCKETS: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
