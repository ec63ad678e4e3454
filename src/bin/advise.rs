//! Advise Binary
//!
//! One-shot equity estimate and betting advice for a single spot.
//!
//! advise --hole "As Kd" --board "2c 7h 9s" --position BTN --pot 120 --bet 40

use acepoker::Chips;
use acepoker::advisor::Action;
use acepoker::advisor::Advisor;
use acepoker::advisor::Bluff;
use acepoker::advisor::Spot;
use acepoker::advisor::pot_odds;
use acepoker::cards::Card;
use acepoker::cards::Street;
use acepoker::equity::Estimator;
use acepoker::equity::Position;
use acepoker::equity::Settings;
use acepoker::equity::Table;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Estimate heads-up equity and suggest an action", long_about = None)]
struct Args {
    /// two hole cards, e.g. "As Kd"
    #[arg(long, required = true)]
    hole: String,
    /// zero, three, four or five community cards
    #[arg(long, default_value = "")]
    board: String,
    #[arg(long, default_value = "BTN")]
    position: String,
    #[arg(long, default_value_t = 100)]
    pot: Chips,
    #[arg(long, default_value_t = 0)]
    bet: Chips,
    #[arg(long, default_value_t = 1000)]
    stack: Chips,
    #[arg(long, default_value_t = acepoker::TRIALS)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// strength table JSON; the built-in table is used when absent or unreadable
    #[arg(long)]
    table: Option<PathBuf>,
    /// rayon worker threads, defaults to one per cpu
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long)]
    no_bluff: bool,
}

fn main() -> anyhow::Result<()> {
    acepoker::log();
    let args = Args::parse();
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or_else(num_cpus::get))
        .build_global()?;

    let hole = Card::parse(&args.hole)?;
    let board = Card::parse(&args.board)?;
    let position = args.position.parse::<Position>()?;
    let street = Street::try_from(board.len())?;
    let spot = Spot {
        street,
        position,
        pot: args.pot,
        bet: args.bet,
        stack: args.stack,
    };

    let table = Arc::new(Table::resolve(args.table.as_deref()));
    let settings = Settings {
        trials: args.trials,
        seed: args.seed,
        ..Settings::default()
    };
    let mut advisor = Advisor::new(Estimator::new(table, settings));
    if let Some(seed) = args.seed {
        advisor = advisor.with_seed(seed);
    }
    if args.no_bluff {
        advisor = advisor.with_bluff(Bluff::disabled());
    }

    let decision = advisor.advise(&hole, &board, &spot);
    let action = match decision.action {
        Action::Fold => "FOLD".red(),
        Action::Call => format!("CALL {}", decision.amount).yellow(),
        Action::Raise => format!("RAISE {}", decision.amount).green(),
    };
    println!("{:<10} {}", "street", street);
    println!("{:<10} {:.1}%", "win rate", decision.probability * 100.0);
    println!("{:<10} {:.2}", "pot odds", pot_odds(args.pot, args.bet));
    println!("{:<10} {:+.1}", "ev", decision.ev);
    println!(
        "{:<10} {}{}",
        "action",
        action.bold(),
        if decision.bluffed { " (bluff)".dimmed() } else { "".normal() }
    );
    Ok(())
}
