mod render;

use std::io;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use eight_puzzle::generator::random_start_with;
use eight_puzzle::{solve_with, Error, Goal, PuzzleState, SearchResult, Strategy};

#[derive(Parser, Debug)]
#[command(
    name = "eight-puzzle",
    version,
    about = "Solve the 8-puzzle with informed (A*) and uninformed (BFS) search"
)]
struct Cli {
    /// Goal layout: a preset name (standard, cyclic) or nine tiles
    #[arg(short, long, default_value = "standard")]
    goal: Goal,

    /// Goal layout as nine tiles, e.g. "1 2 3 8 0 4 7 6 5"
    #[arg(long, value_name = "TILES", value_parser = Goal::parse_layout, conflicts_with = "goal")]
    goal_tiles: Option<Goal>,

    /// Start layout as nine tiles; a random solvable start is drawn when absent
    #[arg(short, long)]
    start: Option<PuzzleState>,

    /// Strategy to run
    #[arg(long, value_enum, default_value_t = StrategyChoice::Both)]
    strategy: StrategyChoice,

    /// Seed for the random start
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a search after this many milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Replay each solution with this delay between moves instead of listing it
    #[arg(long, value_name = "MS")]
    animate_ms: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyChoice {
    Informed,
    Uninformed,
    /// Run both and compare
    Both,
}

impl StrategyChoice {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Informed => vec![Strategy::Informed],
            StrategyChoice::Uninformed => vec![Strategy::Uninformed],
            StrategyChoice::Both => Strategy::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let goal = cli.goal_tiles.unwrap_or(cli.goal);
    let start = match cli.start {
        Some(start) if !goal.is_solvable(&start) => {
            return Err(Error::Unsolvable { state: start }).context("cannot search from --start");
        }
        Some(start) => start,
        None => match cli.seed {
            Some(seed) => random_start_with(&goal, &mut StdRng::seed_from_u64(seed)),
            None => eight_puzzle::generate_start(&goal),
        },
    };

    let mut out = io::stdout();
    println!("Start:");
    render::draw_board(&mut out, &start, &goal)?;
    println!("\nGoal:");
    render::draw_board(&mut out, goal.state(), &goal)?;
    println!();

    let strategies = cli.strategy.strategies();
    let time_limit = cli.time_limit_ms.map(Duration::from_millis);

    let mut runs = Vec::new();
    for strategy in strategies {
        let (result, elapsed) = run_search(strategy, start, &goal, time_limit);
        info!(
            "{} search: {:?} with {} nodes in {:.2?}",
            strategy, result.status, result.expanded_nodes, elapsed
        );

        if let Some(path) = &result.path {
            match cli.animate_ms {
                Some(ms) if ms > 0 => render::animate_path(
                    &mut out,
                    &format!("{} search", strategy),
                    path,
                    &goal,
                    Duration::from_millis(ms),
                )?,
                _ => render::print_path(&mut out, path, &goal)?,
            }
        }
        render::print_stats(&mut out, strategy, &result, elapsed)?;
        runs.push((strategy, result));
    }

    if let [(_, informed), (_, uninformed)] = runs.as_slice() {
        if informed.is_solved() && uninformed.is_solved() {
            println!(
                "A* expanded {} of the {} nodes BFS needed for the same {}-move solution",
                informed.expanded_nodes,
                uninformed.expanded_nodes,
                informed.solution_length()
            );
        }
    }

    Ok(())
}

/// Runs one search, measuring wall-clock time and enforcing the optional
/// budget through the progress hook.
fn run_search(
    strategy: Strategy,
    start: PuzzleState,
    goal: &Goal,
    time_limit: Option<Duration>,
) -> (SearchResult, Duration) {
    let started = Instant::now();
    let result = solve_with(strategy, start, goal, |_| match time_limit {
        Some(limit) if started.elapsed() >= limit => ControlFlow::Break(()),
        _ => ControlFlow::Continue(()),
    });
    (result, started.elapsed())
}
