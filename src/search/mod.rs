//! Instrumented state-space search from a start state to a [`Goal`].
//!
//! Both strategies share the same shape: the goal test happens when a node is
//! popped, before it is counted, so a start equal to the goal reports zero
//! expanded nodes. States already expanded are discarded on pop (duplicates
//! may sit in the frontier). Each call owns its frontier, visited set and node
//! arena, and drops them on return.

mod astar;
mod bfs;

use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::goal::Goal;
use crate::puzzle::{moves_of, Move, PuzzleState};

/// Which frontier discipline to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A* ordered by `g + manhattan`.
    Informed,
    /// Breadth-first.
    Uninformed,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Informed, Strategy::Uninformed];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Informed => write!(f, "informed"),
            Strategy::Uninformed => write!(f, "uninformed"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "informed" | "astar" | "a*" => Ok(Strategy::Informed),
            "uninformed" | "bfs" => Ok(Strategy::Uninformed),
            _ => Err(Error::UnknownStrategy {
                input: s.to_string(),
            }),
        }
    }
}

/// How a search invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The goal was popped from the frontier.
    Solved,
    /// The frontier emptied first. Only reachable for unsolvable input.
    Exhausted,
    /// The progress hook asked to stop.
    Interrupted,
}

/// Snapshot handed to the progress hook after every expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub expanded_nodes: usize,
    pub frontier_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub expanded_nodes: usize,
    /// Start to goal inclusive; `None` unless solved.
    pub path: Option<Vec<PuzzleState>>,
    pub status: SearchStatus,
}

impl SearchResult {
    fn solved(expanded_nodes: usize, path: Vec<PuzzleState>) -> Self {
        Self {
            expanded_nodes,
            path: Some(path),
            status: SearchStatus::Solved,
        }
    }

    fn unsolved(expanded_nodes: usize, status: SearchStatus) -> Self {
        Self {
            expanded_nodes,
            path: None,
            status,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Number of moves in the path, or 0 when there is none.
    pub fn solution_length(&self) -> usize {
        self.path.as_ref().map_or(0, |path| path.len().saturating_sub(1))
    }

    /// The path expressed as blank moves.
    pub fn moves(&self) -> Option<Vec<Move>> {
        self.path.as_deref().and_then(moves_of)
    }
}

/// A discovered state and the node it was reached from.
#[derive(Debug, Clone, Copy)]
struct Node {
    state: PuzzleState,
    parent: Option<usize>,
    depth: u32,
}

/// Append-only node storage; the path is rebuilt once from parent indices.
#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn push(&mut self, state: PuzzleState, parent: Option<usize>, depth: u32) -> usize {
        self.nodes.push(Node {
            state,
            parent,
            depth,
        });
        self.nodes.len() - 1
    }

    fn get(&self, index: usize) -> Node {
        self.nodes[index]
    }

    fn path_to(&self, index: usize) -> Vec<PuzzleState> {
        let mut path = Vec::with_capacity(self.nodes[index].depth as usize + 1);
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            path.push(self.nodes[i].state);
            cursor = self.nodes[i].parent;
        }
        path.reverse();
        path
    }
}

fn run_to_completion(_: &Progress) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

/// A* from `start` to `goal`. Returns a minimum-length path.
pub fn solve_informed(start: PuzzleState, goal: &Goal) -> SearchResult {
    astar::search(start, goal, run_to_completion)
}

/// Breadth-first search from `start` to `goal`. Returns a minimum-length path.
pub fn solve_uninformed(start: PuzzleState, goal: &Goal) -> SearchResult {
    bfs::search(start, goal, run_to_completion)
}

pub fn solve(strategy: Strategy, start: PuzzleState, goal: &Goal) -> SearchResult {
    solve_with(strategy, start, goal, run_to_completion)
}

/// Runs `strategy`, polling `hook` after each expansion. Returning
/// `ControlFlow::Break` from the hook ends the search as
/// [`SearchStatus::Interrupted`].
pub fn solve_with<F>(strategy: Strategy, start: PuzzleState, goal: &Goal, hook: F) -> SearchResult
where
    F: FnMut(&Progress) -> ControlFlow<()>,
{
    match strategy {
        Strategy::Informed => astar::search(start, goal, hook),
        Strategy::Uninformed => bfs::search(start, goal, hook),
    }
}

/// Like [`solve`], but rejects starts that cannot reach `goal` instead of
/// exhausting the state space.
pub fn solve_checked(strategy: Strategy, start: PuzzleState, goal: &Goal) -> Result<SearchResult> {
    if !goal.is_solvable(&start) {
        return Err(Error::Unsolvable { state: start });
    }
    Ok(solve(strategy, start, goal))
}
