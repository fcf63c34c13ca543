use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use log::debug;
use rustc_hash::FxHashSet;

use super::{Arena, Progress, SearchResult, SearchStatus};
use crate::goal::Goal;
use crate::puzzle::PuzzleState;

/// Frontier entry. Field order is the heap order: lowest `f` first, then
/// the entry pushed earliest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: u32,
    sequence: u64,
    node: usize,
}

pub(super) fn search<F>(start: PuzzleState, goal: &Goal, mut hook: F) -> SearchResult
where
    F: FnMut(&Progress) -> ControlFlow<()>,
{
    debug!("informed search from\n{}", start);

    let mut arena = Arena::default();
    let mut frontier = BinaryHeap::new();
    let mut visited = FxHashSet::default();
    let mut expanded = 0;
    let mut sequence = 0u64;

    let root = arena.push(start, None, 0);
    frontier.push(Reverse(Entry {
        f: goal.manhattan(&start),
        sequence,
        node: root,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = arena.get(entry.node);

        if goal.is_goal(&current.state) {
            debug!(
                "informed search solved in {} moves, {} nodes expanded",
                current.depth, expanded
            );
            return SearchResult::solved(expanded, arena.path_to(entry.node));
        }

        if !visited.insert(current.state) {
            continue;
        }
        expanded += 1;

        let g = current.depth + 1;
        for (_, next) in current.state.successors() {
            if visited.contains(&next) {
                continue;
            }
            sequence += 1;
            let node = arena.push(next, Some(entry.node), g);
            frontier.push(Reverse(Entry {
                f: g + goal.manhattan(&next),
                sequence,
                node,
            }));
        }

        let progress = Progress {
            expanded_nodes: expanded,
            frontier_len: frontier.len(),
        };
        if hook(&progress).is_break() {
            debug!("informed search interrupted after {} nodes", expanded);
            return SearchResult::unsolved(expanded, SearchStatus::Interrupted);
        }
    }

    debug!("informed search exhausted after {} nodes", expanded);
    SearchResult::unsolved(expanded, SearchStatus::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::solve_informed;

    fn state(tiles: [u8; 9]) -> PuzzleState {
        PuzzleState::from_tiles(&tiles).unwrap()
    }

    #[test]
    fn entries_order_by_f_then_insertion() {
        let mut heap = BinaryHeap::new();
        for (f, sequence, node) in [(5, 2, 0), (4, 3, 9), (5, 1, 7)] {
            heap.push(Reverse(Entry { f, sequence, node }));
        }

        let order: Vec<u64> =
            std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.sequence)).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn start_at_goal_expands_nothing() {
        let goal = Goal::standard();
        let result = solve_informed(*goal.state(), &goal);
        assert_eq!(result.status, SearchStatus::Solved);
        assert_eq!(result.expanded_nodes, 0);
        assert_eq!(result.path, Some(vec![*goal.state()]));
    }

    #[test]
    fn one_move_from_goal() {
        let goal = Goal::standard();
        let start = state([1, 2, 3, 4, 5, 0, 7, 8, 6]);
        let result = solve_informed(start, &goal);
        assert_eq!(result.solution_length(), 1);
        assert_eq!(result.expanded_nodes, 1);
    }

    #[test]
    fn stops_when_hook_breaks() {
        let goal = Goal::standard();
        // 31 moves, the hardest distance for this goal
        let start = state([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let result = super::search(start, &goal, |progress| {
            if progress.expanded_nodes >= 10 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(result.status, SearchStatus::Interrupted);
        assert_eq!(result.expanded_nodes, 10);
        assert!(result.path.is_none());
    }
}
