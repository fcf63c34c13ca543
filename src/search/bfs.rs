use std::collections::VecDeque;
use std::ops::ControlFlow;

use log::debug;
use rustc_hash::FxHashSet;

use super::{Arena, Progress, SearchResult, SearchStatus};
use crate::goal::Goal;
use crate::puzzle::PuzzleState;

pub(super) fn search<F>(start: PuzzleState, goal: &Goal, mut hook: F) -> SearchResult
where
    F: FnMut(&Progress) -> ControlFlow<()>,
{
    debug!("uninformed search from\n{}", start);

    let mut arena = Arena::default();
    let mut frontier = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut expanded = 0;

    frontier.push_back(arena.push(start, None, 0));

    while let Some(index) = frontier.pop_front() {
        let current = arena.get(index);

        if goal.is_goal(&current.state) {
            debug!(
                "uninformed search solved in {} moves, {} nodes expanded",
                current.depth, expanded
            );
            return SearchResult::solved(expanded, arena.path_to(index));
        }

        if !visited.insert(current.state) {
            continue;
        }
        expanded += 1;

        for (_, next) in current.state.successors() {
            if !visited.contains(&next) {
                frontier.push_back(arena.push(next, Some(index), current.depth + 1));
            }
        }

        let progress = Progress {
            expanded_nodes: expanded,
            frontier_len: frontier.len(),
        };
        if hook(&progress).is_break() {
            debug!("uninformed search interrupted after {} nodes", expanded);
            return SearchResult::unsolved(expanded, SearchStatus::Interrupted);
        }
    }

    debug!("uninformed search exhausted after {} nodes", expanded);
    SearchResult::unsolved(expanded, SearchStatus::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::solve_uninformed;

    fn state(tiles: [u8; 9]) -> PuzzleState {
        PuzzleState::from_tiles(&tiles).unwrap()
    }

    #[test]
    fn start_at_goal_expands_nothing() {
        let goal = Goal::cyclic();
        let result = solve_uninformed(*goal.state(), &goal);
        assert_eq!(result.expanded_nodes, 0);
        assert_eq!(result.solution_length(), 0);
        assert_eq!(result.path, Some(vec![*goal.state()]));
    }

    #[test]
    fn expands_level_by_level() {
        let goal = Goal::standard();
        // blank two cells left of its goal corner
        let start = state([1, 2, 3, 4, 5, 6, 0, 7, 8]);
        let result = solve_uninformed(start, &goal);
        assert_eq!(result.solution_length(), 2);
        assert_eq!(
            result.path,
            Some(vec![
                start,
                state([1, 2, 3, 4, 5, 6, 7, 0, 8]),
                *goal.state()
            ])
        );
        // start, its 2 children, then the 3 depth-2 states queued before the goal
        assert_eq!(result.expanded_nodes, 6);
    }

    #[test]
    fn stops_when_hook_breaks() {
        let goal = Goal::standard();
        let start = state([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let mut polls = 0;
        let result = super::search(start, &goal, |progress| {
            polls += 1;
            assert_eq!(progress.expanded_nodes, polls);
            if progress.expanded_nodes >= 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(result.status, SearchStatus::Interrupted);
        assert_eq!(result.expanded_nodes, 3);
        assert!(result.path.is_none());
        assert_eq!(polls, 3);
    }

    #[test]
    fn unsolvable_start_exhausts_reachable_half() {
        let goal = Goal::standard();
        let swapped = state([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        let result = solve_uninformed(swapped, &goal);
        assert_eq!(result.status, SearchStatus::Exhausted);
        assert_eq!(result.expanded_nodes, 181_440);
        assert!(result.path.is_none());
    }
}
