//! Graph traversal algorithms
//!
//! Depth-first and breadth-first walks that report each newly discovered node
//! to a visitor, in discovery order.

use super::common::GraphView;
use std::collections::VecDeque;

/// Depth-First Search from `start`.
///
/// Neighbors are explored in adjacency insertion order, producing the same
/// order as the recursive formulation. An explicit stack of
/// `(node, next adjacency position)` frames keeps deep graphs off the call stack.
///
/// Returns the number of visited nodes (0 if `start` is out of range).
pub fn dfs<F>(view: &GraphView, start: usize, mut visit: F) -> usize
where
    F: FnMut(usize),
{
    if start >= view.node_count {
        return 0;
    }

    let mut visited = vec![false; view.node_count];
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;
    visit(start);
    let mut count = 1;

    while let Some(frame) = stack.last_mut() {
        let (node, pos) = *frame;
        let successors = view.successors(node);
        if pos == successors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let next = successors[pos];
        if !visited[next] {
            visited[next] = true;
            visit(next);
            count += 1;
            stack.push((next, 0));
        }
    }

    count
}

/// Breadth-First Search from `start`.
///
/// Each dequeued node enumerates its own successors.
/// Returns the number of visited nodes (0 if `start` is out of range).
pub fn bfs<F>(view: &GraphView, start: usize, mut visit: F) -> usize
where
    F: FnMut(usize),
{
    if start >= view.node_count {
        return 0;
    }

    let mut visited = vec![false; view.node_count];
    let mut queue = VecDeque::new();

    visited[start] = true;
    visit(start);
    queue.push_back(start);
    let mut count = 1;

    while let Some(current) = queue.pop_front() {
        for &next in view.successors(current) {
            if !visited[next] {
                visited[next] = true;
                visit(next);
                count += 1;
                queue.push_back(next);
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 (1), 0 -> 7 (3), 1 -> 2, 2 -> 3, 3 -> 4, 4 -> 5, 5 -> 6, 7 -> 6
    fn chain_with_shortcut() -> GraphView {
        GraphView::from_adjacency_list(
            vec![
                vec![(1, 1), (7, 3)],
                vec![(2, 1)],
                vec![(3, 1)],
                vec![(4, 1)],
                vec![(5, 1)],
                vec![(6, 2)],
                vec![],
                vec![(6, 1)],
            ],
        )
    }

    fn collect(f: impl Fn(&GraphView, usize, &mut dyn FnMut(usize)) -> usize, view: &GraphView, start: usize) -> Vec<usize> {
        let mut order = Vec::new();
        f(view, start, &mut |idx| order.push(idx));
        order
    }

    #[test]
    fn test_dfs_follows_insertion_order() {
        let view = chain_with_shortcut();
        let order = collect(|v, s, f| dfs(v, s, f), &view, 0);
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6, 7]);

        let order = collect(|v, s, f| dfs(v, s, f), &view, 1);
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_bfs_expands_dequeued_node() {
        let view = chain_with_shortcut();
        let order = collect(|v, s, f| bfs(v, s, f), &view, 0);
        assert_eq!(order, vec![0, 1, 7, 2, 6, 3, 4, 5]);
    }

    #[test]
    fn test_visited_state_is_per_call() {
        let view = chain_with_shortcut();
        assert_eq!(dfs(&view, 0, |_| {}), 8);
        // A second walk from another node sees a fresh visited set.
        assert_eq!(dfs(&view, 7, |_| {}), 2);
        assert_eq!(bfs(&view, 7, |_| {}), 2);
    }

    #[test]
    fn test_out_of_range_start() {
        let view = chain_with_shortcut();
        let mut calls = 0;
        assert_eq!(dfs(&view, 42, |_| calls += 1), 0);
        assert_eq!(bfs(&view, 42, |_| calls += 1), 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_cycle_visits_each_node_once() {
        // 0 <-> 1 <-> 2 <-> 0
        let view = GraphView::from_adjacency_list(vec![
            vec![(1, 1), (2, 1)],
            vec![(0, 1), (2, 1)],
            vec![(0, 1), (1, 1)],
        ]);
        let order = collect(|v, s, f| dfs(v, s, f), &view, 2);
        assert_eq!(order, vec![2, 0, 1]);
        let order = collect(|v, s, f| bfs(v, s, f), &view, 1);
        assert_eq!(order, vec![1, 0, 2]);
    }
}
