//! Single-threaded reference traversals: a plain queue or stack and a
//! `Vec<bool>` visited array. Used for correctness comparison and as the
//! timing baseline.

use std::collections::VecDeque;

use super::{BfsOutcome, DfsOutcome};
use crate::graph::Graph;
use crate::VertexId;

pub(crate) fn bfs(graph: &Graph, start: VertexId) -> BfsOutcome {
    let mut visited = vec![false; graph.vertex_count()];
    let mut levels: Vec<Vec<VertexId>> = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back((start, 0usize));

    // Distances leave the queue in non-decreasing order, so `depth` is at most
    // one past the last level opened.
    while let Some((u, depth)) = queue.pop_front() {
        if depth == levels.len() {
            levels.push(Vec::new());
        }
        levels[depth].push(u);
        for &v in graph.adjacent(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back((v, depth + 1));
            }
        }
    }

    BfsOutcome::new(graph.vertex_count(), levels)
}

pub(crate) fn dfs(graph: &Graph, start: VertexId) -> DfsOutcome {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(u) = stack.pop() {
        order.push(u);
        // Reverse push so the first listed neighbour is expanded first.
        for &v in graph.adjacent(u).iter().rev() {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    let expanded = order.len();
    DfsOutcome::new(graph.vertex_count(), order, vec![expanded])
}
