use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;
use wavefront::{Graph, Mode, TraversalConfig};

/// Builds the same undirected graph in petgraph, as an independent oracle.
fn oracle(n: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
    let mut g = UnGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

fn oracle_distances(g: &UnGraph<(), ()>, start: usize) -> HashMap<usize, usize> {
    petgraph::algo::dijkstra(g, NodeIndex::new(start), None, |_| 1usize)
        .into_iter()
        .map(|(k, d)| (k.index(), d))
        .collect()
}

fn graph_and_start() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize, usize)> {
    (1usize..80).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..n * 3),
            0..n,
            1usize..9,
        )
    })
}

proptest! {
    #[test]
    fn parallel_bfs_levels_equal_serial_and_oracle((n, edges, start, workers) in graph_and_start()) {
        let g = Graph::build(n, &edges).unwrap();
        let serial = g.bfs(start, &TraversalConfig::serial()).unwrap();
        let parallel = g.bfs(start, &TraversalConfig::parallel(workers)).unwrap();

        prop_assert_eq!(parallel.sorted_levels(), serial.sorted_levels());

        let expected = oracle_distances(&oracle(n, &edges), start);
        let got: HashMap<usize, usize> = parallel
            .distances()
            .into_iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn parallel_dfs_set_equals_serial_and_oracle((n, edges, start, workers) in graph_and_start()) {
        let g = Graph::build(n, &edges).unwrap();
        let serial = g.dfs(start, &TraversalConfig::serial()).unwrap();
        let parallel = g.dfs(start, &TraversalConfig::parallel(workers)).unwrap();

        prop_assert_eq!(parallel.visited_mask(), serial.visited_mask());

        let og = oracle(n, &edges);
        let mut dfs = petgraph::visit::Dfs::new(&og, NodeIndex::new(start));
        let mut expected = vec![false; n];
        while let Some(nx) = dfs.next(&og) {
            expected[nx.index()] = true;
        }
        prop_assert_eq!(parallel.visited_mask(), expected);
    }

    #[test]
    fn every_vertex_is_claimed_at_most_once((n, edges, start, workers) in graph_and_start()) {
        let g = Graph::build(n, &edges).unwrap();

        let mut seen = vec![0u32; n];
        for v in g.dfs(start, &TraversalConfig::parallel(workers)).unwrap().order() {
            seen[*v] += 1;
        }
        prop_assert!(seen.iter().all(|&c| c <= 1));

        let mut seen = vec![0u32; n];
        for v in g.bfs(start, &TraversalConfig::parallel(workers)).unwrap().visited() {
            seen[v] += 1;
        }
        prop_assert!(seen.iter().all(|&c| c <= 1));
    }

    #[test]
    fn bfs_and_dfs_counts_agree((n, edges, start, workers) in graph_and_start()) {
        let g = Graph::build(n, &edges).unwrap();
        let bfs = g.traverse_bfs(start, Mode::Parallel, workers).unwrap();
        let dfs = g.traverse_dfs(start, Mode::Parallel, workers).unwrap();
        prop_assert_eq!(bfs, dfs);
        prop_assert!(bfs >= 1 && bfs <= n);
    }
}
