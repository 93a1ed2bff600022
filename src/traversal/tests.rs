//! Tests for serial and parallel traversals.

use super::*;
use crate::graph::generate::random_graph;
use crate::TraversalError;

fn path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    Graph::build(n, &edges).unwrap()
}

fn all_configs() -> Vec<TraversalConfig> {
    let mut cfgs = vec![TraversalConfig::serial()];
    cfgs.extend([1, 2, 3, 4, 8].map(TraversalConfig::parallel));
    cfgs
}

fn assert_no_duplicates(vertices: impl Iterator<Item = VertexId>, n: usize) {
    let mut seen = vec![false; n];
    for v in vertices {
        assert!(!seen[v], "vertex {v} visited twice");
        seen[v] = true;
    }
}

#[test]
fn test_three_of_four_reachable_in_every_mode() {
    // Vertex 3 is isolated.
    let g = Graph::build(4, &[(0, 1), (1, 2)]).unwrap();
    for workers in [1, 2, 4] {
        for mode in [Mode::Serial, Mode::Parallel] {
            assert_eq!(g.traverse_bfs(0, mode, workers).unwrap(), 3);
            assert_eq!(g.traverse_dfs(0, mode, workers).unwrap(), 3);
        }
    }
}

#[test]
fn test_single_vertex_graph() {
    let g = Graph::build(1, &[]).unwrap();
    for cfg in all_configs() {
        assert_eq!(g.bfs(0, &cfg).unwrap().visited_count(), 1);
        assert_eq!(g.dfs(0, &cfg).unwrap().visited_count(), 1);
    }
}

#[test]
fn test_isolated_start_counts_itself() {
    let g = Graph::build(5, &[(1, 2), (2, 3), (3, 4)]).unwrap();
    for cfg in all_configs() {
        let bfs = g.bfs(0, &cfg).unwrap();
        assert_eq!(bfs.levels(), &[vec![0]]);
        assert_eq!(g.dfs(0, &cfg).unwrap().order(), &[0]);
    }
}

#[test]
fn test_disconnected_graph_stays_in_component() {
    // Two triangles: {0,1,2} and {3,4,5}.
    let g = Graph::build(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
    for cfg in all_configs() {
        let bfs = g.bfs(4, &cfg).unwrap();
        let mut reached: Vec<_> = bfs.visited().collect();
        reached.sort_unstable();
        assert_eq!(reached, vec![3, 4, 5]);

        let mask = g.dfs(4, &cfg).unwrap().visited_mask();
        assert_eq!(mask, vec![false, false, false, true, true, true]);
    }
}

#[test]
fn test_path_levels_are_distances() {
    let g = path(50);
    for cfg in all_configs() {
        let bfs = g.bfs(0, &cfg).unwrap();
        assert_eq!(bfs.depth(), 50);
        for (k, level) in bfs.levels().iter().enumerate() {
            assert_eq!(level, &vec![k]);
        }
        let d = bfs.distances();
        assert_eq!(d[49], Some(49));
        assert_eq!(bfs.level(10), Some(&[10][..]));
        assert_eq!(bfs.level(50), None);
    }
}

#[test]
fn test_star_with_more_workers_than_leaves() {
    let edges: Vec<_> = (1..6).map(|i| (0, i)).collect();
    let g = Graph::build(6, &edges).unwrap();
    let bfs = g.bfs(0, &TraversalConfig::parallel(16)).unwrap();
    assert_eq!(bfs.depth(), 2);
    assert_eq!(bfs.sorted_levels()[1], vec![1, 2, 3, 4, 5]);
    assert_eq!(g.traverse_dfs(3, Mode::Parallel, 16).unwrap(), 6);
}

#[test]
fn test_parallel_bfs_levels_match_serial_on_random_graphs() {
    for seed in 0..5 {
        let g = random_graph(2_000, 2, seed).unwrap();
        let serial = g.bfs(0, &TraversalConfig::serial()).unwrap();
        for workers in [1, 2, 4, 7] {
            let par = g.bfs(0, &TraversalConfig::parallel(workers)).unwrap();
            assert_eq!(par.sorted_levels(), serial.sorted_levels(), "seed={seed} workers={workers}");
            assert_eq!(par.distances(), serial.distances());
            assert_no_duplicates(par.visited(), g.vertex_count());
        }
    }
}

#[test]
fn test_parallel_dfs_set_matches_serial_on_random_graphs() {
    for seed in 0..5 {
        let g = random_graph(2_000, 2, seed).unwrap();
        let serial = g.dfs(0, &TraversalConfig::serial()).unwrap();
        for workers in [1, 2, 4, 7] {
            let par = g.dfs(0, &TraversalConfig::parallel(workers)).unwrap();
            assert_eq!(par.visited_mask(), serial.visited_mask(), "seed={seed} workers={workers}");
            assert_no_duplicates(par.order().iter().copied(), g.vertex_count());
            assert_eq!(par.expanded_per_worker().iter().sum::<usize>(), par.visited_count());
        }
    }
}

#[test]
fn test_single_worker_dfs_reproduces_serial_order() {
    let g = random_graph(500, 3, 11).unwrap();
    let serial = g.dfs(0, &TraversalConfig::serial()).unwrap();
    let par = g.dfs(0, &TraversalConfig::parallel(1)).unwrap();
    assert_eq!(par.order(), serial.order());
}

#[test]
fn test_serial_dfs_preorder_on_small_graph() {
    // 0 - 1, 0 - 2, 1 - 3, 2 - 3
    let g = Graph::build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let order = g.dfs(0, &TraversalConfig::serial()).unwrap();
    // 1 and 2 are claimed while expanding 0; 3 is claimed while expanding 1.
    assert_eq!(order.order(), &[0, 1, 3, 2]);
}

#[test]
fn test_repeated_calls_are_independent() {
    let g = random_graph(1_000, 3, 5).unwrap();
    for cfg in all_configs() {
        let a = g.traverse_bfs(0, cfg.mode, cfg.workers).unwrap();
        let b = g.traverse_bfs(0, cfg.mode, cfg.workers).unwrap();
        assert_eq!(a, b);
        let c = g.traverse_dfs(0, cfg.mode, cfg.workers).unwrap();
        let d = g.traverse_dfs(0, cfg.mode, cfg.workers).unwrap();
        assert_eq!(c, d);
        assert_eq!(a, c);
    }
}

#[test]
fn test_concurrent_traversals_of_one_graph() {
    let g = random_graph(3_000, 3, 9).unwrap();
    let expected = g.traverse_bfs(0, Mode::Serial, 1).unwrap();
    std::thread::scope(|s| {
        for workers in 1..=4 {
            let g = &g;
            s.spawn(move || {
                assert_eq!(g.traverse_bfs(0, Mode::Parallel, workers).unwrap(), expected);
                assert_eq!(g.traverse_dfs(0, Mode::Parallel, workers).unwrap(), expected);
            });
        }
    });
}

#[test]
fn test_invalid_start_is_rejected() {
    let g = path(3);
    for mode in [Mode::Serial, Mode::Parallel] {
        assert_eq!(
            g.traverse_bfs(3, mode, 2),
            Err(TraversalError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert!(matches!(
            g.traverse_dfs(100, mode, 2),
            Err(TraversalError::InvalidVertex { vertex: 100, .. })
        ));
    }
}

#[test]
fn test_zero_workers_is_rejected() {
    let g = path(3);
    assert!(matches!(
        g.traverse_bfs(0, Mode::Parallel, 0),
        Err(TraversalError::InvalidInput(_))
    ));
    assert!(matches!(
        g.traverse_dfs(0, Mode::Serial, 0),
        Err(TraversalError::InvalidInput(_))
    ));
}

#[test]
fn test_self_loops_and_parallel_edges() {
    let g = Graph::build(3, &[(0, 0), (0, 1), (0, 1), (1, 1)]).unwrap();
    for cfg in all_configs() {
        assert_eq!(g.bfs(0, &cfg).unwrap().visited_count(), 2);
        assert_eq!(g.dfs(0, &cfg).unwrap().visited_count(), 2);
    }
}

#[test]
fn test_effective_workers_bounds() {
    assert_eq!(effective_workers(8, 3), 3);
    assert_eq!(effective_workers(2, 100), 2);
    assert_eq!(effective_workers(4, 1), 1);
}
