//! Fixtures and brute-force oracles shared by the unit tests.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    collections::VecDeque,
};

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// System allocator that keeps per-thread counters of live and peak heap bytes
pub struct TrackingAllocator;

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static PEAK_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn track_allocation(delta: isize) {
    // counters are gone while the thread is torn down
    let _ = LIVE_BYTES.try_with(|live| {
        let now = live.get() + delta;
        live.set(now);
        let _ = PEAK_BYTES.try_with(|peak| peak.set(peak.get().max(now)));
    });
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            track_allocation(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        track_allocation(-(layout.size() as isize));
    }
}

/// Runs `f` and returns its result with the largest number of heap bytes
/// the current thread held on top of what it held before the call
pub fn peak_heap_of<T, F>(f: F) -> (T, usize)
where
    F: FnOnce() -> T,
{
    let before = LIVE_BYTES.with(Cell::get);
    PEAK_BYTES.with(|peak| peak.set(before));
    let result = f();
    let peak = PEAK_BYTES.with(Cell::get);
    (result, (peak - before).max(0) as usize)
}

/// Creates a graph with at most `m_ub` random edges for nodes `0..n`
pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> AdjMatrix {
    let mut graph = AdjMatrix::new(n);
    if n < 2 {
        return graph;
    }

    for _ in 0..m_ub {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.try_add_edge(u, v);
        }
    }
    graph
}

/// Counts connected components with a plain BFS
pub fn count_components(graph: &AdjMatrix) -> NumNodes {
    let mut seen = vec![false; graph.len()];
    let mut count = 0;

    for s in graph.vertices() {
        if seen[s as usize] {
            continue;
        }
        count += 1;
        seen[s as usize] = true;

        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors_of(u) {
                if !seen[v as usize] {
                    seen[v as usize] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    count
}

/// Returns *true* if `path` is a walk along edges of `graph` that visits no node twice
pub fn is_simple_path(graph: &AdjMatrix, path: &[Node]) -> bool {
    path.iter().all_unique() && path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
}

/// Tries every ordering of the nodes and returns *true* if some ordering is a
/// Hamiltonian path from `source` to `target`
pub fn has_hamiltonian_path_exhaustive(graph: &AdjMatrix, source: Node, target: Node) -> bool {
    graph.vertices().permutations(graph.len()).any(|order| {
        order.first() == Some(&source)
            && order.last() == Some(&target)
            && order.windows(2).all(|w| graph.has_edge(w[0], w[1]))
    })
}

/// ```text
/// 0 - 1, 0 - 2, 0 - 5, 0 - 6, 1 - 2, 2 - 3, 2 - 4, 3 - 4, 4 - 5, 4 - 6
/// ```
/// with an additional isolated node `7`
pub fn two_triangles_with_isolated() -> AdjMatrix {
    AdjMatrix::from_edges(
        8,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 6),
            (1, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 5),
            (4, 6),
        ],
    )
}

/// Same as [`two_triangles_with_isolated`] without node `7`; every degree is even
pub fn two_triangles() -> AdjMatrix {
    AdjMatrix::from_edges(
        7,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 6),
            (1, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 5),
            (4, 6),
        ],
    )
}

/// [`two_triangles`] with the additional edges `1 - 3` and `3 - 5`
pub fn two_triangles_chorded() -> AdjMatrix {
    AdjMatrix::from_edges(
        7,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 6),
            (1, 2),
            (1, 3),
            (2, 3),
            (2, 4),
            (3, 4),
            (3, 5),
            (4, 5),
            (4, 6),
        ],
    )
}

/// Connected graph on 8 nodes containing the triangle `3 - 4 - 5`
pub fn odd_cycle_graph() -> AdjMatrix {
    AdjMatrix::from_edges(
        8,
        [
            (0, 2),
            (0, 5),
            (0, 7),
            (1, 7),
            (2, 6),
            (3, 4),
            (3, 5),
            (4, 5),
            (4, 6),
            (4, 7),
        ],
    )
}

/// Three components: `{0, .., 6}`, `{7, 8}` and `{9, .., 12}`
pub fn three_components() -> AdjMatrix {
    AdjMatrix::from_edges(
        13,
        [
            (0, 1),
            (0, 2),
            (0, 5),
            (0, 6),
            (3, 4),
            (3, 5),
            (4, 5),
            (4, 6),
            (7, 8),
            (9, 10),
            (9, 11),
            (9, 12),
            (11, 12),
        ],
    )
}

/// Bipartite graph on 13 nodes with two even cycles joined at node `9`
pub fn bipartite_graph() -> AdjMatrix {
    AdjMatrix::from_edges(
        13,
        [
            (0, 1),
            (0, 3),
            (0, 5),
            (1, 2),
            (2, 9),
            (3, 4),
            (4, 5),
            (4, 11),
            (6, 7),
            (6, 9),
            (7, 8),
            (8, 9),
            (9, 10),
            (9, 12),
            (11, 12),
        ],
    )
}

/// Connected graph on 13 nodes with the bridges `0 - 5`, `6 - 7` and `11 - 12`
pub fn graph_with_bridges() -> AdjMatrix {
    AdjMatrix::from_edges(
        13,
        [
            (0, 1),
            (0, 5),
            (0, 6),
            (1, 2),
            (2, 6),
            (3, 4),
            (3, 5),
            (4, 5),
            (4, 9),
            (4, 11),
            (6, 7),
            (7, 8),
            (7, 10),
            (8, 10),
            (9, 11),
            (11, 12),
        ],
    )
}
