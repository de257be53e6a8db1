//! Breadth-first traversal over an arbitrary neighbor relation.
//!
//! Reachability, ancestry, successor and connectivity queries are all the same
//! walk driven by a different [`Neighbors`] implementation. A walk is a lazy,
//! finite iterator: it yields the start vertex first, then vertices in level
//! order, and never enqueues a vertex twice.

use core::iter::FusedIterator;
use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::graph::Graph;
use crate::id::VertexId;
use crate::policy::GraphKind;
use crate::vertex::Payload;

// ─────────────────────────────────────────────────────────────────────────────
// Neighbors
// ─────────────────────────────────────────────────────────────────────────────

/// A neighbor relation a walk follows.
///
/// Implemented for any `FnMut(VertexId) -> impl IntoIterator<Item = VertexId>`.
pub trait Neighbors {
    /// Returns the vertices one step away from `vertex`.
    fn neighbors(&mut self, vertex: VertexId) -> Vec<VertexId>;
}

impl<F, I> Neighbors for F
where
    F: FnMut(VertexId) -> I,
    I: IntoIterator<Item = VertexId>,
{
    fn neighbors(&mut self, vertex: VertexId) -> Vec<VertexId> {
        self(vertex).into_iter().collect()
    }
}

/// Which way a graph walk follows edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Both ways, ignoring orientation.
    Adjacent,
    /// Tail to head.
    Successors,
    /// Head to tail.
    Predecessors,
}

/// A graph's edges read in one [`Direction`].
#[derive(Debug)]
pub struct Relation<'g, K: GraphKind, P: Payload> {
    graph: &'g Graph<K, P>,
    direction: Direction,
}

impl<'g, K: GraphKind, P: Payload> Relation<'g, K, P> {
    pub(crate) fn new(graph: &'g Graph<K, P>, direction: Direction) -> Self {
        Self { graph, direction }
    }
}

impl<K: GraphKind, P: Payload> Neighbors for Relation<'_, K, P> {
    fn neighbors(&mut self, vertex: VertexId) -> Vec<VertexId> {
        self.graph.step(vertex, self.direction).collect()
    }
}

/// A breadth-first walk over a graph's own edges.
pub type Walk<'g, K, P> = BreadthFirst<Relation<'g, K, P>>;

// ─────────────────────────────────────────────────────────────────────────────
// BreadthFirst
// ─────────────────────────────────────────────────────────────────────────────

/// Lazy breadth-first walk from a start vertex.
///
/// # Example
///
/// ```
/// use trellis_graph::traversal::BreadthFirst;
/// use trellis_graph::prelude::*;
///
/// let mut graph = DiGraph::<()>::new();
/// let a = graph.add_vertex("a").unwrap();
/// let b = graph.add_vertex("b").unwrap();
/// let c = graph.add_vertex("c").unwrap();
/// graph.add_edge(a, b).unwrap();
/// graph.add_edge(b, c).unwrap();
///
/// // Any closure producing neighbors drives a walk.
/// let order: Vec<_> = BreadthFirst::new(a, |v: VertexId| graph.direct_successors(v).unwrap_or_default()).collect();
/// assert_eq!(order, [a, b, c]);
/// ```
#[derive(Debug, Clone)]
pub struct BreadthFirst<N> {
    neighbors: N,
    discovered: HashSet<VertexId>,
    queue: VecDeque<VertexId>,
}

impl<N: Neighbors> BreadthFirst<N> {
    /// Starts a walk at `start`.
    #[must_use]
    pub fn new(start: VertexId, neighbors: N) -> Self {
        let mut discovered = HashSet::new();
        discovered.insert(start);
        Self {
            neighbors,
            discovered,
            queue: VecDeque::from([start]),
        }
    }

    /// Number of vertices discovered so far, yielded or queued.
    #[must_use]
    pub fn discovered(&self) -> usize {
        self.discovered.len()
    }
}

impl<N: Neighbors> Iterator for BreadthFirst<N> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for next in self.neighbors.neighbors(current) {
            if self.discovered.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(current)
    }
}

impl<N: Neighbors> FusedIterator for BreadthFirst<N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdAllocator;

    fn ids(count: usize) -> Vec<VertexId> {
        let mut allocator = IdAllocator::new();
        (0..count).map(|_| allocator.allocate_vertex_id()).collect()
    }

    /// Adjacency-list relation over `ids`, edges given as index pairs.
    fn relation(ids: &[VertexId], edges: &[(usize, usize)]) -> impl FnMut(VertexId) -> Vec<VertexId> {
        let ids = ids.to_vec();
        let edges = edges.to_vec();
        move |v| {
            edges
                .iter()
                .filter(|(from, _)| ids[*from] == v)
                .map(|(_, to)| ids[*to])
                .collect()
        }
    }

    #[test]
    fn start_comes_first_then_level_order() {
        let v = ids(5);
        let walk = BreadthFirst::new(v[0], relation(&v, &[(0, 1), (0, 2), (1, 3), (2, 4)]));
        assert_eq!(walk.collect::<Vec<_>>(), [v[0], v[1], v[2], v[3], v[4]]);
    }

    #[test]
    fn cycles_terminate_without_repeats() {
        let v = ids(3);
        let walk = BreadthFirst::new(v[0], relation(&v, &[(0, 1), (1, 2), (2, 0), (1, 0)]));
        assert_eq!(walk.collect::<Vec<_>>(), [v[0], v[1], v[2]]);
    }

    #[test]
    fn isolated_start_yields_only_itself() {
        let v = ids(2);
        let mut walk = BreadthFirst::new(v[1], relation(&v, &[(0, 1)]));
        assert_eq!(walk.next(), Some(v[1]));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn diamond_visits_join_once() {
        let v = ids(4);
        let walk = BreadthFirst::new(v[0], relation(&v, &[(0, 1), (0, 2), (1, 3), (2, 3)]));
        let order: Vec<_> = walk.collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order.last(), Some(&v[3]));
    }

    #[test]
    fn walk_is_lazy() {
        let v = ids(3);
        let mut calls = 0;
        let mut walk = BreadthFirst::new(v[0], |vertex: VertexId| {
            calls += 1;
            if vertex == v[0] { vec![v[1]] } else { vec![v[2]] }
        });
        assert_eq!(walk.next(), Some(v[0]));
        assert_eq!(walk.discovered(), 2);
        drop(walk);
        assert_eq!(calls, 1);
    }
}
