//! Query surface shared by directed graphs and DAGs.
//!
//! Edges are oriented tail to head. A directed loop contributes once to its
//! vertex's in-degree and once to its out-degree.

use hashbrown::HashSet;

use crate::edge::Edge;
use crate::error::Result;
use crate::graph::{Graph, distinct};
use crate::id::{VertexId, VertexKey};
use crate::policy::DirectedKind;
use crate::traversal::{Direction, Walk};
use crate::vertex::Payload;

impl<K: DirectedKind, P: Payload> Graph<K, P> {
    // ─────────────────────────────────────────────────────────────────────────
    // Edges & degrees
    // ─────────────────────────────────────────────────────────────────────────

    /// Edges whose head is `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn in_edges<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<&Edge>> {
        let id = self.resolve(vertex)?;
        Ok(self
            .edge_store()
            .incident(id)
            .filter(|edge| edge.head() == id)
            .collect())
    }

    /// Edges whose tail is `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn out_edges<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<&Edge>> {
        let id = self.resolve(vertex)?;
        Ok(self
            .edge_store()
            .incident(id)
            .filter(|edge| edge.tail() == id)
            .collect())
    }

    /// Number of edges whose head is `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn in_degree<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<usize> {
        self.in_edges(vertex).map(|edges| edges.len())
    }

    /// Number of edges whose tail is `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn out_degree<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<usize> {
        self.out_edges(vertex).map(|edges| edges.len())
    }

    /// True if no edge points at `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn is_source<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<bool> {
        Ok(self.in_degree(vertex)? == 0)
    }

    /// True if no edge leaves `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn is_sink<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<bool> {
        Ok(self.out_degree(vertex)? == 0)
    }

    /// True if `vertex` is neither a source nor a sink.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn is_internal<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<bool> {
        let id = self.resolve(vertex)?;
        Ok(!self.is_source(id)? && !self.is_sink(id)?)
    }

    /// True if every vertex has equal in- and out-degree.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.vertex_ids().all(|vertex| {
            let incident = self.edge_store().incident(vertex);
            let (ins, outs) = incident.fold((0usize, 0usize), |(ins, outs), edge| {
                (
                    ins + usize::from(edge.head() == vertex),
                    outs + usize::from(edge.tail() == vertex),
                )
            });
            ins == outs
        })
    }

    /// Vertices with in-degree zero, in insertion order.
    #[must_use]
    pub fn sources(&self) -> Vec<VertexId> {
        self.vertex_ids()
            .filter(|&vertex| self.step(vertex, Direction::Predecessors).next().is_none())
            .collect()
    }

    /// Vertices with out-degree zero, in insertion order.
    #[must_use]
    pub fn sinks(&self) -> Vec<VertexId> {
        self.vertex_ids()
            .filter(|&vertex| self.step(vertex, Direction::Successors).next().is_none())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Direct neighbors
    // ─────────────────────────────────────────────────────────────────────────

    /// Distinct tails of the edges pointing at `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn direct_predecessors<'a>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
    ) -> Result<Vec<VertexId>> {
        let id = self.resolve(vertex)?;
        Ok(distinct(self.step(id, Direction::Predecessors)))
    }

    /// Distinct heads of the edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn direct_successors<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<VertexId>> {
        let id = self.resolve(vertex)?;
        Ok(distinct(self.step(id, Direction::Successors)))
    }

    /// True if an edge runs from `other` to `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_direct_predecessor<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let id = self.resolve(vertex)?;
        let other = self.resolve(other)?;
        Ok(self.step(id, Direction::Predecessors).any(|v| v == other))
    }

    /// True if an edge runs from `vertex` to `other`.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_direct_successor<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let id = self.resolve(vertex)?;
        let other = self.resolve(other)?;
        Ok(self.step(id, Direction::Successors).any(|v| v == other))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitive neighbors
    // ─────────────────────────────────────────────────────────────────────────

    /// Lazily walks `vertex` and every vertex with a directed path to it.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn predecessors<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Walk<'_, K, P>> {
        let id = self.resolve(vertex)?;
        Ok(self.walk(id, Direction::Predecessors))
    }

    /// Lazily walks `vertex` and every vertex a directed path from it reaches.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn successors<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Walk<'_, K, P>> {
        let id = self.resolve(vertex)?;
        Ok(self.walk(id, Direction::Successors))
    }

    /// True if `other` has a directed path to `vertex`. Reflexive.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_predecessor<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let other = self.resolve(other)?;
        Ok(self.predecessors(vertex)?.any(|v| v == other))
    }

    /// True if `vertex` has a directed path to `other`. Reflexive.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_successor<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let other = self.resolve(other)?;
        Ok(self.successors(vertex)?.any(|v| v == other))
    }

    /// Subgraph induced by `vertex` and its predecessors.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn predecessor_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        let keep: HashSet<VertexId> = self.predecessors(vertex)?.collect();
        Ok(self.induced(&keep))
    }

    /// Subgraph induced by `vertex` and its successors.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn successor_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        let keep: HashSet<VertexId> = self.successors(vertex)?.collect();
        Ok(self.induced(&keep))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::graph::DiGraph;
    use crate::id::VertexId;

    /// a -> b -> c, a -> d, plus a loop on d.
    fn sample() -> DiGraph {
        let mut graph = DiGraph::new();
        for name in ["a", "b", "c", "d"] {
            graph.add_vertex(name).unwrap();
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("a", "d").unwrap();
        graph.add_loop("d").unwrap();
        graph
    }

    fn ids(graph: &DiGraph, names: &[&str]) -> Vec<VertexId> {
        names.iter().map(|name| graph.fetch(name).unwrap()).collect()
    }

    #[test]
    fn degrees_count_loops_both_ways() {
        let graph = sample();
        assert_eq!(graph.in_degree("d").unwrap(), 2);
        assert_eq!(graph.out_degree("d").unwrap(), 1);
        assert_eq!(graph.out_degree("a").unwrap(), 2);
        assert_eq!(graph.in_degree("a").unwrap(), 0);
    }

    #[test]
    fn sources_sinks_internal() {
        let graph = sample();
        assert!(graph.is_source("a").unwrap());
        assert!(graph.is_sink("c").unwrap());
        assert!(graph.is_internal("b").unwrap());
        assert!(!graph.is_sink("d").unwrap());
        assert_eq!(graph.sources(), ids(&graph, &["a"]));
        assert_eq!(graph.sinks(), ids(&graph, &["c"]));
    }

    #[test]
    fn direct_neighbors_follow_orientation() {
        let graph = sample();
        assert_eq!(graph.direct_successors("a").unwrap(), ids(&graph, &["b", "d"]));
        assert_eq!(graph.direct_predecessors("b").unwrap(), ids(&graph, &["a"]));
        assert_eq!(graph.direct_successors("d").unwrap(), ids(&graph, &["d"]));
        assert!(graph.is_direct_successor("a", "b").unwrap());
        assert!(!graph.is_direct_successor("b", "a").unwrap());
        assert!(graph.is_direct_predecessor("b", "a").unwrap());
    }

    #[test]
    fn transitive_walks_include_start() {
        let graph = sample();
        let successors: Vec<_> = graph.successors("a").unwrap().collect();
        assert_eq!(successors, ids(&graph, &["a", "b", "d", "c"]));
        let predecessors: Vec<_> = graph.predecessors("c").unwrap().collect();
        assert_eq!(predecessors, ids(&graph, &["c", "b", "a"]));
        assert!(graph.is_successor("a", "c").unwrap());
        assert!(graph.is_successor("c", "c").unwrap());
        assert!(!graph.is_successor("c", "a").unwrap());
        assert!(graph.is_predecessor("c", "a").unwrap());
    }

    #[test]
    fn directed_subgraphs() {
        let graph = sample();
        let down = graph.successor_subgraph("b").unwrap();
        assert_eq!(down.vertex_count(), 2);
        assert_eq!(down.edge_count(), 1);

        let up = graph.predecessor_subgraph("d").unwrap();
        assert_eq!(up.vertex_count(), 2);
        // a -> d and the loop on d both survive.
        assert_eq!(up.edge_count(), 2);
    }

    #[test]
    fn balance() {
        let mut graph = DiGraph::<()>::new();
        graph.add_vertex("a").unwrap();
        graph.add_vertex("b").unwrap();
        assert!(graph.is_balanced());
        graph.add_edge("a", "b").unwrap();
        assert!(!graph.is_balanced());
        graph.add_edge("b", "a").unwrap();
        assert!(graph.is_balanced());
        graph.add_loop("a").unwrap();
        assert!(graph.is_balanced());
    }

    #[test]
    fn digraph_admits_cycles() {
        let mut graph = sample();
        graph.add_edge("c", "a").unwrap();
        assert!(graph.is_successor("c", "b").unwrap());
    }

    #[test]
    fn unknown_vertex_errors() {
        let graph = sample();
        assert_eq!(
            graph.in_edges("zzz").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}
