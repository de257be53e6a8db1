//! Identity types for graphs, vertices and edges.
//!
//! Every graph instance draws a process-unique [`GraphId`]. Vertex and edge
//! identifiers pair that graph id with a local key, so an id minted by one
//! graph is recognizably foreign to every other graph, including subgraphs
//! copied from it.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

// ─────────────────────────────────────────────────────────────────────────────
// GraphId
// ─────────────────────────────────────────────────────────────────────────────

/// Process-unique identity of a graph instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphId(u64);

impl GraphId {
    /// Allocates a fresh graph id.
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph_{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VertexId / EdgeId
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of a vertex, stable for the vertex's lifetime.
///
/// Ordering follows creation order within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    graph: GraphId,
    key: usize,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, key: usize) -> Self {
        Self { graph, key }
    }

    /// Returns the id of the graph that owns this vertex.
    #[must_use]
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Returns the vertex's key local to its graph.
    #[must_use]
    pub fn key(&self) -> usize {
        self.key
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.key)
    }
}

/// Identity of an edge, stable for the edge's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    graph: GraphId,
    key: usize,
}

impl EdgeId {
    pub(crate) fn new(graph: GraphId, key: usize) -> Self {
        Self { graph, key }
    }

    /// Returns the id of the graph that owns this edge.
    #[must_use]
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Returns the edge's key local to its graph.
    #[must_use]
    pub fn key(&self) -> usize {
        self.key
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ID Allocator
// ─────────────────────────────────────────────────────────────────────────────

/// Allocates vertex and edge ids for a single graph.
///
/// Keys are never reused. A subgraph forks its parent's allocator, keeping the
/// counters so copied entities can retain their keys while fresh ones never
/// collide with them.
#[derive(Debug, Clone)]
pub(crate) struct IdAllocator {
    graph: GraphId,
    origin: Option<Fork>,
    next_vertex: usize,
    next_edge: usize,
}

/// The parent graph of a forked allocator and its counters at fork time.
///
/// Parent keys at or above a mark were allocated after the fork and have no
/// copy here, even when this graph later hands out the same key.
#[derive(Debug, Clone, Copy)]
struct Fork {
    graph: GraphId,
    vertex_mark: usize,
    edge_mark: usize,
}

impl IdAllocator {
    /// Creates an allocator for a brand-new graph.
    pub(crate) fn new() -> Self {
        Self {
            graph: GraphId::next(),
            origin: None,
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Returns a new allocator with a fresh graph id and the same counters.
    pub(crate) fn fork(&self) -> Self {
        Self {
            graph: GraphId::next(),
            origin: Some(Fork {
                graph: self.graph,
                vertex_mark: self.next_vertex,
                edge_mark: self.next_edge,
            }),
            ..self.clone()
        }
    }

    pub(crate) fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn allocate_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.graph, self.next_vertex);
        self.next_vertex += 1;
        id
    }

    pub(crate) fn allocate_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.graph, self.next_edge);
        self.next_edge += 1;
        id
    }

    /// Re-homes a vertex id from the parent graph into this one.
    pub(crate) fn rehome_vertex(&self, id: VertexId) -> VertexId {
        VertexId::new(self.graph, id.key)
    }

    /// Re-homes an edge id from the parent graph into this one.
    pub(crate) fn rehome_edge(&self, id: EdgeId) -> EdgeId {
        EdgeId::new(self.graph, id.key)
    }

    /// Maps a parent vertex id that existed when this allocator was forked.
    pub(crate) fn inherited_vertex(&self, id: VertexId) -> Option<VertexId> {
        let fork = self.origin?;
        (id.graph == fork.graph && id.key < fork.vertex_mark).then(|| self.rehome_vertex(id))
    }

    /// Maps a parent edge id that existed when this allocator was forked.
    pub(crate) fn inherited_edge(&self, id: EdgeId) -> Option<EdgeId> {
        let fork = self.origin?;
        (id.graph == fork.graph && id.key < fork.edge_mark).then(|| self.rehome_edge(id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VertexKey
// ─────────────────────────────────────────────────────────────────────────────

/// A way of naming a vertex in an operation: by id or by unique name.
///
/// Operations accepting `impl Into<VertexKey>` take either form:
///
/// ```ignore
/// graph.add_edge("a", "b")?;
/// graph.add_edge(a, b)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKey<'a> {
    /// A vertex id.
    Id(VertexId),
    /// A registered vertex name.
    Name(&'a str),
}

impl From<VertexId> for VertexKey<'_> {
    fn from(id: VertexId) -> Self {
        VertexKey::Id(id)
    }
}

impl From<&VertexId> for VertexKey<'_> {
    fn from(id: &VertexId) -> Self {
        VertexKey::Id(*id)
    }
}

impl<'a> From<&'a str> for VertexKey<'a> {
    fn from(name: &'a str) -> Self {
        VertexKey::Name(name)
    }
}

impl<'a> From<&'a String> for VertexKey<'a> {
    fn from(name: &'a String) -> Self {
        VertexKey::Name(name)
    }
}

impl fmt::Display for VertexKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Id(id) => id.fmt(f),
            VertexKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}
