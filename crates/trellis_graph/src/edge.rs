//! Edges and the edge store.
//!
//! An edge joins two vertices of the same graph. In directed graphs the first
//! endpoint is the tail (source, parent) and the second the head (target,
//! child); undirected graphs treat the pair as unordered.

use core::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphError, Result};
use crate::id::{EdgeId, IdAllocator, VertexId};

// ─────────────────────────────────────────────────────────────────────────────
// Edge
// ─────────────────────────────────────────────────────────────────────────────

/// A connection between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    tail: VertexId,
    head: VertexId,
    directed: bool,
    name: Option<String>,
}

impl Edge {
    pub(crate) fn new(
        id: EdgeId,
        tail: VertexId,
        head: VertexId,
        directed: bool,
        name: Option<String>,
    ) -> Self {
        Self {
            id,
            tail,
            head,
            directed,
            name,
        }
    }

    /// Copies the edge into the graph `ids` allocates for, keeping its keys.
    pub(crate) fn rehome(&self, ids: &IdAllocator) -> Self {
        Self {
            id: ids.rehome_edge(self.id),
            tail: ids.rehome_vertex(self.tail),
            head: ids.rehome_vertex(self.head),
            directed: self.directed,
            name: self.name.clone(),
        }
    }

    /// Returns the edge id.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the edge name, if it has one. Edge names need not be unique.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the first endpoint; the source of a directed edge.
    #[must_use]
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// Returns the second endpoint; the target of a directed edge.
    #[must_use]
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Alias for [`tail`](Self::tail) in hierarchy vocabulary.
    #[must_use]
    pub fn parent(&self) -> VertexId {
        self.tail
    }

    /// Alias for [`head`](Self::head) in hierarchy vocabulary.
    #[must_use]
    pub fn child(&self) -> VertexId {
        self.head
    }

    /// Returns both endpoints as `(tail, head)`.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.tail, self.head)
    }

    /// Returns true if the edge belongs to a directed graph.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Returns true if `vertex` is an endpoint.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.tail == vertex || self.head == vertex
    }

    /// Returns true if the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.tail == a && self.head == b) || (self.tail == b && self.head == a)
    }

    /// Returns the endpoint opposite `from`.
    ///
    /// For a loop the opposite endpoint is `from` itself.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotAnEndpoint`] if `from` is not an endpoint.
    pub fn walk(&self, from: VertexId) -> Result<VertexId> {
        if from == self.tail {
            Ok(self.head)
        } else if from == self.head {
            Ok(self.tail)
        } else {
            Err(GraphError::NotAnEndpoint {
                edge: self.id,
                vertex: from,
            })
        }
    }

    /// Yields the endpoints, tail before head.
    ///
    /// An undirected loop yields its vertex once; a directed loop yields it
    /// as tail and again as head.
    pub fn each_vertex(&self) -> impl Iterator<Item = VertexId> {
        let second = (self.directed || !self.is_loop()).then_some(self.head);
        core::iter::once(self.tail).chain(second)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "-->" } else { "<->" };
        write!(f, "{{{}{arrow}{}}}", self.tail, self.head)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EdgeStore
// ─────────────────────────────────────────────────────────────────────────────

/// Owns edges and the adjacency index (vertex to incident edges).
///
/// Every vertex of the graph has an adjacency entry, possibly empty. Incident
/// edges are kept in insertion order, which fixes neighbor order for
/// traversals.
#[derive(Debug, Default)]
pub(crate) struct EdgeStore {
    edges: IndexMap<EdgeId, Edge>,
    adjacency: IndexMap<VertexId, IndexSet<EdgeId>>,
}

impl EdgeStore {
    pub(crate) fn register_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Drops the adjacency entry of a vertex that has no incident edges left.
    pub(crate) fn unregister_vertex(&mut self, vertex: VertexId) {
        debug_assert!(
            self.adjacency
                .get(&vertex)
                .is_none_or(IndexSet::is_empty),
            "vertex {vertex} still has incident edges"
        );
        self.adjacency.shift_remove(&vertex);
    }

    /// Stores an edge and registers it with both endpoints.
    pub(crate) fn insert(&mut self, edge: Edge) -> EdgeId {
        let id = edge.id;
        for vertex in edge.each_vertex() {
            self.adjacency.entry(vertex).or_default().insert(id);
        }
        self.edges.insert(id, edge);
        id
    }

    /// Removes an edge and unregisters it from both endpoints.
    pub(crate) fn remove(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id)?;
        for vertex in edge.each_vertex() {
            if let Some(incident) = self.adjacency.get_mut(&vertex) {
                incident.shift_remove(&id);
            }
        }
        Some(edge)
    }

    /// Removes every edge incident to `vertex` in one pass over the store,
    /// returning them in incidence order. The vertex keeps an empty
    /// adjacency entry.
    ///
    /// Costs O(E + sum of neighbor degrees) however many edges are detached,
    /// where calling [`remove()`](Self::remove) per edge shifts the store
    /// once per edge.
    pub(crate) fn detach(&mut self, vertex: VertexId) -> Vec<Edge> {
        let Some(incident) = self.adjacency.get_mut(&vertex).map(core::mem::take) else {
            return Vec::new();
        };
        let detached: Vec<Edge> = incident
            .iter()
            .filter_map(|id| self.edges.get(id).cloned())
            .collect();
        self.edges.retain(|id, _| !incident.contains(id));
        for edge in &detached {
            for endpoint in edge.each_vertex().filter(|&endpoint| endpoint != vertex) {
                if let Some(neighbors) = self.adjacency.get_mut(&endpoint) {
                    neighbors.shift_remove(&edge.id);
                }
            }
        }
        detached
    }

    pub(crate) fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges touching `vertex`, in insertion order.
    pub(crate) fn incident(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flatten()
            .filter_map(|id| self.edges.get(id))
    }

    #[cfg(test)]
    fn incident_ids(&self, vertex: VertexId) -> Vec<EdgeId> {
        self.adjacency
            .get(&vertex)
            .map(|incident| incident.iter().copied().collect())
            .unwrap_or_default()
    }
}
