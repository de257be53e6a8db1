//! The graph orchestrator.
//!
//! [`Graph`] composes the vertex store, the edge store with its adjacency
//! index, the kind's edge admission policy, and the capability set the
//! instance was built with. Every mutation validates first and then updates
//! all stores together, so observers never see a half-applied change.

use core::fmt;
use core::marker::PhantomData;

use hashbrown::HashSet;
use indexmap::IndexSet;
use trellis_capability::{Capability, CapabilityId, CapabilitySet, Scope};

use crate::builder::GraphBuilder;
use crate::edge::{Edge, EdgeStore};
use crate::error::{GraphError, Result};
use crate::id::{EdgeId, GraphId, IdAllocator, VertexId, VertexKey};
use crate::policy::{Acyclic, Directed, GraphKind, Multi, Simple, Variant};
use crate::traversal::{BreadthFirst, Direction, Relation, Walk};
use crate::vertex::{NewVertex, Payload, Vertex, VertexStore};

/// Undirected graph admitting loops and parallel edges.
pub type MultiGraph<P = ()> = Graph<Multi, P>;

/// Undirected graph without loops or parallel edges.
pub type SimpleGraph<P = ()> = Graph<Simple, P>;

/// Directed graph admitting loops and parallel edges.
pub type DiGraph<P = ()> = Graph<Directed, P>;

/// Directed acyclic graph.
pub type Dag<P = ()> = Graph<Acyclic, P>;

// ─────────────────────────────────────────────────────────────────────────────
// Graph
// ─────────────────────────────────────────────────────────────────────────────

/// An in-memory graph of kind `K` whose vertices may carry a `P` payload.
///
/// # Example
///
/// ```
/// use trellis_graph::prelude::*;
///
/// let mut graph = SimpleGraph::<()>::new();
/// graph.add_vertex("a").unwrap();
/// graph.add_vertex("b").unwrap();
/// graph.add_edge("a", "b").unwrap();
///
/// // Simple graphs refuse parallel edges and loops.
/// assert_eq!(graph.add_edge("b", "a").unwrap_err().kind(), ErrorKind::MultiEdge);
/// assert_eq!(graph.add_loop("a").unwrap_err().kind(), ErrorKind::Loop);
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.is_connected());
/// ```
pub struct Graph<K: GraphKind, P = ()> {
    ids: IdAllocator,
    vertices: VertexStore<P>,
    edges: EdgeStore,
    capabilities: CapabilitySet,
    kind: PhantomData<K>,
}

impl<K: GraphKind, P: Payload> Default for Graph<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GraphKind, P: Payload> Graph<K, P> {
    /// Creates an empty graph with the kind's default capabilities.
    ///
    /// Undirected kinds get [`Connectedness`](crate::capability::Connectedness),
    /// directed kinds get [`Ancestry`](crate::capability::Ancestry). Use
    /// [`builder()`](Self::builder) to choose capabilities or pass options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(K::default_capabilities())
    }

    /// Starts building a graph with explicit capabilities, options or
    /// preloaded vertices and edges.
    #[must_use]
    pub fn builder() -> GraphBuilder<K, P> {
        GraphBuilder::new()
    }

    /// Creates an empty graph around an already prepared capability set.
    pub(crate) fn with_capabilities(capabilities: CapabilitySet) -> Self {
        let graph = Self {
            ids: IdAllocator::new(),
            vertices: VertexStore::default(),
            edges: EdgeStore::default(),
            capabilities,
            kind: PhantomData,
        };
        tracing::debug!(
            graph = %graph.id(),
            variant = %K::VARIANT,
            capabilities = ?graph.capabilities,
            "graph created"
        );
        graph
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity & capabilities
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns this instance's identity.
    #[must_use]
    pub fn id(&self) -> GraphId {
        self.ids.graph()
    }

    /// Returns the graph variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        K::VARIANT
    }

    /// Returns true if edges are oriented.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        K::VARIANT.is_directed()
    }

    /// Returns the capabilities this graph was built with.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Returns the capability of type `C`, if the graph was built with it.
    #[must_use]
    pub fn capability<C: Capability>(&self) -> Option<&C> {
        self.capabilities.get::<C>()
    }

    /// Returns true if the graph was built with capability `C`.
    #[must_use]
    pub fn has_capability<C: Capability>(&self) -> bool {
        self.capabilities.contains::<C>()
    }

    /// Fails unless the graph has capability `C` extending `scope`.
    ///
    /// Capability-backed operations call this before doing any work.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingCapability`] when `C` is absent or does not extend `scope`.
    pub fn require<C: Capability>(&self, scope: Scope) -> Result<()> {
        match self.capabilities.get::<C>() {
            Some(capability) if capability.extends(scope) => Ok(()),
            _ => Err(GraphError::MissingCapability {
                capability: CapabilityId::of::<C>().short_name(),
                scope,
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolves a vertex id or name to a vertex of this graph.
    ///
    /// # Errors
    ///
    /// - [`GraphError::ForeignGraph`] for an id minted by another graph
    /// - [`GraphError::VertexNotFound`] for an id no longer present
    /// - [`GraphError::NameNotFound`] for an unregistered name
    pub fn resolve<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<VertexId> {
        match vertex.into() {
            VertexKey::Id(id) => {
                if id.graph() != self.id() {
                    return Err(GraphError::foreign(id, self.id(), id.graph()));
                }
                if !self.vertices.contains(id) {
                    return Err(GraphError::VertexNotFound(id));
                }
                Ok(id)
            }
            VertexKey::Name(name) => self.vertices.lookup_by_name(name),
        }
    }

    fn check_edge(&self, id: EdgeId) -> Result<&Edge> {
        if id.graph() != self.id() {
            return Err(GraphError::foreign(id, self.id(), id.graph()));
        }
        self.edges.get(id).ok_or(GraphError::EdgeNotFound(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a vertex and returns its id.
    ///
    /// Without an explicit name the vertex is registered under its payload's
    /// [`name()`](Payload::name), if any.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateName`] if the name is already registered.
    pub fn add_vertex(&mut self, vertex: impl Into<NewVertex<P>>) -> Result<VertexId> {
        let NewVertex { name, payload } = vertex.into();
        let name = name.or_else(|| {
            payload
                .as_ref()
                .and_then(Payload::name)
                .map(str::to_owned)
        });
        if let Some(name) = &name
            && self.vertices.lookup_by_name(name).is_ok()
        {
            return Err(GraphError::DuplicateName(name.clone()));
        }

        let id = self.ids.allocate_vertex_id();
        self.vertices.insert(id, name, payload)?;
        self.edges.register_vertex(id);
        if let Some(payload) = self.vertices.get_mut(id).and_then(Vertex::payload_mut) {
            payload.added_to_graph(id);
        }
        tracing::debug!(graph = %self.id(), vertex = %id, "vertex added");
        Ok(id)
    }

    /// Adds an edge from `tail` to `head` (undirected kinds ignore the order).
    ///
    /// The kind's policy is consulted first; a rejected edge leaves the graph
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - resolution errors, see [`resolve()`](Self::resolve)
    /// - [`GraphError::Loop`] / [`GraphError::MultiEdge`] on simple graphs
    /// - [`GraphError::Cyclic`] on DAGs
    pub fn add_edge<'a, 'b>(
        &mut self,
        tail: impl Into<VertexKey<'a>>,
        head: impl Into<VertexKey<'b>>,
    ) -> Result<EdgeId> {
        self.insert_edge(tail.into(), head.into(), None)
    }

    /// Adds a named edge. Edge names are labels and need not be unique.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge()`](Self::add_edge).
    pub fn add_named_edge<'a, 'b>(
        &mut self,
        tail: impl Into<VertexKey<'a>>,
        head: impl Into<VertexKey<'b>>,
        name: impl Into<String>,
    ) -> Result<EdgeId> {
        self.insert_edge(tail.into(), head.into(), Some(name.into()))
    }

    /// Adds a loop at `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge()`](Self::add_edge).
    pub fn add_loop<'a>(&mut self, vertex: impl Into<VertexKey<'a>>) -> Result<EdgeId> {
        let vertex = vertex.into();
        self.insert_edge(vertex, vertex, None)
    }

    fn insert_edge(
        &mut self,
        tail: VertexKey<'_>,
        head: VertexKey<'_>,
        name: Option<String>,
    ) -> Result<EdgeId> {
        let tail = self.resolve(tail)?;
        let head = self.resolve(head)?;
        if let Err(err) = K::VARIANT.policy().admit(self, tail, head) {
            tracing::debug!(
                graph = %self.id(),
                %tail,
                %head,
                error = %err,
                "edge rejected"
            );
            return Err(err);
        }

        let id = self.ids.allocate_edge_id();
        self.edges
            .insert(Edge::new(id, tail, head, K::VARIANT.is_directed(), name));
        if let Some(edge) = self.edges.get(id) {
            notify_endpoints(&mut self.vertices, edge, P::edge_added);
        }
        tracing::debug!(graph = %self.id(), edge = %id, %tail, %head, "edge added");
        Ok(id)
    }

    /// Removes an edge and returns it.
    ///
    /// # Errors
    ///
    /// [`GraphError::ForeignGraph`] or [`GraphError::EdgeNotFound`].
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<Edge> {
        self.check_edge(edge)?;
        let removed = self
            .edges
            .remove(edge)
            .ok_or(GraphError::EdgeNotFound(edge))?;
        notify_endpoints(&mut self.vertices, &removed, P::edge_removed);
        tracing::debug!(graph = %self.id(), edge = %edge, "edge removed");
        Ok(removed)
    }

    /// Removes a vertex together with every incident edge, returning the
    /// vertex record.
    ///
    /// Each incident edge is reported to its endpoints' payloads as if removed
    /// with [`remove_edge()`](Self::remove_edge). The edges are detached in one
    /// pass, but the vertex and edge stores keep insertion order, so a removal
    /// still shifts them once: O(V + E) per call.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn remove_vertex<'a>(&mut self, vertex: impl Into<VertexKey<'a>>) -> Result<Vertex<P>> {
        let id = self.resolve(vertex)?;
        let detached = self.edges.detach(id);
        let degree = detached.len();
        for edge in &detached {
            notify_endpoints(&mut self.vertices, edge, P::edge_removed);
            tracing::debug!(graph = %self.id(), edge = %edge.id(), "edge removed");
        }
        self.edges.unregister_vertex(id);
        let mut removed = self
            .vertices
            .remove(id)
            .ok_or(GraphError::VertexNotFound(id))?;
        if let Some(payload) = removed.payload_mut() {
            payload.removed_from_graph(id);
        }
        tracing::debug!(graph = %self.id(), vertex = %id, degree, "vertex removed");
        Ok(removed)
    }

    /// Renames a vertex, or clears its name with `None`.
    ///
    /// # Errors
    ///
    /// Resolution errors, or [`GraphError::DuplicateName`] if another vertex
    /// holds the new name.
    pub fn rename_vertex<'a>(
        &mut self,
        vertex: impl Into<VertexKey<'a>>,
        name: Option<&str>,
    ) -> Result<()> {
        let id = self.resolve(vertex)?;
        self.vertices.rename(id, name.map(str::to_owned))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the vertex registered under `name`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NameNotFound`] if no vertex has that name.
    pub fn fetch(&self, name: &str) -> Result<VertexId> {
        self.vertices.lookup_by_name(name)
    }

    /// Returns the vertex registered under `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.vertices.lookup_by_name(name).ok()
    }

    /// Returns a vertex record.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn vertex<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<&Vertex<P>> {
        let id = self.resolve(vertex)?;
        self.vertices.lookup_by_id(id)
    }

    /// Returns a vertex's payload.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn payload<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Option<&P>> {
        self.vertex(vertex).map(Vertex::payload)
    }

    /// Returns a vertex's payload for mutation.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn payload_mut<'a>(&mut self, vertex: impl Into<VertexKey<'a>>) -> Result<Option<&mut P>> {
        let id = self.resolve(vertex)?;
        Ok(self.vertices.get_mut(id).and_then(Vertex::payload_mut))
    }

    /// Returns an edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::ForeignGraph`] or [`GraphError::EdgeNotFound`].
    pub fn edge(&self, edge: EdgeId) -> Result<&Edge> {
        self.check_edge(edge)
    }

    /// Returns true if `vertex` belongs to this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.graph() == self.id() && self.vertices.contains(vertex)
    }

    /// Returns true if `edge` belongs to this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.check_edge(edge).is_ok()
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<P>> {
        self.vertices.iter()
    }

    /// Iterates over the vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.ids()
    }

    /// Iterates over the edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the edges touching `vertex`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn edges_of<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<&Edge>> {
        let id = self.resolve(vertex)?;
        Ok(self.edges.incident(id).collect())
    }

    /// Number of edges touching `vertex`; a loop counts once.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn degree<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<usize> {
        let id = self.resolve(vertex)?;
        Ok(self.edges.incident(id).count())
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Adjacency & reachability (direction ignored)
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the distinct vertices sharing an edge with `vertex`, in edge
    /// insertion order. A loop makes a vertex adjacent to itself.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn adjacent<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<VertexId>> {
        let id = self.resolve(vertex)?;
        Ok(distinct(self.step(id, Direction::Adjacent)))
    }

    /// Returns true if an edge joins `vertex` and `other`.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_adjacent<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let id = self.resolve(vertex)?;
        let other = self.resolve(other)?;
        Ok(self.step(id, Direction::Adjacent).any(|v| v == other))
    }

    /// Lazily walks every vertex reachable from `vertex` ignoring direction,
    /// starting with `vertex` itself.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn reachable<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Walk<'_, K, P>> {
        let id = self.resolve(vertex)?;
        Ok(self.walk(id, Direction::Adjacent))
    }

    /// Returns true if `other` is reachable from `vertex` ignoring direction.
    ///
    /// # Errors
    ///
    /// Resolution errors for either vertex.
    pub fn is_reachable<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let other = self.resolve(other)?;
        Ok(self.reachable(vertex)?.any(|v| v == other))
    }

    /// Returns true if every vertex is reachable from every other.
    ///
    /// An empty graph is disconnected; a single vertex is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let all: Vec<VertexId> = self.vertex_ids().collect();
        self.all_reachable(&all)
    }

    /// Returns true if the graph is not connected.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        !self.is_connected()
    }

    /// Returns true if the given vertices are pairwise reachable, ignoring
    /// direction. An empty list checks the whole graph.
    ///
    /// # Errors
    ///
    /// Resolution errors for any listed vertex.
    pub fn are_connected<'a, I>(&self, vertices: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<VertexKey<'a>>,
    {
        let ids = vertices
            .into_iter()
            .map(|vertex| self.resolve(vertex))
            .collect::<Result<Vec<_>>>()?;
        if ids.is_empty() {
            return Ok(self.is_connected());
        }
        Ok(self.all_reachable(&ids))
    }

    fn all_reachable(&self, vertices: &[VertexId]) -> bool {
        let Some(&first) = vertices.first() else {
            return false;
        };
        // Undirected reachability is symmetric and transitive, so one walk
        // decides every pair.
        let reached: HashSet<VertexId> = self.walk(first, Direction::Adjacent).collect();
        vertices.iter().all(|vertex| reached.contains(vertex))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subgraphs
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns an independent copy of the whole graph.
    ///
    /// The copy has a new identity; its vertices keep their names, payloads
    /// and local keys, and it carries a copy of this graph's capabilities.
    #[must_use]
    pub fn subgraph(&self) -> Self {
        self.extract(|_| true)
    }

    /// Returns an independent copy of the vertices satisfying `predicate`
    /// and of every edge whose endpoints both survive.
    #[must_use]
    pub fn subgraph_where<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Vertex<P>) -> bool,
    {
        self.extract(predicate)
    }

    /// Returns an independent copy induced by the listed vertices.
    ///
    /// # Errors
    ///
    /// Resolution errors for any listed vertex.
    pub fn subgraph_of<'a, I>(&self, vertices: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<VertexKey<'a>>,
    {
        let keep = vertices
            .into_iter()
            .map(|vertex| self.resolve(vertex))
            .collect::<Result<HashSet<_>>>()?;
        Ok(self.induced(&keep))
    }

    /// Maps a vertex id of the graph this one was copied from onto its copy.
    ///
    /// Returns `None` for ids of any other graph, and for vertices that were
    /// not copied or have since been removed.
    #[must_use]
    pub fn counterpart(&self, vertex: VertexId) -> Option<VertexId> {
        let id = self.ids.inherited_vertex(vertex)?;
        self.vertices.contains(id).then_some(id)
    }

    /// Maps an edge id of the graph this one was copied from onto its copy.
    #[must_use]
    pub fn edge_counterpart(&self, edge: EdgeId) -> Option<EdgeId> {
        let id = self.ids.inherited_edge(edge)?;
        self.edges.get(id).map(Edge::id)
    }

    pub(crate) fn induced(&self, keep: &HashSet<VertexId>) -> Self {
        self.extract(|vertex| keep.contains(&vertex.id()))
    }

    fn extract(&self, mut keep: impl FnMut(&Vertex<P>) -> bool) -> Self {
        let ids = self.ids.fork();
        let mut vertices = VertexStore::default();
        let mut edges = EdgeStore::default();

        for vertex in self.vertices.iter().filter(|vertex| keep(vertex)) {
            let copy = vertex.rehome(&ids);
            edges.register_vertex(copy.id());
            vertices.insert_copy(copy);
        }
        for edge in self.edges.iter() {
            let copy = edge.rehome(&ids);
            if vertices.contains(copy.tail()) && vertices.contains(copy.head()) {
                edges.insert(copy);
            }
        }

        let graph = Self {
            ids,
            vertices,
            edges,
            capabilities: self.capabilities.clone(),
            kind: PhantomData,
        };
        tracing::debug!(
            graph = %graph.id(),
            parent = %self.id(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "subgraph extracted"
        );
        graph
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn edge_store(&self) -> &EdgeStore {
        &self.edges
    }

    /// Vertices one step from `vertex` in `direction`, possibly repeated.
    pub(crate) fn step(
        &self,
        vertex: VertexId,
        direction: Direction,
    ) -> impl Iterator<Item = VertexId> + '_ {
        self.edges
            .incident(vertex)
            .filter_map(move |edge| match direction {
                Direction::Adjacent => edge.walk(vertex).ok(),
                Direction::Successors => (edge.tail() == vertex).then_some(edge.head()),
                Direction::Predecessors => (edge.head() == vertex).then_some(edge.tail()),
            })
    }

    /// Breadth-first walk from an already resolved vertex.
    pub(crate) fn walk(&self, vertex: VertexId, direction: Direction) -> Walk<'_, K, P> {
        tracing::trace!(graph = %self.id(), %vertex, ?direction, "walk started");
        BreadthFirst::new(vertex, Relation::new(self, direction))
    }
}

/// Collects vertices, dropping repeats and keeping first-seen order.
pub(crate) fn distinct(vertices: impl Iterator<Item = VertexId>) -> Vec<VertexId> {
    vertices.collect::<IndexSet<_>>().into_iter().collect()
}

/// Runs a payload notification for each distinct endpoint of `edge`.
fn notify_endpoints<P: Payload>(
    vertices: &mut VertexStore<P>,
    edge: &Edge,
    notify: fn(&mut P, VertexId, &Edge),
) {
    for vertex in distinct(edge.each_vertex()) {
        if let Some(payload) = vertices.get_mut(vertex).and_then(Vertex::payload_mut) {
            notify(payload, vertex, edge);
        }
    }
}

impl<K: GraphKind, P> fmt::Debug for Graph<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.ids.graph())
            .field("variant", &K::VARIANT)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edges.len())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

impl<K: GraphKind, P> fmt::Display for Graph<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vertices, {} edges",
            K::VARIANT,
            self.vertices.len(),
            self.edges.len()
        )
    }
}
