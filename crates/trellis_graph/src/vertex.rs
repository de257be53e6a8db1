//! Vertices, vertex payloads and the vertex store.

use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::id::{IdAllocator, VertexId};

// ─────────────────────────────────────────────────────────────────────────────
// Payload
// ─────────────────────────────────────────────────────────────────────────────

/// Caller data attached to a vertex.
///
/// Every method has a no-op default, so a payload type only overrides the
/// notifications it cares about. Notifications fire on explicit mutations of
/// the owning graph; copying a vertex into a subgraph does not notify.
///
/// # Example
///
/// ```
/// use trellis_graph::prelude::*;
///
/// #[derive(Clone, Default)]
/// struct Package {
///     name: String,
///     dependents: usize,
/// }
///
/// impl Payload for Package {
///     fn name(&self) -> Option<&str> {
///         Some(&self.name)
///     }
///
///     fn edge_added(&mut self, vertex: VertexId, edge: &Edge) {
///         if edge.head() == vertex {
///             self.dependents += 1;
///         }
///     }
/// }
///
/// let mut graph: DiGraph<Package> = DiGraph::new();
/// let core = graph.add_vertex(NewVertex::with_payload(Package { name: "core".into(), ..Default::default() })).unwrap();
/// let app = graph.add_vertex(NewVertex::with_payload(Package { name: "app".into(), ..Default::default() })).unwrap();
/// graph.add_edge(app, core).unwrap();
///
/// assert_eq!(graph.fetch("core").unwrap(), core);
/// assert_eq!(graph.payload(core).unwrap().map(|p| p.dependents), Some(1));
/// ```
pub trait Payload: Clone {
    /// A name to register the vertex under when none is given explicitly.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Called once the vertex carrying this payload joined a graph.
    fn added_to_graph(&mut self, _vertex: VertexId) {}

    /// Called once the vertex carrying this payload left its graph.
    fn removed_from_graph(&mut self, _vertex: VertexId) {}

    /// Called after an edge touching `vertex` was added.
    fn edge_added(&mut self, _vertex: VertexId, _edge: &Edge) {}

    /// Called after an edge touching `vertex` was removed.
    fn edge_removed(&mut self, _vertex: VertexId, _edge: &Edge) {}
}

impl Payload for () {}

impl Payload for String {}

impl Payload for &'static str {}

// ─────────────────────────────────────────────────────────────────────────────
// Vertex
// ─────────────────────────────────────────────────────────────────────────────

/// A vertex owned by a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<P = ()> {
    id: VertexId,
    name: Option<String>,
    payload: Option<P>,
}

impl<P> Vertex<P> {
    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the vertex name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the payload, if the vertex carries one.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Consumes the vertex, returning its payload.
    #[must_use]
    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }
}

impl<P: Clone> Vertex<P> {
    /// Copies the vertex into the graph `ids` allocates for, keeping its key.
    pub(crate) fn rehome(&self, ids: &IdAllocator) -> Self {
        Self {
            id: ids.rehome_vertex(self.id),
            name: self.name.clone(),
            payload: self.payload.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// NewVertex
// ─────────────────────────────────────────────────────────────────────────────

/// Description of a vertex to add.
///
/// Converts from `&str` and `String`, so a named vertex can be added with
/// `graph.add_vertex("a")`.
#[derive(Debug, Clone)]
pub struct NewVertex<P = ()> {
    pub(crate) name: Option<String>,
    pub(crate) payload: Option<P>,
}

impl<P> Default for NewVertex<P> {
    fn default() -> Self {
        Self {
            name: None,
            payload: None,
        }
    }
}

impl<P> NewVertex<P> {
    /// An anonymous vertex without payload.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A named vertex without payload.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            payload: None,
        }
    }

    /// A vertex carrying `payload`, named after the payload if it has a name.
    #[must_use]
    pub fn with_payload(payload: P) -> Self {
        Self {
            name: None,
            payload: Some(payload),
        }
    }

    /// Sets the name explicitly.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl<P> From<&str> for NewVertex<P> {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl<P> From<String> for NewVertex<P> {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VertexStore
// ─────────────────────────────────────────────────────────────────────────────

/// Owns vertex records and the unique-name index.
///
/// Iteration follows insertion order.
#[derive(Debug)]
pub(crate) struct VertexStore<P> {
    vertices: IndexMap<VertexId, Vertex<P>>,
    names: HashMap<String, VertexId>,
}

impl<P> Default for VertexStore<P> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            names: HashMap::new(),
        }
    }
}

impl<P> VertexStore<P> {
    /// Registers a vertex under `id`.
    pub(crate) fn insert(
        &mut self,
        id: VertexId,
        name: Option<String>,
        payload: Option<P>,
    ) -> Result<VertexId> {
        if let Some(name) = &name {
            if self.names.contains_key(name.as_str()) {
                return Err(GraphError::DuplicateName(name.clone()));
            }
            self.names.insert(name.clone(), id);
        }
        self.vertices.insert(id, Vertex { id, name, payload });
        Ok(id)
    }

    /// Stores a vertex copied from another store whose names were unique.
    pub(crate) fn insert_copy(&mut self, vertex: Vertex<P>) {
        if let Some(name) = &vertex.name {
            self.names.insert(name.clone(), vertex.id);
        }
        self.vertices.insert(vertex.id, vertex);
    }

    /// Unregisters a vertex. Incident edges must already be detached.
    pub(crate) fn remove(&mut self, id: VertexId) -> Option<Vertex<P>> {
        let vertex = self.vertices.shift_remove(&id)?;
        if let Some(name) = &vertex.name {
            self.names.remove(name.as_str());
        }
        Some(vertex)
    }

    /// Re-keys the name index for `id`.
    pub(crate) fn rename(&mut self, id: VertexId, name: Option<String>) -> Result<()> {
        if let Some(new_name) = &name
            && let Some(owner) = self.names.get(new_name.as_str())
            && *owner != id
        {
            return Err(GraphError::DuplicateName(new_name.clone()));
        }
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        if let Some(old) = vertex.name.take() {
            self.names.remove(old.as_str());
        }
        if let Some(new_name) = &name {
            self.names.insert(new_name.clone(), id);
        }
        vertex.name = name;
        Ok(())
    }

    pub(crate) fn lookup_by_name(&self, name: &str) -> Result<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NameNotFound(name.to_owned()))
    }

    pub(crate) fn lookup_by_id(&self, id: VertexId) -> Result<&Vertex<P>> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<P>> {
        self.vertices.get_mut(&id)
    }

    pub(crate) fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Vertex<P>> {
        self.vertices.values()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }
}
