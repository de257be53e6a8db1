//! Hierarchy vocabulary for directed graphs.
//!
//! The tail of an edge is the parent and the head is the child, so ancestors
//! are reached by walking edges backwards and descendants by walking them
//! forwards.

use hashbrown::HashSet;
use trellis_capability::{Capability, Scope};

use crate::edge::Edge;
use crate::error::Result;
use crate::graph::Graph;
use crate::id::{VertexId, VertexKey};
use crate::policy::DirectedKind;
use crate::traversal::Walk;
use crate::vertex::{Payload, Vertex};

/// Parent, child, ancestor and descendant operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ancestry;

impl Capability for Ancestry {
    fn scopes(&self) -> &'static [Scope] {
        &[Scope::Graph, Scope::Vertex]
    }
}

impl<K: DirectedKind, P: Payload> Graph<K, P> {
    // ─────────────────────────────────────────────────────────────────────────
    // Parents & children
    // ─────────────────────────────────────────────────────────────────────────

    /// Edges from a parent to `vertex`.
    ///
    /// # Errors
    ///
    /// [`MissingCapability`](crate::GraphError::MissingCapability) without
    /// [`Ancestry`], or resolution errors.
    pub fn parent_edges<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<&Edge>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.in_edges(vertex)
    }

    /// Edges from `vertex` to a child.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn child_edges<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<&Edge>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.out_edges(vertex)
    }

    /// Distinct parents of `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn parents<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<VertexId>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.direct_predecessors(vertex)
    }

    /// Distinct children of `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn children<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Vec<VertexId>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.direct_successors(vertex)
    }

    /// True if `other` is a parent of `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges), for either vertex.
    pub fn is_parent<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.is_direct_predecessor(vertex, other)
    }

    /// True if `other` is a child of `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges), for either vertex.
    pub fn is_child<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.is_direct_successor(vertex, other)
    }

    /// Vertices without parents.
    ///
    /// # Errors
    ///
    /// [`MissingCapability`](crate::GraphError::MissingCapability) without
    /// [`Ancestry`].
    pub fn roots(&self) -> Result<Vec<VertexId>> {
        self.require::<Ancestry>(Scope::Graph)?;
        Ok(self.sources())
    }

    /// Vertices without children.
    ///
    /// # Errors
    ///
    /// Same as [`roots()`](Self::roots).
    pub fn leaves(&self) -> Result<Vec<VertexId>> {
        self.require::<Ancestry>(Scope::Graph)?;
        Ok(self.sinks())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ancestors & descendants
    // ─────────────────────────────────────────────────────────────────────────

    /// Lazily walks `vertex` and its transitive parents, breadth first.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn ancestors<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Walk<'_, K, P>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.predecessors(vertex)
    }

    /// Lazily walks `vertex` and its transitive children, breadth first.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn descendants<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Walk<'_, K, P>> {
        self.require::<Ancestry>(Scope::Vertex)?;
        self.successors(vertex)
    }

    /// True if `other` is an ancestor of `vertex`. Every vertex is its own
    /// ancestor.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges), for either vertex.
    pub fn is_ancestor<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let other = self.resolve(other)?;
        Ok(self.ancestors(vertex)?.any(|v| v == other))
    }

    /// True if `other` is a descendant of `vertex`. Every vertex is its own
    /// descendant.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges), for either vertex.
    pub fn is_descendant<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        let other = self.resolve(other)?;
        Ok(self.descendants(vertex)?.any(|v| v == other))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subgraphs
    // ─────────────────────────────────────────────────────────────────────────

    /// Subgraph of `vertex` and all its ancestors.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn ancestor_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        let keep: HashSet<VertexId> = self.ancestors(vertex)?.collect();
        Ok(self.induced(&keep))
    }

    /// Subgraph of `vertex` and all its descendants.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn descendant_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        let keep: HashSet<VertexId> = self.descendants(vertex)?.collect();
        Ok(self.induced(&keep))
    }

    /// Subgraph of the descendants of `vertex` together with every ancestor
    /// of those descendants, i.e. everything they depend on.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn dependant_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        self.dependant_subgraph_where(vertex, |_| true)
    }

    /// Like [`dependant_subgraph()`](Self::dependant_subgraph), keeping only
    /// descendants and ancestors accepted by `selector`.
    ///
    /// # Errors
    ///
    /// Same as [`parent_edges()`](Self::parent_edges).
    pub fn dependant_subgraph_where<'a, F>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        mut selector: F,
    ) -> Result<Self>
    where
        F: FnMut(&Vertex<P>) -> bool,
    {
        let mut accept = |id: VertexId| self.vertex(id).is_ok_and(&mut selector);
        let descendants: Vec<VertexId> = self.descendants(vertex)?.collect();
        let mut keep = HashSet::new();
        for descendant in descendants {
            if !accept(descendant) {
                continue;
            }
            for ancestor in self.ancestors(descendant)? {
                if !keep.contains(&ancestor) && accept(ancestor) {
                    keep.insert(ancestor);
                }
            }
        }
        Ok(self.induced(&keep))
    }
}
