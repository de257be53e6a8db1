//! Reachability order on DAG vertices and topological sorting.

use core::cmp::Ordering;
use core::fmt;

use hashbrown::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::Dag;
use crate::id::{VertexId, VertexKey};
use crate::traversal::Direction;
use crate::vertex::Payload;

/// A DAG vertex compared by reachability.
///
/// `a < b` when `b` is a successor of `a`. The order is not lawful: two
/// vertices with no path between them each compare greater than the other.
/// [`Dag::topological_ordering()`] sorts with an insertion sort that only
/// relies on ancestors comparing less. The sort computes each vertex's
/// successors once up front, so it never repeats a walk per comparison.
pub struct PartialOrder<'g, P = ()> {
    graph: &'g Dag<P>,
    vertex: VertexId,
}

impl<'g, P: Payload> PartialOrder<'g, P> {
    /// Wraps `vertex` of `graph`.
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`Graph::resolve()`](crate::Graph::resolve).
    pub fn new<'a>(graph: &'g Dag<P>, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        let vertex = graph.resolve(vertex)?;
        Ok(Self { graph, vertex })
    }

    /// The wrapped vertex.
    #[must_use]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Compares two wrapped vertices.
    ///
    /// # Errors
    ///
    /// [`GraphError::ForeignGraph`] if the wrappers come from different graphs.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        if self.graph.id() != other.graph.id() {
            return Err(GraphError::foreign(
                other.vertex,
                self.graph.id(),
                other.graph.id(),
            ));
        }
        if self.vertex == other.vertex {
            return Ok(Ordering::Equal);
        }
        let reaches = self
            .graph
            .walk(self.vertex, Direction::Successors)
            .any(|vertex| vertex == other.vertex);
        Ok(if reaches {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}

impl<P: Payload> PartialEq for PartialOrder<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.graph.id() == other.graph.id() && self.vertex == other.vertex
    }
}

impl<P: Payload> PartialOrd for PartialOrder<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<P: Payload> fmt::Debug for PartialOrder<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialOrder")
            .field("graph", &self.graph.id())
            .field("vertex", &self.vertex)
            .finish()
    }
}

impl<P: Payload> Dag<P> {
    /// Wraps `vertex` in a [`PartialOrder`].
    ///
    /// # Errors
    ///
    /// Resolution errors, see [`resolve()`](Self::resolve).
    pub fn partial_order<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<PartialOrder<'_, P>> {
        PartialOrder::new(self, vertex)
    }

    /// Every vertex, ordered so each edge's tail precedes its head.
    ///
    /// Vertices with no path between them keep their insertion order where
    /// possible.
    #[must_use]
    pub fn topological_ordering(&self) -> Vec<VertexId> {
        sort(self, self.vertex_ids().collect())
    }

    /// The listed vertices, ordered so that any tail among them precedes its
    /// head.
    ///
    /// # Errors
    ///
    /// Resolution errors for any listed vertex.
    pub fn topological_ordering_of<'a, I>(&self, vertices: I) -> Result<Vec<VertexId>>
    where
        I: IntoIterator,
        I::Item: Into<VertexKey<'a>>,
    {
        let items = vertices
            .into_iter()
            .map(|vertex| self.resolve(vertex))
            .collect::<Result<Vec<_>>>()?;
        Ok(sort(self, items))
    }
}

/// A vertex with its successors, the cached form of a [`PartialOrder`].
struct Ranked {
    vertex: VertexId,
    successors: HashSet<VertexId>,
}

impl Ranked {
    /// Same result as [`PartialOrder::try_cmp()`] for two vertices of one graph.
    fn compare(&self, other: &Self) -> Ordering {
        if self.vertex == other.vertex {
            Ordering::Equal
        } else if self.successors.contains(&other.vertex) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Stable insertion sort using the [`PartialOrder`] comparison.
///
/// Each new item moves left past every item it is not reachable from and
/// stops behind its nearest ancestor, which keeps the sorted prefix
/// topologically valid without needing a transitive comparator.
fn sort<P: Payload>(graph: &Dag<P>, vertices: Vec<VertexId>) -> Vec<VertexId> {
    let mut items: Vec<Ranked> = vertices
        .into_iter()
        .map(|vertex| Ranked {
            vertex,
            successors: graph.walk(vertex, Direction::Successors).collect(),
        })
        .collect();
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1].compare(&items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
    tracing::trace!(graph = %graph.id(), vertices = items.len(), "topological sort finished");
    items.into_iter().map(|item| item.vertex).collect()
}
