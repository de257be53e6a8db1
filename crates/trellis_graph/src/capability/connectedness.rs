//! Component queries on the undirected reading of a graph.

use hashbrown::HashSet;
use trellis_capability::{Capability, Scope};

use crate::error::Result;
use crate::graph::Graph;
use crate::id::{VertexId, VertexKey};
use crate::policy::GraphKind;
use crate::traversal::Direction;
use crate::vertex::Payload;

/// Connected-component operations.
///
/// Direction is ignored, so on directed graphs these describe weak
/// connectivity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Connectedness;

impl Capability for Connectedness {
    fn scopes(&self) -> &'static [Scope] {
        &[Scope::Graph, Scope::Vertex]
    }
}

impl<K: GraphKind, P: Payload> Graph<K, P> {
    /// Subgraph of the component containing `vertex`.
    ///
    /// # Errors
    ///
    /// [`MissingCapability`](crate::GraphError::MissingCapability) without
    /// [`Connectedness`], or resolution errors.
    pub fn connected_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        self.require::<Connectedness>(Scope::Vertex)?;
        let component = self.component_of(vertex)?;
        Ok(self.induced(&component))
    }

    /// Alias for [`connected_subgraph()`](Self::connected_subgraph).
    ///
    /// # Errors
    ///
    /// Same as [`connected_subgraph()`](Self::connected_subgraph).
    pub fn component<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        self.connected_subgraph(vertex)
    }

    /// Subgraph of every vertex outside the component containing `vertex`.
    ///
    /// # Errors
    ///
    /// Same as [`connected_subgraph()`](Self::connected_subgraph).
    pub fn disconnected_subgraph<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<Self> {
        self.require::<Connectedness>(Scope::Vertex)?;
        let component = self.component_of(vertex)?;
        let rest: HashSet<VertexId> = self
            .vertex_ids()
            .filter(|id| !component.contains(id))
            .collect();
        Ok(self.induced(&rest))
    }

    /// True if `vertex` and `other` lie in the same component. Reflexive.
    ///
    /// # Errors
    ///
    /// [`MissingCapability`](crate::GraphError::MissingCapability) without
    /// [`Connectedness`], or resolution errors (a vertex of another graph is
    /// a [`ForeignGraph`](crate::GraphError::ForeignGraph) error).
    pub fn is_connected_to<'a, 'b>(
        &self,
        vertex: impl Into<VertexKey<'a>>,
        other: impl Into<VertexKey<'b>>,
    ) -> Result<bool> {
        self.require::<Connectedness>(Scope::Vertex)?;
        self.is_reachable(vertex, other)
    }

    /// The vertex sets of all components, each in discovery order, ordered
    /// by their first vertex's insertion.
    ///
    /// # Errors
    ///
    /// [`MissingCapability`](crate::GraphError::MissingCapability) without
    /// [`Connectedness`].
    pub fn components(&self) -> Result<Vec<Vec<VertexId>>> {
        self.require::<Connectedness>(Scope::Graph)?;
        let mut seen = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();
        for vertex in self.vertex_ids() {
            if seen.contains(&vertex) {
                continue;
            }
            let component: Vec<VertexId> = self.walk(vertex, Direction::Adjacent).collect();
            seen.extend(component.iter().copied());
            components.push(component);
        }
        Ok(components)
    }

    fn component_of<'a>(&self, vertex: impl Into<VertexKey<'a>>) -> Result<HashSet<VertexId>> {
        let id = self.resolve(vertex)?;
        Ok(self.walk(id, Direction::Adjacent).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::{DiGraph, MultiGraph, SimpleGraph};

    /// Two components: a - b - c and d - e, plus isolated f.
    fn forest() -> SimpleGraph {
        let mut graph = SimpleGraph::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            graph.add_vertex(name).unwrap();
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("d", "e").unwrap();
        graph
    }

    #[test]
    fn connected_subgraph_is_the_component() {
        let graph = forest();
        let component = graph.connected_subgraph("a").unwrap();
        assert_eq!(component.vertex_count(), 3);
        assert_eq!(component.edge_count(), 2);
        assert!(component.is_connected());
        assert!(component.has_capability::<Connectedness>());
    }

    #[test]
    fn disconnected_subgraph_is_the_rest() {
        let graph = forest();
        let rest = graph.disconnected_subgraph("a").unwrap();
        assert_eq!(rest.vertex_count(), 3);
        assert_eq!(rest.edge_count(), 1);
        assert!(rest.lookup("a").is_none());
        assert!(rest.lookup("f").is_some());
    }

    #[test]
    fn components_partition_vertices() {
        let graph = forest();
        let components = graph.components().unwrap();
        let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        assert_eq!(sizes, [3, 2, 1]);
    }

    #[test]
    fn is_connected_to() {
        let graph = forest();
        assert!(graph.is_connected_to("a", "c").unwrap());
        assert!(graph.is_connected_to("f", "f").unwrap());
        assert!(!graph.is_connected_to("a", "d").unwrap());

        let other = forest();
        let foreign = other.fetch("a").unwrap();
        assert_eq!(
            graph.is_connected_to("a", foreign).unwrap_err().kind(),
            ErrorKind::GraphMembership
        );
    }

    #[test]
    fn directed_graphs_lack_connectedness_by_default() {
        let mut graph = DiGraph::<()>::new();
        graph.add_vertex("a").unwrap();
        let err = graph.connected_subgraph("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCapability);
        assert!(graph.components().is_err());
    }

    #[test]
    fn directed_graphs_can_opt_in() {
        let mut graph = DiGraph::<()>::builder()
            .capability(Connectedness)
            .build()
            .unwrap();
        graph.add_vertex("a").unwrap();
        graph.add_vertex("b").unwrap();
        graph.add_edge("b", "a").unwrap();
        assert!(graph.is_connected_to("a", "b").unwrap());
    }

    #[test]
    fn capability_missing_on_explicit_empty_set() {
        let mut graph = MultiGraph::<()>::builder()
            .capabilities(trellis_capability::CapabilitySet::new())
            .build()
            .unwrap();
        graph.add_vertex("a").unwrap();
        assert!(graph.connected_subgraph("a").is_err());
        // Structural queries stay available.
        assert!(graph.is_connected());
    }
}
