//! Configured graph construction.

use core::marker::PhantomData;

use serde_json::Value;
use trellis_capability::{Capability, CapabilitySet};

use crate::error::Result;
use crate::graph::Graph;
use crate::policy::GraphKind;
use crate::vertex::{NewVertex, Payload};

/// Builder for a [`Graph`] with explicit capabilities, configuration options
/// and initial contents.
///
/// Without any [`capability()`](Self::capability) or
/// [`capabilities()`](Self::capabilities) call the kind's default set is used.
/// Naming a capability replaces the defaults entirely.
///
/// # Example
///
/// ```
/// use trellis_graph::prelude::*;
/// use trellis_graph::capability::{Ancestry, Connectedness};
///
/// let graph = DiGraph::<()>::builder()
///     .capability(Ancestry)
///     .capability(Connectedness)
///     .vertices(["a", "b"])
///     .edge("a", "b")
///     .build()
///     .unwrap();
///
/// assert!(graph.is_connected_to("b", "a").unwrap());
/// assert_eq!(graph.children("a").unwrap(), [graph.fetch("b").unwrap()]);
/// ```
pub struct GraphBuilder<K: GraphKind, P = ()> {
    capabilities: Option<CapabilitySet>,
    options: Vec<(String, Value)>,
    vertices: Vec<NewVertex<P>>,
    edges: Vec<(String, String)>,
    kind: PhantomData<K>,
}

impl<K: GraphKind, P: Payload> GraphBuilder<K, P> {
    pub(crate) fn new() -> Self {
        Self {
            capabilities: None,
            options: Vec::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            kind: PhantomData,
        }
    }

    /// Adds a capability. The first call discards the kind's defaults.
    #[must_use]
    pub fn capability<C: Capability>(mut self, capability: C) -> Self {
        let set = self.capabilities.take().unwrap_or_default();
        self.capabilities = Some(set.add(capability));
        self
    }

    /// Replaces the capability set wholesale.
    #[must_use]
    pub fn capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Adds a configuration option, routed to the first capability that
    /// recognizes `key`.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// Adds a vertex to create once the graph exists.
    #[must_use]
    pub fn vertex(mut self, vertex: impl Into<NewVertex<P>>) -> Self {
        self.vertices.push(vertex.into());
        self
    }

    /// Adds several vertices, in order.
    #[must_use]
    pub fn vertices<I>(mut self, vertices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NewVertex<P>>,
    {
        self.vertices.extend(vertices.into_iter().map(Into::into));
        self
    }

    /// Adds an edge between two named vertices, created after every vertex.
    #[must_use]
    pub fn edge(mut self, tail: impl Into<String>, head: impl Into<String>) -> Self {
        self.edges.push((tail.into(), head.into()));
        self
    }

    /// Prepares the capabilities and creates the graph.
    ///
    /// # Errors
    ///
    /// - capability errors from [`CapabilitySet::prepare()`]
    /// - any error adding the listed vertices or edges
    pub fn build(self) -> Result<Graph<K, P>> {
        let capabilities = self
            .capabilities
            .unwrap_or_else(K::default_capabilities)
            .prepare(self.options)?;
        let mut graph = Graph::with_capabilities(capabilities);
        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }
        for (tail, head) in &self.edges {
            graph.add_edge(tail.as_str(), head.as_str())?;
        }
        tracing::debug!(graph = %graph.id(), summary = %graph, "graph built");
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trellis_capability::{CapabilityError, Configured, Scope};

    use super::*;
    use crate::capability::{Ancestry, Connectedness};
    use crate::error::{ErrorKind, GraphError};
    use crate::graph::{Dag, MultiGraph};

    #[derive(Debug, Clone, Default)]
    struct Limit {
        max: u64,
        ready: bool,
    }

    impl Capability for Limit {
        fn scopes(&self) -> &'static [Scope] {
            &[Scope::Graph]
        }

        fn configure(&mut self, key: &str, value: &Value) -> Result<Configured, CapabilityError> {
            if key != "max" {
                return Ok(Configured::Unrecognized);
            }
            let max = value
                .as_u64()
                .ok_or_else(|| CapabilityError::invalid(self.name(), key, "expected an integer"))?;
            self.max = max;
            Ok(Configured::Applied)
        }

        fn initialize(&mut self) -> Result<(), CapabilityError> {
            self.ready = true;
            Ok(())
        }
    }

    #[test]
    fn defaults_apply_without_explicit_capabilities() {
        let graph = MultiGraph::<()>::builder().build().unwrap();
        assert!(graph.has_capability::<Connectedness>());
        assert!(!graph.has_capability::<Ancestry>());
    }

    #[test]
    fn naming_a_capability_replaces_defaults() {
        let graph = MultiGraph::<()>::builder().capability(Ancestry).build().unwrap();
        assert!(graph.has_capability::<Ancestry>());
        assert!(!graph.has_capability::<Connectedness>());
    }

    #[test]
    fn options_reach_their_capability() {
        let graph = MultiGraph::<()>::builder()
            .capability(Connectedness)
            .capability(Limit::default())
            .option("max", 3)
            .build()
            .unwrap();
        let limit = graph.capability::<Limit>().unwrap();
        assert_eq!(limit.max, 3);
        assert!(limit.ready);
    }

    #[test]
    fn unknown_option_fails() {
        let err = MultiGraph::<()>::builder()
            .option("colour", json!("red"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownConfiguration);
        assert_eq!(
            err,
            GraphError::Capability(CapabilityError::UnknownConfiguration {
                key: "colour".to_owned()
            })
        );
    }

    #[test]
    fn invalid_option_value_fails() {
        let err = MultiGraph::<()>::builder()
            .capability(Limit::default())
            .option("max", "many")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn duplicate_capability_fails() {
        let err = MultiGraph::<()>::builder()
            .capability(Connectedness)
            .capability(Connectedness)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateCapability);
    }

    #[test]
    fn initial_contents_are_added_in_order() {
        let graph = Dag::<()>::builder()
            .vertices(["a", "b", "c"])
            .edge("a", "b")
            .edge("b", "c")
            .build()
            .unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_descendant("a", "c").unwrap());
    }

    #[test]
    fn initial_edges_obey_policy() {
        let err = Dag::<()>::builder()
            .vertices(["a", "b"])
            .edge("a", "b")
            .edge("b", "a")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cyclic);
    }
}
