//! Shared test utilities for `trellis_graph` integration tests.
//!
//! Import via `mod test_utils;` in test files.

#![allow(
    dead_code,
    missing_docs,
    reason = "shared test utilities, not every item is used in every test binary"
)]

use std::sync::{Arc, Mutex};

use trellis_graph::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════════
// GRAPH HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Builds a graph of kind `K` from vertex names and `(tail, head)` pairs.
pub fn graph_of<K: GraphKind>(names: &[&str], edges: &[(&str, &str)]) -> Graph<K> {
    let mut graph = Graph::<K>::new();
    for name in names {
        graph.add_vertex(*name).expect("vertex names are unique");
    }
    for (tail, head) in edges {
        graph.add_edge(*tail, *head).expect("edge is admitted");
    }
    graph
}

/// The sample DAG `a -> b -> c`, `a -> d`.
pub fn sample_dag() -> Dag {
    graph_of(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("a", "d")])
}

/// Resolves vertex names to ids.
pub fn ids<K: GraphKind, P: Payload>(graph: &Graph<K, P>, names: &[&str]) -> Vec<VertexId> {
    names
        .iter()
        .map(|name| graph.fetch(name).expect("vertex exists"))
        .collect()
}

/// Names of the given vertices, with anonymous vertices as `"?"`.
pub fn names<K: GraphKind, P: Payload>(
    graph: &Graph<K, P>,
    vertices: impl IntoIterator<Item = VertexId>,
) -> Vec<String> {
    vertices
        .into_iter()
        .map(|id| {
            graph
                .vertex(id)
                .expect("vertex exists")
                .name()
                .unwrap_or("?")
                .to_owned()
        })
        .collect()
}

/// Asserts every edge's tail precedes its head in `order`.
pub fn assert_topological<P: Payload>(graph: &Dag<P>, order: &[VertexId]) {
    for edge in graph.edges() {
        let tail = order.iter().position(|&v| v == edge.tail());
        let head = order.iter().position(|&v| v == edge.head());
        if let (Some(tail), Some(head)) = (tail, head) {
            assert!(tail < head, "{edge} is out of order in {order:?}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDING PAYLOAD
// ═══════════════════════════════════════════════════════════════════════════════

/// Shared log of payload notifications.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: String) {
        self.0.lock().expect("log lock").push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().expect("log lock").clone()
    }

    pub fn clear(&self) {
        self.0.lock().expect("log lock").clear();
    }
}

/// A payload that names its vertex and logs every notification.
#[derive(Clone)]
pub struct Recorder {
    pub name: String,
    pub log: EventLog,
}

impl Recorder {
    pub fn new(name: &str, log: &EventLog) -> NewVertex<Self> {
        NewVertex::with_payload(Self {
            name: name.to_owned(),
            log: log.clone(),
        })
    }
}

impl Payload for Recorder {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn added_to_graph(&mut self, _vertex: VertexId) {
        self.log.push(format!("added {}", self.name));
    }

    fn removed_from_graph(&mut self, _vertex: VertexId) {
        self.log.push(format!("removed {}", self.name));
    }

    fn edge_added(&mut self, vertex: VertexId, edge: &Edge) {
        let role = if edge.tail() == vertex { "tail" } else { "head" };
        self.log.push(format!("{} gained edge as {role}", self.name));
    }

    fn edge_removed(&mut self, _vertex: VertexId, _edge: &Edge) {
        self.log.push(format!("{} lost edge", self.name));
    }
}
