//! Subgraph extraction.
//!
//! A subgraph is an independent instance of the same kind: new identity,
//! copies of the surviving vertices and edges, and the parent's capabilities.

mod test_utils;

use test_utils::{EventLog, Recorder, graph_of, ids, names, sample_dag};
use trellis_graph::capability::{Ancestry, Connectedness};
use trellis_graph::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════════
// INDEPENDENCE
// ═══════════════════════════════════════════════════════════════════════════════

/// A full copy has the same shape but a different identity.
#[test]
fn full_copy_round_trip() {
    let graph = sample_dag();
    let copy = graph.subgraph();

    assert_ne!(copy.id(), graph.id());
    assert_eq!(copy.vertex_count(), graph.vertex_count());
    assert_eq!(copy.edge_count(), graph.edge_count());
    assert_eq!(
        names(&copy, copy.vertex_ids()),
        names(&graph, graph.vertex_ids())
    );
    for vertex in graph.vertex_ids() {
        assert!(!copy.contains_vertex(vertex));
        assert!(copy.counterpart(vertex).is_some());
    }
}

/// Mutating either side leaves the other untouched.
#[test]
fn copies_are_independent() {
    let mut graph = sample_dag();
    let mut copy = graph.subgraph();

    copy.remove_vertex("b").unwrap();
    graph.add_vertex("e").unwrap();
    graph.add_edge("d", "e").unwrap();

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(copy.vertex_count(), 3);
    assert_eq!(copy.edge_count(), 1);
    assert!(copy.lookup("e").is_none());
}

/// Ids of the parent are foreign to the copy; `counterpart` translates them.
#[test]
fn parent_ids_are_foreign_to_copy() {
    let graph = sample_dag();
    let copy = graph.subgraph();
    let a = graph.fetch("a").unwrap();

    assert_eq!(
        copy.vertex(a).unwrap_err().kind(),
        ErrorKind::GraphMembership
    );
    let mapped = copy.counterpart(a).unwrap();
    assert_eq!(copy.vertex(mapped).unwrap().name(), Some("a"));

    let edge = graph.edges().next().map(Edge::id).unwrap();
    let copied = copy.edge_counterpart(edge).unwrap();
    assert_eq!(copy.edge(copied).unwrap().tail(), mapped);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SELECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Only edges with both endpoints kept survive.
#[test]
fn induced_subgraph_keeps_inner_edges() {
    let graph = sample_dag();
    let sub = graph.subgraph_of(["a", "b", "c"]).unwrap();
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 2);
    assert!(sub.lookup("d").is_none());
}

/// Predicate selection sees each vertex record.
#[test]
fn predicate_selection() {
    let graph: MultiGraph = graph_of(&["x1", "y1", "x2"], &[("x1", "y1"), ("x1", "x2")]);
    let sub = graph.subgraph_where(|vertex| vertex.name().is_some_and(|n| n.starts_with('x')));
    assert_eq!(names(&sub, sub.vertex_ids()), ["x1", "x2"]);
    assert_eq!(sub.edge_count(), 1);
}

/// Resolution errors abort extraction.
#[test]
fn unknown_vertex_aborts_extraction() {
    let graph = sample_dag();
    assert_eq!(
        graph.subgraph_of(["a", "zzz"]).unwrap_err(),
        GraphError::NameNotFound("zzz".to_owned())
    );
}

/// New vertices in a copy never collide with copied ones.
#[test]
fn fresh_ids_after_extraction() {
    let graph = sample_dag();
    let mut sub = graph.subgraph_of(["a"]).unwrap();
    let fresh = sub.add_vertex("z").unwrap();
    let copied = ids(&sub, &["a"])[0];
    assert_ne!(fresh, copied);
    assert_eq!(sub.vertex_count(), 2);
}

// ═══════════════════════════════════════════════════════════════════════════════
// CAPABILITIES & PAYLOADS
// ═══════════════════════════════════════════════════════════════════════════════

/// Subgraphs keep the capability surface of their parent.
#[test]
fn capability_surface_is_inherited() {
    let graph = DiGraph::<()>::builder()
        .capability(Connectedness)
        .vertices(["a", "b", "c"])
        .edge("a", "b")
        .build()
        .unwrap();

    let sub = graph.subgraph();
    assert!(sub.has_capability::<Connectedness>());
    assert!(!sub.has_capability::<Ancestry>());
    assert_eq!(sub.components().unwrap().len(), 2);
    assert_eq!(
        sub.parents("b").unwrap_err().kind(),
        ErrorKind::MissingCapability
    );
}

/// Copying payloads into a subgraph does not notify them.
#[test]
fn extraction_does_not_notify_payloads() {
    let log = EventLog::default();
    let mut graph = DiGraph::<Recorder>::new();
    graph.add_vertex(Recorder::new("a", &log)).unwrap();
    graph.add_vertex(Recorder::new("b", &log)).unwrap();
    graph.add_edge("a", "b").unwrap();
    log.clear();

    let sub = graph.subgraph();
    assert!(log.events().is_empty());
    assert_eq!(sub.payload("a").unwrap().map(|p| p.name.as_str()), Some("a"));
}
