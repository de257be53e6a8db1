//! Payload naming and notifications.

mod test_utils;

use test_utils::{EventLog, Recorder};
use trellis_graph::prelude::*;

/// A payload's name registers the vertex when no explicit name is given.
#[test]
fn payload_names_its_vertex() {
    let log = EventLog::default();
    let mut graph = MultiGraph::<Recorder>::new();
    let a = graph.add_vertex(Recorder::new("a", &log)).unwrap();
    assert_eq!(graph.fetch("a").unwrap(), a);

    let err = graph.add_vertex(Recorder::new("a", &log)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    // The rejected vertex was never announced.
    assert_eq!(log.events(), ["added a"]);
}

/// An explicit name wins over the payload's.
#[test]
fn explicit_name_wins() {
    let log = EventLog::default();
    let mut graph = MultiGraph::<Recorder>::new();
    let vertex = Recorder::new("inner", &log).name("outer");
    graph.add_vertex(vertex).unwrap();
    assert!(graph.lookup("outer").is_some());
    assert!(graph.lookup("inner").is_none());
}

/// Each distinct endpoint hears about edge insertion and removal once.
#[test]
fn edge_notifications_reach_both_endpoints() {
    let log = EventLog::default();
    let mut graph = DiGraph::<Recorder>::new();
    graph.add_vertex(Recorder::new("a", &log)).unwrap();
    graph.add_vertex(Recorder::new("b", &log)).unwrap();
    log.clear();

    let edge = graph.add_edge("a", "b").unwrap();
    assert_eq!(log.events(), ["a gained edge as tail", "b gained edge as head"]);

    log.clear();
    graph.remove_edge(edge).unwrap();
    assert_eq!(log.events(), ["a lost edge", "b lost edge"]);
}

/// A loop notifies its vertex once.
#[test]
fn loop_notifies_once() {
    let log = EventLog::default();
    let mut graph = DiGraph::<Recorder>::new();
    graph.add_vertex(Recorder::new("a", &log)).unwrap();
    log.clear();

    graph.add_loop("a").unwrap();
    assert_eq!(log.events(), ["a gained edge as tail"]);
}

/// Removing a vertex reports each lost edge before the removal itself.
#[test]
fn removal_notifications_cascade() {
    let log = EventLog::default();
    let mut graph = DiGraph::<Recorder>::new();
    for name in ["a", "b", "c"] {
        graph.add_vertex(Recorder::new(name, &log)).unwrap();
    }
    graph.add_edge("a", "b").unwrap();
    graph.add_edge("c", "b").unwrap();
    log.clear();

    let removed = graph.remove_vertex("b").unwrap();
    assert_eq!(
        log.events(),
        ["a lost edge", "b lost edge", "c lost edge", "b lost edge", "removed b"]
    );
    assert_eq!(removed.into_payload().map(|payload| payload.name), Some("b".to_owned()));
}

/// A rejected edge notifies nobody.
#[test]
fn rejected_edge_is_silent() {
    let log = EventLog::default();
    let mut graph = Dag::<Recorder>::new();
    graph.add_vertex(Recorder::new("a", &log)).unwrap();
    graph.add_vertex(Recorder::new("b", &log)).unwrap();
    graph.add_edge("a", "b").unwrap();
    log.clear();

    assert!(graph.add_edge("b", "a").is_err());
    assert!(log.events().is_empty());
}

/// Payloads stay reachable for mutation through the graph.
#[test]
fn payload_mut_edits_in_place() {
    let log = EventLog::default();
    let mut graph = MultiGraph::<Recorder>::new();
    graph.add_vertex(Recorder::new("a", &log)).unwrap();
    if let Some(payload) = graph.payload_mut("a").unwrap() {
        payload.name.push('!');
    }
    // The registered name is fixed at insertion.
    assert_eq!(graph.payload("a").unwrap().map(|p| p.name.as_str()), Some("a!"));
}
