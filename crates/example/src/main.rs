//! Directory tree CLI.
//!
//! Loads a directory into a DAG and prints a summary of its shape.
//!
//! # Usage
//!
//! ```bash
//! tree <dir> [--follow-links] [--exclude-root]
//! ```
//!
//! Log output is controlled by `TRELLIS_LOG` (an `EnvFilter` directive,
//! `warn` when unset).

use example::{DirectoryLoader, LoaderConfig};
use trellis_graph::{Dag, Vertex, VertexId};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const USAGE: &str = "Usage: tree <dir> [--follow-links] [--exclude-root]";

/// How many entries of the topological ordering to print.
const PREVIEW: usize = 10;

fn init_tracing() {
    let env_filter = match std::env::var("TRELLIS_LOG") {
        Ok(filter) => EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        Err(_) => EnvFilter::new("warn"),
    };
    // try_init().ok() ignores errors if already initialized
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command line output"
)]
fn main() {
    init_tracing();

    let mut root = None;
    let mut follow_links = false;
    let mut exclude_root = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--follow-links" => follow_links = true,
            "--exclude-root" => exclude_root = true,
            _ if root.is_none() => root = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                std::process::exit(1);
            }
        }
    }
    let Some(root) = root else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let config = LoaderConfig::new(root)
        .with_follow_links(follow_links)
        .with_exclude_root(exclude_root);
    let mut graph = Dag::new();
    if let Err(e) = DirectoryLoader::new(config).load(&mut graph) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    tracing::info!(%graph, "tree loaded");

    let label = |vertex: VertexId| {
        graph
            .vertex(vertex)
            .ok()
            .and_then(Vertex::name)
            .unwrap_or("?")
    };

    println!("{} entries, {} links", graph.vertex_count(), graph.edge_count());
    for source in graph.sources() {
        println!("source: {}", label(source));
    }
    let order = graph.topological_ordering();
    for vertex in order.iter().take(PREVIEW) {
        println!("  {}", label(*vertex));
    }
    if order.len() > PREVIEW {
        println!("  ... {} more", order.len() - PREVIEW);
    }
}
