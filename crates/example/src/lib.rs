//! Loads a directory tree into a trellis graph.
//!
//! Every filesystem entry under the root becomes a vertex named by its path,
//! carrying an [`Entry`] payload, with an edge from its parent directory.
//! Loading into a [`Dag`](trellis_graph::Dag) gives ancestry and topological
//! queries over the tree for free.
//!
//! # Example
//!
//! ```no_run
//! use example::{DirectoryLoader, LoaderConfig};
//! use trellis_graph::Dag;
//!
//! let mut graph = Dag::new();
//! let loaded = DirectoryLoader::new(LoaderConfig::new("."))
//!     .load(&mut graph)
//!     .unwrap();
//! println!("{loaded} entries, {} links", graph.edge_count());
//! ```

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use trellis_graph::policy::GraphKind;
use trellis_graph::{Graph, GraphError, NewVertex, Payload, VertexId};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while loading a directory tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A filesystem entry could not be inspected or listed.
    #[error("failed to read {}", path.display())]
    Io {
        /// The entry being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The graph refused a vertex or edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry
// ─────────────────────────────────────────────────────────────────────────────

/// What kind of filesystem object an entry is, without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link.
    Symlink,
    /// Anything else (sockets, devices, fifos).
    Other,
}

/// Vertex payload describing one filesystem entry.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    len: u64,
    links_to_directory: bool,
}

impl Entry {
    /// Inspects `path` without following a final symlink, then resolves the
    /// link target's type if it is one.
    fn inspect(path: &Path) -> Result<Self, LoadError> {
        let lstat = fs::symlink_metadata(path).map_err(|err| LoadError::io(path, err))?;
        let kind = kind_of(&lstat);
        // A dangling link is kept as a leaf.
        let links_to_directory = kind == EntryKind::Symlink
            && fs::metadata(path).is_ok_and(|stat| stat.is_dir());
        Ok(Self {
            path: path.to_owned(),
            name: path.to_string_lossy().into_owned(),
            kind,
            len: lstat.len(),
            links_to_directory,
        })
    }

    /// The entry's path as reached from the root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The entry's type.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Size in bytes reported by the filesystem for the entry itself.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// True if the entry reports a size of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True for symlinks whose target is a directory.
    #[must_use]
    pub fn links_to_directory(&self) -> bool {
        self.links_to_directory
    }
}

impl Payload for Entry {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn kind_of(metadata: &Metadata) -> EntryKind {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LoaderConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for a [`DirectoryLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    root: PathBuf,
    follow_links: bool,
    exclude_root: bool,
}

impl LoaderConfig {
    /// Loads the tree rooted at `root`, not following links, root included.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
            exclude_root: false,
        }
    }

    /// Descends into symlinked directories when `true`.
    #[must_use]
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Leaves the root itself out of the graph when `true`; its children
    /// become parentless.
    #[must_use]
    pub fn with_exclude_root(mut self, exclude_root: bool) -> Self {
        self.exclude_root = exclude_root;
        self
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether symlinked directories are followed.
    #[must_use]
    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Whether the root is left out of the graph.
    #[must_use]
    pub fn exclude_root(&self) -> bool {
        self.exclude_root
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DirectoryLoader
// ─────────────────────────────────────────────────────────────────────────────

/// Walks a directory tree and mirrors it into a graph.
///
/// Only [`Graph::add_vertex`] and [`Graph::add_edge`] are used, so any graph
/// kind works and any policy rejection surfaces as [`LoadError::Graph`].
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    config: LoaderConfig,
}

impl DirectoryLoader {
    /// Creates a loader.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// The loader's settings.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the tree into `graph` and returns the number of vertices added.
    ///
    /// Entries are visited depth first with siblings in name order, so a
    /// parent is always added before its children. A directory reached a
    /// second time through a followed link is added but not descended into
    /// again.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if an entry cannot be inspected or a directory listed
    /// - [`LoadError::Graph`] if the graph rejects a vertex or edge
    pub fn load<K: GraphKind>(&self, graph: &mut Graph<K, Entry>) -> Result<usize, LoadError> {
        let root = Entry::inspect(&self.config.root)?;
        let mut visited = HashSet::new();
        let mut pending = Vec::new();
        let mut added = 0;

        let root_vertex = if self.config.exclude_root {
            None
        } else {
            added += 1;
            Some(graph.add_vertex(NewVertex::with_payload(root.clone()))?)
        };
        if self.descends(&root, &mut visited)? {
            queue_children(&root, root_vertex, &mut pending)?;
        }

        while let Some((path, parent)) = pending.pop() {
            let entry = Entry::inspect(&path)?;
            let vertex = graph.add_vertex(NewVertex::with_payload(entry.clone()))?;
            if let Some(parent) = parent {
                graph.add_edge(parent, vertex)?;
            }
            added += 1;
            tracing::trace!(path = %path.display(), %vertex, kind = ?entry.kind, "entry loaded");

            if self.descends(&entry, &mut visited)? {
                queue_children(&entry, Some(vertex), &mut pending)?;
            }
        }

        tracing::debug!(
            root = %self.config.root.display(),
            graph = %graph.id(),
            added,
            "directory loaded"
        );
        Ok(added)
    }

    /// True if `entry` is a directory to list, marking it visited.
    fn descends(&self, entry: &Entry, visited: &mut HashSet<PathBuf>) -> Result<bool, LoadError> {
        let directory = match entry.kind {
            EntryKind::Directory => true,
            EntryKind::Symlink => self.config.follow_links && entry.links_to_directory,
            EntryKind::File | EntryKind::Other => false,
        };
        if !directory {
            return Ok(false);
        }
        let real = fs::canonicalize(&entry.path).map_err(|err| LoadError::io(&entry.path, err))?;
        Ok(visited.insert(real))
    }
}

/// Pushes the children of `entry` so they pop in name order.
fn queue_children(
    entry: &Entry,
    parent: Option<VertexId>,
    pending: &mut Vec<(PathBuf, Option<VertexId>)>,
) -> Result<(), LoadError> {
    let listing = fs::read_dir(&entry.path).map_err(|err| LoadError::io(&entry.path, err))?;
    let mut children = listing
        .map(|child| child.map(|child| child.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| LoadError::io(&entry.path, err))?;
    children.sort();
    pending.extend(children.into_iter().rev().map(|child| (child, parent)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_graph::{Dag, DiGraph, ErrorKind, SimpleGraph};

    /// root/{a.txt, sub/{b.txt, deeper/}}
    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("sub/b.txt"), "b").unwrap();
        dir
    }

    fn name(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn loads_every_entry_with_parent_edges() {
        let dir = tree();
        let mut graph = Dag::new();
        let added = DirectoryLoader::new(LoaderConfig::new(dir.path()))
            .load(&mut graph)
            .unwrap();

        assert_eq!(added, 5);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);

        let root = graph.fetch(&name(dir.path())).unwrap();
        let sub = graph.fetch(&name(&dir.path().join("sub"))).unwrap();
        let b = graph.fetch(&name(&dir.path().join("sub/b.txt"))).unwrap();
        assert_eq!(graph.roots().unwrap(), [root]);
        assert_eq!(graph.parents(b).unwrap(), [sub]);
        assert!(graph.is_ancestor(b, root).unwrap());
    }

    #[test]
    fn payload_describes_entry() {
        let dir = tree();
        let mut graph = DiGraph::new();
        DirectoryLoader::new(LoaderConfig::new(dir.path()))
            .load(&mut graph)
            .unwrap();

        let a = graph.payload(&name(&dir.path().join("a.txt"))).unwrap().unwrap();
        assert_eq!(a.kind(), EntryKind::File);
        assert_eq!(a.len(), 5);
        let sub = graph.payload(&name(&dir.path().join("sub"))).unwrap().unwrap();
        assert_eq!(sub.kind(), EntryKind::Directory);
    }

    #[test]
    fn topological_order_puts_directories_first() {
        let dir = tree();
        let mut graph = Dag::new();
        DirectoryLoader::new(LoaderConfig::new(dir.path()))
            .load(&mut graph)
            .unwrap();

        let order = graph.topological_ordering();
        let position = |path: &Path| {
            let id = graph.fetch(&name(path)).unwrap();
            order.iter().position(|&v| v == id).unwrap()
        };
        assert!(position(dir.path()) < position(&dir.path().join("sub")));
        assert!(position(&dir.path().join("sub")) < position(&dir.path().join("sub/b.txt")));
    }

    #[test]
    fn exclude_root_leaves_children_parentless() {
        let dir = tree();
        let mut graph = Dag::new();
        let added = DirectoryLoader::new(LoaderConfig::new(dir.path()).with_exclude_root(true))
            .load(&mut graph)
            .unwrap();

        assert_eq!(added, 4);
        assert!(graph.lookup(&name(dir.path())).is_none());
        assert_eq!(graph.roots().unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn links_are_followed_only_when_asked() {
        let dir = tree();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

        let mut plain = Dag::new();
        DirectoryLoader::new(LoaderConfig::new(dir.path()))
            .load(&mut plain)
            .unwrap();
        assert_eq!(plain.vertex_count(), 6);
        let link = plain.payload(&name(&dir.path().join("link"))).unwrap().unwrap();
        assert_eq!(link.kind(), EntryKind::Symlink);
        assert!(link.links_to_directory());

        let mut followed = Dag::new();
        DirectoryLoader::new(LoaderConfig::new(dir.path()).with_follow_links(true))
            .load(&mut followed)
            .unwrap();
        assert_eq!(followed.vertex_count(), 7);
        assert!(followed.lookup(&name(&dir.path().join("link/inside.txt"))).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn link_cycles_terminate() {
        let dir = tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/back")).unwrap();

        let mut graph = Dag::new();
        DirectoryLoader::new(LoaderConfig::new(dir.path()).with_follow_links(true))
            .load(&mut graph)
            .unwrap();
        // The link is an entry, but the root is not listed a second time.
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = Dag::new();
        let err = DirectoryLoader::new(LoaderConfig::new(dir.path().join("absent")))
            .load(&mut graph)
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn graph_errors_propagate() {
        let dir = tree();
        let mut graph = SimpleGraph::new();
        // Occupy a name the loader will need.
        graph
            .add_vertex(NewVertex::named(name(&dir.path().join("a.txt"))))
            .unwrap();
        let err = DirectoryLoader::new(LoaderConfig::new(dir.path()))
            .load(&mut graph)
            .unwrap_err();
        match err {
            LoadError::Graph(err) => assert_eq!(err.kind(), ErrorKind::DuplicateName),
            other => panic!("unexpected error: {other}"),
        }
    }
}
