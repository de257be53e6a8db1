//! Built-in capabilities.
//!
//! | Capability | Scopes | Default for | Operations |
//! |------------|--------|-------------|------------|
//! | [`Connectedness`] | graph, vertex | undirected kinds | components, connected and disconnected subgraphs |
//! | [`Ancestry`] | graph, vertex | directed kinds | parents, children, ancestors, descendants and their subgraphs |
//!
//! Both are plain markers: the operations they unlock are methods on
//! [`Graph`](crate::Graph) that check for the capability first and fail with
//! [`GraphError::MissingCapability`](crate::GraphError::MissingCapability)
//! when the graph was built without it.

mod ancestry;
mod connectedness;

pub use ancestry::Ancestry;
pub use connectedness::Connectedness;
