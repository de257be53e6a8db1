//! Capability composition for trellis graphs.
//!
//! A graph instance is assembled from an ordered list of capabilities. Each
//! capability contributes a family of operations at one or more [`Scope`]s
//! (the graph itself, its vertices, its edges), may accept named configuration
//! options, and is initialized exactly once when the graph is built.
//!
//! - [`capability`] - the [`Capability`] trait and its identity type
//! - [`set`] - [`CapabilitySet`], the ordered builder a graph is constructed from
//! - [`error`] - configuration and composition errors
//!
//! # Example
//!
//! ```
//! use trellis_capability::prelude::*;
//! use serde_json::json;
//!
//! #[derive(Clone, Default)]
//! struct Labels {
//!     prefix: String,
//! }
//!
//! impl Capability for Labels {
//!     fn scopes(&self) -> &'static [Scope] {
//!         &[Scope::Vertex]
//!     }
//!
//!     fn configure(&mut self, key: &str, value: &serde_json::Value) -> Result<Configured, CapabilityError> {
//!         if key != "prefix" {
//!             return Ok(Configured::Unrecognized);
//!         }
//!         let prefix = value
//!             .as_str()
//!             .ok_or_else(|| CapabilityError::invalid(self.name(), key, "expected a string"))?;
//!         self.prefix = prefix.to_owned();
//!         Ok(Configured::Applied)
//!     }
//! }
//!
//! let set = CapabilitySet::new()
//!     .add(Labels::default())
//!     .prepare([("prefix".to_owned(), json!("node-"))])
//!     .unwrap();
//!
//! assert_eq!(set.get::<Labels>().unwrap().prefix, "node-");
//! assert!(set.extends(Scope::Vertex));
//! assert!(!set.extends(Scope::Edge));
//! ```

/// The capability trait and identity types.
pub mod capability;

/// Configuration and composition errors.
pub mod error;

/// Ordered capability collections.
pub mod set;

pub use capability::{Capability, CapabilityClone, CapabilityId, Configured, Scope};
pub use error::{CapabilityError, Result};
pub use set::CapabilitySet;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::capability::*;
    pub use crate::error::CapabilityError;
    pub use crate::set::*;
}
