//! The capability trait.
//!
//! Capabilities are selected per graph instance. Two graphs of the same type
//! built with different capability lists answer different sets of operations,
//! and an operation backed by a capability the graph was not built with is
//! refused at run time.

use core::any::TypeId;
use core::fmt;

use downcast_rs::{DowncastSync, impl_downcast};
use serde_json::Value;

use crate::error::CapabilityError;

// ─────────────────────────────────────────────────────────────────────────────
// Scope
// ─────────────────────────────────────────────────────────────────────────────

/// The part of a graph a capability contributes operations to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Operations on the graph as a whole.
    Graph,
    /// Operations answered for a single vertex.
    Vertex,
    /// Operations answered for a single edge.
    Edge,
}

impl Scope {
    /// All scopes, in declaration order.
    pub const ALL: [Scope; 3] = [Scope::Graph, Scope::Vertex, Scope::Edge];

    /// Returns the lowercase scope name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Graph => "graph",
            Scope::Vertex => "vertex",
            Scope::Edge => "edge",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CapabilityId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a capability type.
///
/// Used for duplicate detection and for the run-time capability checks that
/// gate optional graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityId {
    type_id: TypeId,
    type_name: &'static str,
}

impl CapabilityId {
    /// Creates a `CapabilityId` for the given capability type.
    #[must_use]
    pub fn of<C: Capability>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            type_name: core::any::type_name::<C>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the type name without its module path.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(self.type_name)
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of offering a configuration option to a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configured {
    /// The capability recognized the option and applied it.
    Applied,
    /// The option is not one this capability understands.
    Unrecognized,
}

/// A family of operations a graph instance may be built with.
///
/// Capabilities follow a short lifecycle driven by the graph builder:
///
/// 1. **Configure** - every named option is offered to each capability in set
///    order through [`configure()`](Self::configure); the first one returning
///    [`Configured::Applied`] claims it.
/// 2. **Initialize** - [`initialize()`](Self::initialize) is called once per
///    capability, in set order.
///
/// Subgraphs receive clones of their parent's capabilities (through
/// [`CapabilityClone`]) in their configured, initialized state.
///
/// Implementors usually only need `#[derive(Clone)]` and
/// [`scopes()`](Self::scopes).
pub trait Capability: DowncastSync + CapabilityClone {
    /// The scopes this capability extends.
    fn scopes(&self) -> &'static [Scope];

    /// Returns true if this capability contributes operations at `scope`.
    fn extends(&self, scope: Scope) -> bool {
        self.scopes().contains(&scope)
    }

    /// Offers a named configuration option.
    ///
    /// Return [`Configured::Unrecognized`] for options that belong to some
    /// other capability, and an error only when the option is recognized but
    /// its value is unusable.
    fn configure(&mut self, _key: &str, _value: &Value) -> Result<Configured, CapabilityError> {
        Ok(Configured::Unrecognized)
    }

    /// Called exactly once after configuration completes.
    fn initialize(&mut self) -> Result<(), CapabilityError> {
        Ok(())
    }

    /// Returns the capability's name for debugging and error messages.
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

impl_downcast!(sync Capability);

/// Object-safe cloning for boxed capabilities.
///
/// Implemented automatically for every `Capability + Clone`.
pub trait CapabilityClone {
    /// Clones this capability into a new box.
    fn clone_boxed(&self) -> Box<dyn Capability>;
}

impl<C: Capability + Clone> CapabilityClone for C {
    fn clone_boxed(&self) -> Box<dyn Capability> {
        Box::new(self.clone())
    }
}
