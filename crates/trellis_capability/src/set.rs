//! Ordered capability collections.

use core::fmt;

use hashbrown::HashSet;
use serde_json::Value;

use crate::capability::{Capability, CapabilityId, Configured, Scope};
use crate::error::{CapabilityError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// BoxedCapability
// ─────────────────────────────────────────────────────────────────────────────

/// A boxed capability with its captured [`CapabilityId`].
struct BoxedCapability {
    id: CapabilityId,
    capability: Box<dyn Capability>,
}

impl Clone for BoxedCapability {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            capability: self.capability.clone_boxed(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CapabilitySet
// ─────────────────────────────────────────────────────────────────────────────

/// The ordered list of capabilities a graph instance is built with.
///
/// Order matters for configuration routing: an option is claimed by the
/// first capability that recognizes it.
///
/// # Example
///
/// ```ignore
/// let set = CapabilitySet::new()
///     .add(Connectedness)
///     .add(Ancestry)
///     .disable::<Connectedness>();
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CapabilitySet {
    entries: Vec<BoxedCapability>,
}

impl CapabilitySet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a capability to the end of the set.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "This is a builder method, not std::ops::Add"
    )]
    pub fn add<C: Capability>(mut self, capability: C) -> Self {
        self.entries.push(Self::boxed(capability));
        self
    }

    /// Adds a capability before `Target`.
    ///
    /// If `Target` is not in the set, the capability is added at the beginning.
    #[must_use]
    pub fn add_before<C: Capability, Target: Capability>(mut self, capability: C) -> Self {
        let position = self.position(CapabilityId::of::<Target>()).unwrap_or(0);
        self.entries.insert(position, Self::boxed(capability));
        self
    }

    /// Adds a capability after `Target`.
    ///
    /// If `Target` is not in the set, the capability is added at the end.
    #[must_use]
    pub fn add_after<C: Capability, Target: Capability>(mut self, capability: C) -> Self {
        let position = self
            .position(CapabilityId::of::<Target>())
            .map_or(self.entries.len(), |i| i + 1);
        self.entries.insert(position, Self::boxed(capability));
        self
    }

    /// Removes a capability from the set by type.
    ///
    /// If the capability is not present, this is a no-op.
    #[must_use]
    pub fn disable<C: Capability>(mut self) -> Self {
        let id = CapabilityId::of::<C>();
        self.entries.retain(|entry| entry.id != id);
        self
    }

    /// Returns the number of capabilities in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set contains no capabilities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a capability of type `C` is present.
    #[must_use]
    pub fn contains<C: Capability>(&self) -> bool {
        self.contains_id(CapabilityId::of::<C>())
    }

    /// Returns true if a capability with the given id is present.
    #[must_use]
    pub fn contains_id(&self, id: CapabilityId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the capability of type `C`, if present.
    #[must_use]
    pub fn get<C: Capability>(&self) -> Option<&C> {
        self.entries
            .iter()
            .find_map(|entry| entry.capability.downcast_ref::<C>())
    }

    /// Returns true if any capability in the set extends `scope`.
    #[must_use]
    pub fn extends(&self, scope: Scope) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.capability.extends(scope))
    }

    /// Returns the ids of all capabilities, in order.
    pub fn ids(&self) -> impl Iterator<Item = CapabilityId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Iterates over the capabilities, in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Capability> {
        self.entries.iter().map(|entry| entry.capability.as_ref())
    }

    /// Iterates over the capabilities that extend `scope`, in order.
    pub fn extending(&self, scope: Scope) -> impl Iterator<Item = &dyn Capability> {
        self.iter().filter(move |capability| capability.extends(scope))
    }

    /// Validates, configures and initializes the set.
    ///
    /// Each option is offered to the capabilities in order and claimed by the
    /// first one that recognizes it. Once every option is placed, each
    /// capability's `initialize` hook runs once.
    ///
    /// # Errors
    ///
    /// - [`CapabilityError::Duplicate`] if a capability type appears twice
    /// - [`CapabilityError::UnknownConfiguration`] if no capability claims an option
    /// - any error a capability returns while configuring or initializing
    pub fn prepare<I, K>(mut self, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        self.check_unique()?;
        for (key, value) in options {
            self.configure(key.as_ref(), &value)?;
        }
        for entry in &mut self.entries {
            entry.capability.initialize()?;
        }
        tracing::debug!(capabilities = ?self, "capability set prepared");
        Ok(self)
    }

    /// Offers a single option to the capabilities, in order.
    fn configure(&mut self, key: &str, value: &Value) -> Result<()> {
        for entry in &mut self.entries {
            if entry.capability.configure(key, value)? == Configured::Applied {
                tracing::trace!(capability = %entry.id, key, "configuration option applied");
                return Ok(());
            }
        }
        Err(CapabilityError::UnknownConfiguration {
            key: key.to_owned(),
        })
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(CapabilityError::Duplicate(entry.id.type_name()));
            }
        }
        Ok(())
    }

    fn position(&self, id: CapabilityId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn boxed<C: Capability>(capability: C) -> BoxedCapability {
        BoxedCapability {
            id: CapabilityId::of::<C>(),
            capability: Box::new(capability),
        }
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.id.short_name()))
            .finish()
    }
}
