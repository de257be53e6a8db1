//! Errors raised while composing and configuring capabilities.

/// Errors that can occur while assembling a [`CapabilitySet`](crate::CapabilitySet).
///
/// All of these are detected while a graph is being built, before any graph
/// state exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// No capability in the set recognized a configuration option.
    #[error("unknown configuration option '{key}'")]
    UnknownConfiguration {
        /// The unrecognized option name.
        key: String,
    },

    /// A capability recognized an option but rejected its value.
    #[error("invalid value for option '{key}' of {capability}: {reason}")]
    InvalidConfiguration {
        /// Name of the capability that claimed the option.
        capability: String,
        /// The option name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The same capability type was added to a set more than once.
    #[error("capability {0} was added more than once")]
    Duplicate(&'static str),

    /// A capability's one-time initialization failed.
    #[error("capability {capability} failed to initialize: {reason}")]
    Initialization {
        /// Name of the failing capability.
        capability: String,
        /// Failure description.
        reason: String,
    },
}

impl CapabilityError {
    /// Builds an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    #[must_use]
    pub fn invalid(
        capability: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            capability: capability.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Builds an [`Initialization`](Self::Initialization) error.
    #[must_use]
    pub fn initialization(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Initialization {
            capability: capability.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for capability composition.
pub type Result<T, E = CapabilityError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_configuration_display() {
        let err = CapabilityError::UnknownConfiguration {
            key: "depth".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown configuration option 'depth'");
    }

    #[test]
    fn invalid_configuration_display_names_capability() {
        let err = CapabilityError::invalid("Labels", "prefix", "expected a string");
        let msg = err.to_string();
        assert!(msg.contains("prefix"));
        assert!(msg.contains("Labels"));
        assert!(msg.contains("expected a string"));
    }
}
