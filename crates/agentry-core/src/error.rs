// Error types for configuration resolution

use thiserror::Error;

/// Result type alias for configuration resolution operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while resolving agent configuration
///
/// Both resolution variants indicate a configuration authoring mistake, not a
/// transient condition: retrying with the same inputs reproduces the same
/// error, so callers must not retry them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An alias chain revisited a name it had already traversed
    #[error("circular alias reference: {}", .path.join(" -> "))]
    CircularAlias {
        /// Names in traversal order, ending with the repeated name
        path: Vec<String>,
    },

    /// A required selection field was still unset after every precedence level
    #[error("agent '{agent}' has no value for required field '{field}'")]
    MissingField {
        agent: String,
        field: &'static str,
    },

    /// Static configuration could not be loaded or deserialized
    #[error("failed to load static configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a circular alias error from a traversal path
    pub fn circular(path: Vec<String>) -> Self {
        ConfigError::CircularAlias { path }
    }

    /// Create a missing field error
    pub fn missing(agent: impl Into<String>, field: &'static str) -> Self {
        ConfigError::MissingField {
            agent: agent.into(),
            field,
        }
    }

    /// Traversal path of a circular alias error, in visit order
    pub fn cycle_path(&self) -> Option<&[String]> {
        match self {
            ConfigError::CircularAlias { path } => Some(path),
            _ => None,
        }
    }
}
