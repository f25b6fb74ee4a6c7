use thiserror::Error;

/// Errors raised while loading or rendering a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid tree data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no '{name}' decorator registered for node '{node}'")]
    MissingDecorator { name: String, node: String },
}

/// Errors reported by a gesture host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    /// The element has not been committed to the host yet.
    #[error("element '{0}' is not mounted")]
    TargetNotMounted(String),
}
