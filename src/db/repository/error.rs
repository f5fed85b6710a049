//! Error types for repository operations.
//!
//! Every data-source failure is reported through [`RepositoryError`] with
//! structured context, so callers can decide between degrading a section of
//! the aggregation pass and surfacing the failure.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_clients")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "employee", "client", "summary")
    pub entity: Option<String>,
    /// The entity ID if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether this error is retryable
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity ID.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Transport or connection errors. Typically transient.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The backing source rejected or failed the query.
    #[error("Query error: {message} {context}")]
    QueryError {
        message: String,
        context: ErrorContext,
    },

    /// Requested entity was not found.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// A response failed shape validation at the decode boundary.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },

    /// Timeout waiting for the source to respond.
    #[error("Timeout error: {message} {context}")]
    TimeoutError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Create a connection error with context.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    /// Create a connection error with full context.
    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::QueryError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a query error with context.
    pub fn query_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::QueryError {
            message: message.into(),
            context,
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a validation error with context.
    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::TimeoutError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { context, .. } => context.retryable,
            Self::TimeoutError { context, .. } => context.retryable,
            Self::QueryError { context, .. } => context.retryable,
            _ => false,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. } => context,
            Self::QueryError { context, .. } => context,
            Self::NotFound { context, .. } => context,
            Self::ValidationError { context, .. } => context,
            Self::ConfigurationError { context, .. } => context,
            Self::InternalError { context, .. } => context,
            Self::TimeoutError { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::NotFound { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. }
            | Self::TimeoutError { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::internal(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::internal(s.to_string())
    }
}

#[cfg(feature = "remote-repo")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::timeout(err.to_string())
        } else if err.is_connect() {
            RepositoryError::connection(err.to_string())
        } else if err.is_decode() {
            RepositoryError::validation(err.to_string())
        } else {
            RepositoryError::query_with_context(
                err.to_string(),
                ErrorContext::default().with_details(
                    err.status()
                        .map(|s| format!("status={}", s))
                        .unwrap_or_else(|| "no_status".to_string()),
                ),
            )
        }
    }
}
