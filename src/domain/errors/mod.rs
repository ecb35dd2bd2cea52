// Domain errors - Error kinds raised while resolving an extraction job

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed timestamp string
    Format(String),
    /// Start/stop out of order or outside the video
    Range(String),
    /// A resolver step ran before its inputs were prepared
    Preparation(String),
    /// Numeric precondition violated in a pure conversion
    Domain(String),
    /// Option value outside its allowed set
    Validation(String),
}

impl DomainError {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Format(_) => "format",
            DomainError::Range(_) => "range",
            DomainError::Preparation(_) => "preparation",
            DomainError::Domain(_) => "domain",
            DomainError::Validation(_) => "validation",
        }
    }

    /// Whether the error was caused by user input rather than a caller bug.
    ///
    /// `Preparation` means a resolver ran before defaulting filled its inputs,
    /// which no user input can produce.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, DomainError::Preparation(_))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Format(msg) => write!(f, "Invalid timestamp format: {}", msg),
            DomainError::Range(msg) => write!(f, "Invalid extraction range: {}", msg),
            DomainError::Preparation(msg) => write!(f, "Preparation error: {}", msg),
            DomainError::Domain(msg) => write!(f, "Domain error: {}", msg),
            DomainError::Validation(msg) => write!(f, "Invalid option: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
