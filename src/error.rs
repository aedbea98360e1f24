/*
 * Responsibility
 * - Closed error taxonomy shared by handlers, services and middleware
 * - An AppError is a tag (ErrorKind) + cause + optional prefix message
 * - Classification is a tag comparison; HTTP translation lives in middleware::error_handler
 */
use std::{error::Error as StdError, fmt};

use crate::repos::error::RepoError;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Internal,
    Unauthorized,
    BadRequest,
    NotFound,
    Forbidden,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Internal,
        ErrorKind::Unauthorized,
        ErrorKind::BadRequest,
        ErrorKind::NotFound,
        ErrorKind::Forbidden,
    ];
}

pub struct AppError {
    kind: ErrorKind,
    message: Option<String>,
    cause: BoxError,
}

impl AppError {
    pub fn new(kind: ErrorKind, cause: impl Into<BoxError>) -> Self {
        Self {
            kind,
            message: None,
            cause: cause.into(),
        }
    }

    /// Same as [`AppError::new`], rendered as `"{message}: {cause}"`.
    pub fn with_message(
        kind: ErrorKind,
        cause: impl Into<BoxError>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            cause: cause.into(),
        }
    }

    pub fn internal(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Internal, cause)
    }

    pub fn unauthorized(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Unauthorized, cause)
    }

    pub fn bad_request(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::BadRequest, cause)
    }

    pub fn not_found(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::NotFound, cause)
    }

    pub fn forbidden(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Forbidden, cause)
    }

    pub fn internal_wrapped(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Internal, cause, message)
    }

    pub fn unauthorized_wrapped(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unauthorized, cause, message)
    }

    pub fn bad_request_wrapped(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::BadRequest, cause, message)
    }

    pub fn not_found_wrapped(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::NotFound, cause, message)
    }

    pub fn forbidden_wrapped(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Forbidden, cause, message)
    }

    /// Adds another message layer. The kind never changes.
    pub fn wrap(self, message: impl Into<String>) -> Self {
        let kind = self.kind;
        Self {
            kind,
            message: Some(message.into()),
            cause: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Outermost prefix message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind == ErrorKind::BadRequest
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind == ErrorKind::Forbidden
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", message, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => AppError::not_found(e),
            RepoError::Conflict => AppError::bad_request(e),
            RepoError::Db(_) => AppError::internal(e),
        }
    }
}
