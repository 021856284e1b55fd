//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs returning
//!   response-ready views.
//! - Re-shape repository outcomes into the caller-facing error taxonomy.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Missing records surface as `NotFound`, never as empty payloads.

use crate::model::{RecordId, ValidationError};
use crate::repo::{RecordKind, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exercise_service;
pub mod workout_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing error for all use-case services.
///
/// The excluded HTTP layer maps these onto status codes: `InvalidInput` and
/// `DuplicateName` are invalid-input outcomes, `NotFound` is a
/// missing-resource outcome, `Storage` is an internal failure.
#[derive(Debug)]
pub enum ServiceError {
    /// One or more fields failed validation; nothing was written.
    InvalidInput(ValidationError),
    /// Exercise name collides with an existing row.
    DuplicateName(String),
    /// Requested or referenced record does not exist.
    NotFound { kind: RecordKind, id: RecordId },
    /// Persistence-layer failure.
    Storage(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => write!(f, "exercise name already exists: `{name}`"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidInput(err),
            RepoError::DuplicateName(name) => Self::DuplicateName(name),
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Storage(other),
        }
    }
}
