//! Entity validation errors
//!
//! Any entity that checks its own invariants reports failures through
//! [`EntityValidationError`], carrying one [`ValidationIssue`] per violated rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single violated invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Name of the offending field
    pub path: String,
    /// Human readable description of the rule that failed
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// An entity failed its own validation
///
/// Issues keep the order in which the rules were evaluated. The error is not
/// retryable: the caller has to supply corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity} validation failed")]
pub struct EntityValidationError {
    entity: String,
    issues: Vec<ValidationIssue>,
}

impl EntityValidationError {
    pub fn new(entity: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        Self {
            entity: entity.into(),
            issues,
        }
    }

    /// Name of the entity that failed validation (e.g. "Video")
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Violated invariants, in evaluation order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}
