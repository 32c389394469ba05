//! Structured error types shared across PVR crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`PvrError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending input, record position, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PvrError {
    /// Malformed or unparseable version strings.
    #[error("version error: {0}")]
    Version(ErrorInfo),
    /// Invalid filter or sort requests.
    #[error("query error: {0}")]
    Query(ErrorInfo),
    /// Catalog loading and ingestion failures.
    #[error("catalog error: {0}")]
    Catalog(ErrorInfo),
    /// Draft validation failures.
    #[error("draft error: {0}")]
    Draft(ErrorInfo),
    /// Serialization and format errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl PvrError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PvrError::Version(info)
            | PvrError::Query(info)
            | PvrError::Catalog(info)
            | PvrError::Draft(info)
            | PvrError::Serde(info) => info,
        }
    }

    /// Attaches an additional context entry, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            PvrError::Version(info) => PvrError::Version(info.with_context(key, value)),
            PvrError::Query(info) => PvrError::Query(info.with_context(key, value)),
            PvrError::Catalog(info) => PvrError::Catalog(info.with_context(key, value)),
            PvrError::Draft(info) => PvrError::Draft(info.with_context(key, value)),
            PvrError::Serde(info) => PvrError::Serde(info.with_context(key, value)),
        }
    }
}
