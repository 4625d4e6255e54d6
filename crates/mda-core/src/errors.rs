//! Structured error types shared across MDA crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MdaError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (system, trajectory, temperature, etc.).
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

/// Canonical error type for the MDA pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MdaError {
    /// Unparseable file content. Fatal to the trajectory it belongs to.
    #[error("malformed input: {0}")]
    MalformedInput(ErrorInfo),
    /// Inconsistent series lengths within a trajectory.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(ErrorInfo),
    /// A regression is impossible (constant independent variable or N < 2).
    #[error("degenerate input: {0}")]
    DegenerateInput(ErrorInfo),
    /// Too few repetitions for variance-class statistics.
    #[error("insufficient samples: {0}")]
    InsufficientSamples(ErrorInfo),
    /// Invalid or inconsistent configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem and serialization failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
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

impl MdaError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MdaError::MalformedInput(info)
            | MdaError::ShapeMismatch(info)
            | MdaError::DegenerateInput(info)
            | MdaError::InsufficientSamples(info)
            | MdaError::Config(info)
            | MdaError::Io(info) => info,
        }
    }
}
