//! Structured error types for binding-friendly API.
//!
//! These error types are designed to be easily converted to JSON
//! for FFI boundaries while providing rich error information.

use std::fmt;

use pistes_analysis::AnalysisError;
use pistes_settings::SettingsError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::SessionError;

/// Error codes for pistes operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A word has no main word and the policy is to abort.
    MalformedExpression,
    /// Invalid JSON input.
    InvalidJson,
    /// Invalid settings/arguments.
    InvalidSettings,
    /// Unknown operation mode.
    UnknownMode,
    /// The clipboard could not be read.
    ClipboardUnavailable,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::MalformedExpression => write!(f, "malformed_expression"),
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
            ErrorCode::UnknownMode => write!(f, "unknown_mode"),
            ErrorCode::ClipboardUnavailable => write!(f, "clipboard_unavailable"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error for FFI-friendly error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PistesError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl PistesError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidJson, format!("Invalid JSON: {}", err))
    }

    pub fn unknown_mode(mode: &str) -> Self {
        Self::new(ErrorCode::UnknownMode, format!("Unknown mode: {}", mode))
    }

    /// A JSON argument has the wrong type.
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid value for '{}': expected {}", field, expected),
        )
    }

    pub fn invalid_settings(err: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid settings: {}", err),
        )
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {}", err))
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for PistesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for PistesError {}

impl From<AnalysisError> for PistesError {
    fn from(err: AnalysisError) -> Self {
        let AnalysisError::MalformedExpression { word, .. } = &err;
        Self::with_details(ErrorCode::MalformedExpression, err.to_string(), word.clone())
    }
}

impl From<SettingsError> for PistesError {
    fn from(err: SettingsError) -> Self {
        Self::invalid_settings(err)
    }
}

impl From<SessionError> for PistesError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Clipboard(inner) => {
                Self::new(ErrorCode::ClipboardUnavailable, inner.to_string())
            }
            SessionError::Settings(inner) => Self::invalid_settings(inner),
            SessionError::Analysis(inner) => inner.into(),
        }
    }
}

impl From<anyhow::Error> for PistesError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(analysis) = err.downcast_ref::<AnalysisError>() {
            return analysis.clone().into();
        }
        if let Some(settings) = err.downcast_ref::<SettingsError>() {
            return Self::invalid_settings(settings);
        }
        Self::internal(err)
    }
}

impl From<serde_json::Error> for PistesError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

/// `{"ok": true, "data": ...}` or `{"ok": false, "error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PistesError>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &PistesError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.clone()),
        }
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| match &self.error {
            Some(err) => format!(r#"{{"ok":false,"error":{}}}"#, err.to_json()),
            None => r#"{"ok":false,"error":{"code":"internal_error","message":"Unserializable response"}}"#
                .to_string(),
        })
    }
}
