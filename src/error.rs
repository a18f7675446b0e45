use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Errors raised by the pricing engine
///
/// Every estimate either succeeds completely or fails with one of these;
/// no partial breakdown is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// A numeric input is negative or not a finite number
    #[error("invalid value for '{field}': {value} (must be a non-negative number)")]
    Validation { field: &'static str, value: f64 },

    /// An enumerated selection is missing from its pricing table
    #[error("unknown key '{key}' in {table} table")]
    Configuration { table: &'static str, key: String },

    /// The key exists but the deployment profile does not expose it
    #[error("{what} '{key}' is not offered by this deployment")]
    NotOffered { what: &'static str, key: String },
}

impl PricingError {
    pub fn validation(field: &'static str, value: f64) -> Self {
        Self::Validation { field, value }
    }

    pub fn unknown_key(table: &'static str, key: impl Into<String>) -> Self {
        Self::Configuration {
            table,
            key: key.into(),
        }
    }

    pub fn not_offered(what: &'static str, key: impl Into<String>) -> Self {
        Self::NotOffered {
            what,
            key: key.into(),
        }
    }

    /// Stable error class name used in logs, metrics and API responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Configuration { .. } | Self::NotOffered { .. } => "config_error",
        }
    }
}

/// Application error types for the HTTP surface
#[derive(Debug)]
pub enum AppError {
    /// Estimate rejected by the pricing engine
    Pricing(PricingError),
    /// Request body could not be decoded
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pricing(err) => match err {
                PricingError::Validation { .. } => write!(f, "Validation error: {}", err),
                _ => write!(f, "Configuration error: {}", err),
            },
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Pricing(PricingError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            // Unknown table keys mean the offered choices and the tables disagree
            Self::Pricing(PricingError::Configuration { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Pricing(PricingError::NotOffered { .. }) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Self::Pricing(err) => err.to_string(),
            Self::BadRequest(msg) | Self::InternalError(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

pub fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::Pricing(err) => err.kind(),
        AppError::BadRequest(_) => "bad_request",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        Self::Pricing(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}
