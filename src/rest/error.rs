use crate::lot::Column;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_column(column: Column) -> Self {
        Self::new(
            RestApiErrorCode::MissingColumn,
            format!("Column '{column}' not found in sheet header."),
        )
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            RestApiErrorCode::MethodNotAllowed,
            "Only GET is supported on this endpoint.",
        )
    }

    pub fn source_unavailable() -> Self {
        Self::new(
            RestApiErrorCode::SourceUnavailable,
            "Failed to read the spreadsheet.",
        )
    }

    pub fn serialization() -> Self {
        Self::new(
            RestApiErrorCode::Serialization,
            "Failed to serialize the response.",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestApiErrorCode {
    MissingColumn,
    MethodNotAllowed,
    SourceUnavailable,
    Serialization,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestApiErrorCode::MissingColumn => write!(f, "missing_column"),
            RestApiErrorCode::MethodNotAllowed => write!(f, "method_not_allowed"),
            RestApiErrorCode::SourceUnavailable => write!(f, "source_unavailable"),
            RestApiErrorCode::Serialization => write!(f, "serialization"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingColumn => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::SourceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "code": self.code.to_string(),
            "message": self.message,
        });
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}
