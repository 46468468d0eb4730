//! Envelope values axum handlers can return directly.

use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::api::dto::Pagination;
use crate::api::util::json::{FieldErrors, JsonWriter};
use crate::core::http::buffered_response::BufferedResponse;
use crate::errors::RespError;

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Json { status: u16, payload: T },
    Success(T),
    Error(String),
    ValidationError(FieldErrors),
    Paginated { data: T, pagination: Pagination },
    StatusSuccess { message: String, data: Option<T> },
    StatusError(String),
}

impl<T> Reply<T> {
    pub fn json(status: u16, payload: T) -> Self {
        Reply::Json { status, payload }
    }

    pub fn custom(code: u16, payload: T) -> Self {
        Reply::Json {
            status: code,
            payload,
        }
    }

    pub fn success(data: T) -> Self {
        Reply::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }

    pub fn validation_error(errors: FieldErrors) -> Self {
        Reply::ValidationError(errors)
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Reply::Paginated { data, pagination }
    }

    pub fn status_success(message: impl Into<String>, data: Option<T>) -> Self {
        Reply::StatusSuccess {
            message: message.into(),
            data,
        }
    }

    pub fn status_error(message: impl Into<String>) -> Self {
        Reply::StatusError(message.into())
    }

    /// `Ok` becomes a success envelope, `Err` a 400 error envelope carrying
    /// the error's display text.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Reply::Success(value),
            Err(err) => Reply::Error(err.to_string()),
        }
    }

    /// Write this reply onto `res` with the given writer.
    pub fn write_to(&self, writer: &JsonWriter, res: &mut BufferedResponse) -> Result<(), RespError>
    where
        T: Serialize,
    {
        match self {
            Reply::Json { status, payload } => writer.json(res, *status, payload),
            Reply::Success(data) => writer.success(res, data),
            Reply::Error(message) => writer.error(res, message),
            Reply::ValidationError(errors) => writer.validation_error(res, errors),
            Reply::Paginated { data, pagination } => writer.paginated(res, data, *pagination),
            Reply::StatusSuccess { message, data } => {
                writer.status_success(res, message, data.as_ref())
            }
            Reply::StatusError(message) => writer.status_error(res, message),
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let mut res = BufferedResponse::new();

        // Status and headers are already committed when encoding fails; the
        // response goes out with an empty body.
        if let Err(err) = self.write_to(&JsonWriter::default(), &mut res) {
            error!(
                error = %err,
                committed = res.is_committed(),
                status = ?res.status(),
                "failed to encode JSON reply"
            );
        }

        res.into_response()
    }
}
