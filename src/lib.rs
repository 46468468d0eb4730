//! JSON response envelopes for HTTP handlers.
//!
//! The writers in [`api::util::json`] set `Content-Type: application/json`,
//! commit a status code and serialize one of a fixed set of envelopes onto a
//! [`ResponseSink`]. [`BufferedResponse`] is the sink used with axum, and
//! [`Reply`] wraps the same writers behind `IntoResponse`.

pub mod api;
pub mod config;
pub mod core;
pub mod errors;
pub mod routes;

pub use api::dto::{
    ErrorEnvelope, PaginatedEnvelope, Pagination, ResponseStatus, StatusResponse,
    SuccessEnvelope, ValidationErrorEnvelope,
};
pub use api::util::json::{
    custom, error, json, paginated, status_error, status_success, success, validation_error,
    FieldErrors, JsonWriter, CONTENT_TYPE_JSON,
};
pub use api::util::reply::Reply;
pub use crate::core::http::buffered_response::BufferedResponse;
pub use crate::core::http::response_sink::ResponseSink;
pub use crate::core::util::json_encoder::EncoderOptions;
pub use errors::RespError;
