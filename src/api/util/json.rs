//! JSON response writers.
//!
//! Every helper builds its envelope and hands it to [`JsonWriter::json`], which
//! sets `Content-Type`, commits the status and only then writes the body. An
//! encoding failure is returned after the status is already committed, so it
//! cannot turn into a different status code.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::api::dto::{
    ErrorEnvelope, PaginatedEnvelope, Pagination, StatusResponse, SuccessEnvelope,
    ValidationErrorEnvelope,
};
use crate::core::http::response_sink::ResponseSink;
use crate::core::util::json_encoder::{EncoderOptions, JsonEncoder};
use crate::errors::RespError;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;

/// Field name to reason, serialized with keys in sorted order.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    options: EncoderOptions,
}

impl JsonWriter {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Write `payload` verbatim as the body with the given status.
    pub fn json<S, T>(&self, sink: &mut S, status: u16, payload: &T) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        sink.set_header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON);
        sink.write_status(status);
        debug!(status, "writing JSON response");

        JsonEncoder::encode(sink, payload, self.options)?;
        Ok(())
    }

    pub fn success<S, T>(&self, sink: &mut S, data: &T) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.json(sink, STATUS_OK, &SuccessEnvelope::new(data))
    }

    pub fn error<S>(&self, sink: &mut S, message: &str) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
    {
        self.json(sink, STATUS_BAD_REQUEST, &ErrorEnvelope::new(message))
    }

    pub fn validation_error<S>(&self, sink: &mut S, errors: &FieldErrors) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
    {
        self.json(
            sink,
            STATUS_UNPROCESSABLE_ENTITY,
            &ValidationErrorEnvelope::new(errors),
        )
    }

    pub fn paginated<S, T>(
        &self,
        sink: &mut S,
        data: &T,
        pagination: Pagination,
    ) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.json(sink, STATUS_OK, &PaginatedEnvelope::new(data, pagination))
    }

    /// Same as [`JsonWriter::json`]; the code is passed through unchecked.
    pub fn custom<S, T>(&self, sink: &mut S, code: u16, payload: &T) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.json(sink, code, payload)
    }

    pub fn status_success<S, T>(
        &self,
        sink: &mut S,
        message: &str,
        data: Option<&T>,
    ) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        self.json(sink, STATUS_OK, &StatusResponse::success(message, data))
    }

    pub fn status_error<S>(&self, sink: &mut S, message: &str) -> Result<(), RespError>
    where
        S: ResponseSink + ?Sized,
    {
        self.json(
            sink,
            STATUS_BAD_REQUEST,
            &StatusResponse::<()>::error(message),
        )
    }
}

pub fn json<S, T>(sink: &mut S, status: u16, payload: &T) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    JsonWriter::default().json(sink, status, payload)
}

/// 200 `{"success":true,"data":...}`
pub fn success<S, T>(sink: &mut S, data: &T) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    JsonWriter::default().success(sink, data)
}

/// 400 `{"success":false,"error":...}`
pub fn error<S>(sink: &mut S, message: &str) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
{
    JsonWriter::default().error(sink, message)
}

/// 422 `{"success":false,"errors":{...}}`
pub fn validation_error<S>(sink: &mut S, errors: &FieldErrors) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
{
    JsonWriter::default().validation_error(sink, errors)
}

/// 200 `{"success":true,"data":...,"pagination":{...}}`
pub fn paginated<S, T>(sink: &mut S, data: &T, pagination: Pagination) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    JsonWriter::default().paginated(sink, data, pagination)
}

pub fn custom<S, T>(sink: &mut S, code: u16, payload: &T) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    JsonWriter::default().custom(sink, code, payload)
}

/// 200 `{"status":"success","message":...,"data"?:...}`
///
/// Pass `None::<&()>` when there is no data.
pub fn status_success<S, T>(sink: &mut S, message: &str, data: Option<&T>) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    JsonWriter::default().status_success(sink, message, data)
}

/// 400 `{"status":"error","message":...}`
pub fn status_error<S>(sink: &mut S, message: &str) -> Result<(), RespError>
where
    S: ResponseSink + ?Sized,
{
    JsonWriter::default().status_error(sink, message)
}
