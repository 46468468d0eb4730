//! In-memory response sink that converts into an axum `Response`.

use std::io;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{HeaderName, HeaderValue, StatusCode};
use tracing::{error, warn};

use crate::core::http::response_sink::ResponseSink;
use crate::errors::RespError;

/// Records headers, the committed status and body bytes for a single response.
///
/// Follows the usual HTTP writer rules: the first committed status wins, header
/// changes after the commit are dropped, and writing body bytes without a
/// committed status commits 200.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: Vec<(String, String)>,
    status: Option<u16>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status code, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Convert into an axum response. Fails when the committed status or a
    /// recorded header cannot be represented in HTTP.
    pub fn finish(self) -> Result<Response, RespError> {
        let code = self.status.unwrap_or(200);
        let status = StatusCode::from_u16(code).map_err(|_| RespError::InvalidStatus(code))?;

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| RespError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| RespError::InvalidHeader(format!("{name}: {value}")))?;
            headers.insert(header_name, header_value);
        }

        Ok(response)
    }
}

impl ResponseSink for BufferedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        if let Some(code) = self.status {
            warn!(header = name, status = code, "header set after status was committed; ignoring");
            return;
        }

        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn write_status(&mut self, code: u16) {
        match self.status {
            Some(committed) => {
                warn!(committed, attempted = code, "superfluous status write; ignoring");
            }
            None => self.status = Some(code),
        }
    }
}

impl io::Write for BufferedResponse {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.status = Some(200);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        match self.finish() {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "buffered response could not be converted");
                err.into_response()
            }
        }
    }
}
