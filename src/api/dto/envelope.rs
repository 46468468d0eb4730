//! `success`-flagged envelopes.
//!
//! Field declaration order is the order on the wire.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::Pagination;

/// `{ "success": true, "data": T }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": false, "error": message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope<'a> {
    pub success: bool,
    pub error: Cow<'a, str>,
}

impl<'a> ErrorEnvelope<'a> {
    pub fn new(message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// `{ "success": false, "errors": { field: reason } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorEnvelope<E> {
    pub success: bool,
    pub errors: E,
}

impl<E> ValidationErrorEnvelope<E> {
    pub fn new(errors: E) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// `{ "success": true, "data": T, "pagination": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    pub success: bool,
    pub data: T,
    pub pagination: Pagination,
}

impl<T> PaginatedEnvelope<T> {
    pub fn new(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}
