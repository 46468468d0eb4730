//! HTTP-facing layer: response records, writers and the demo endpoints.

pub mod controller;
pub mod dto;
pub mod routes;
pub mod util;
