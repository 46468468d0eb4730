//! Response body records

pub mod demo_dto;
pub mod envelope;
pub mod pagination;
pub mod status_response;

pub use envelope::{ErrorEnvelope, PaginatedEnvelope, SuccessEnvelope, ValidationErrorEnvelope};
pub use pagination::Pagination;
pub use status_response::{ResponseStatus, StatusResponse};
