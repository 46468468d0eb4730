//! Response sinks the JSON writer targets.

pub mod buffered_response;
pub mod response_sink;
