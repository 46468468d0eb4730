pub mod json;
pub mod reply;
