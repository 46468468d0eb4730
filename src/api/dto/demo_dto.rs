//! Demo API DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoItem {
    pub id: u64,
    pub name: String,
}
