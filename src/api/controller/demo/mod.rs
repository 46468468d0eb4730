//! Demo controller: one endpoint per response envelope

use axum::extract::{Path, Query};
use axum::Json;
use serde_json::{json, Value};
use validator::Validate;

use crate::api::dto::demo_dto::{DemoItem, PageQuery, SignupRequest};
use crate::api::dto::{Pagination, StatusResponse};
use crate::api::util::json::{self as resp, FieldErrors};
use crate::api::util::reply::Reply;
use crate::core::http::buffered_response::BufferedResponse;
use crate::errors::RespError;

mod validation;

use validation::field_errors;

pub const CATALOG_SIZE: u64 = 25;
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

pub struct DemoController;

impl DemoController {
    pub async fn success() -> Reply<Value> {
        Reply::success(json!({ "service": env!("CARGO_PKG_NAME") }))
    }

    pub async fn error() -> Reply<Value> {
        Reply::error("something went wrong")
    }

    pub async fn signup(Json(payload): Json<SignupRequest>) -> Reply<SignupRequest> {
        match payload.validate() {
            Ok(()) => Reply::status_success("signed up", Some(payload)),
            Err(errors) => Reply::validation_error(field_errors(&errors)),
        }
    }

    pub async fn items(Query(query): Query<PageQuery>) -> Reply<Vec<DemoItem>> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        let start = (page - 1).saturating_mul(per_page);
        let items = (start..CATALOG_SIZE)
            .take(per_page as usize)
            .map(|idx| DemoItem {
                id: idx + 1,
                name: format!("item-{}", idx + 1),
            })
            .collect();

        Reply::paginated(items, Pagination::new(page, per_page, CATALOG_SIZE))
    }

    pub async fn item(Path(id): Path<u64>) -> Reply<DemoItem> {
        Reply::from_result(find_item(id))
    }

    pub async fn accepted() -> Reply<Value> {
        Reply::custom(202, json!({ "queued": true }))
    }

    pub async fn status_success() -> Reply<Value> {
        Reply::status_success("done", None)
    }

    pub async fn status_error() -> Reply<Value> {
        Reply::status_error("bad")
    }

    /// Writes straight onto a sink instead of going through `Reply`.
    pub async fn echo(Json(payload): Json<Value>) -> Result<BufferedResponse, RespError> {
        let mut res = BufferedResponse::new();

        match payload {
            Value::Object(ref map) if map.is_empty() => {
                let mut errors = FieldErrors::new();
                errors.insert("body".into(), "must not be empty".into());
                resp::validation_error(&mut res, &errors)?;
            }
            Value::Object(_) => resp::success(&mut res, &payload)?,
            _ => resp::error(&mut res, "expected a JSON object")?,
        }

        Ok(res)
    }

    pub async fn not_found() -> Reply<StatusResponse<'static, ()>> {
        Reply::custom(
            404,
            StatusResponse::error("The requested resource was not found"),
        )
    }
}

fn find_item(id: u64) -> Result<DemoItem, String> {
    if (1..=CATALOG_SIZE).contains(&id) {
        Ok(DemoItem {
            id,
            name: format!("item-{id}"),
        })
    } else {
        Err(format!("item {id} not found"))
    }
}
