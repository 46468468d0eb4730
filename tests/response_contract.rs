//! Wire contract of the public writers, checked across a spread of payloads.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use resp_kit::{
    custom, error, paginated, status_error, status_success, success, validation_error,
    BufferedResponse, FieldErrors, Pagination, ResponseSink,
};

fn body_of(res: &BufferedResponse) -> String {
    String::from_utf8(res.body().to_vec()).unwrap()
}

fn compact<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

fn payloads() -> Vec<Value> {
    vec![
        Value::Null,
        json!(0),
        json!(-3.5),
        json!("plain"),
        json!([1, "two", null]),
        json!({"nested": {"deep": [true, false]}}),
    ]
}

#[test]
fn success_for_any_payload() {
    for data in payloads() {
        let mut res = BufferedResponse::new();
        success(&mut res, &data).unwrap();

        assert_eq!(res.status(), Some(200));
        assert_eq!(
            body_of(&res),
            format!("{{\"success\":true,\"data\":{}}}\n", compact(&data))
        );
    }
}

#[test]
fn error_for_assorted_messages() {
    for message in ["", "bad input", "quote \" and backslash \\", "ünïcode"] {
        let mut res = BufferedResponse::new();
        error(&mut res, message).unwrap();

        assert_eq!(res.status(), Some(400));
        assert_eq!(
            body_of(&res),
            format!("{{\"success\":false,\"error\":{}}}\n", compact(message))
        );
    }
}

#[test]
fn validation_error_serializes_mapping() {
    let mut errors = FieldErrors::new();
    errors.insert("zip".into(), "too short".into());
    errors.insert("age".into(), "must be positive".into());

    let mut res = BufferedResponse::new();
    validation_error(&mut res, &errors).unwrap();

    assert_eq!(res.status(), Some(422));
    assert_eq!(
        body_of(&res),
        format!("{{\"success\":false,\"errors\":{}}}\n", compact(&errors))
    );
}

#[test]
fn paginated_for_any_payload() {
    let pagination = Pagination::new(4, 25, 1000);

    for data in payloads() {
        let mut res = BufferedResponse::new();
        paginated(&mut res, &data, pagination).unwrap();

        assert_eq!(res.status(), Some(200));
        assert_eq!(
            body_of(&res),
            format!(
                "{{\"success\":true,\"data\":{},\"pagination\":{{\"page\":4,\"per_page\":25,\"total\":1000}}}}\n",
                compact(&data)
            )
        );
    }
}

#[test]
fn custom_is_verbatim() {
    for (code, payload) in [(200u16, json!({"k": 1})), (201, json!([])), (599, json!("x"))] {
        let mut res = BufferedResponse::new();
        custom(&mut res, code, &payload).unwrap();

        assert_eq!(res.status(), Some(code));
        assert_eq!(body_of(&res), format!("{}\n", compact(&payload)));
    }
}

#[test]
fn status_success_key_is_absent_not_null() {
    let mut res = BufferedResponse::new();
    status_success(&mut res, "done", None::<&()>).unwrap();

    let parsed: Value = serde_json::from_slice(res.body()).unwrap();
    assert!(parsed.get("data").is_none());
    assert_eq!(body_of(&res), "{\"status\":\"success\",\"message\":\"done\"}\n");
}

#[test]
fn status_success_keeps_falsy_data() {
    let mut res = BufferedResponse::new();
    status_success(&mut res, "done", Some(&Value::Null)).unwrap();
    assert_eq!(
        body_of(&res),
        "{\"status\":\"success\",\"message\":\"done\",\"data\":null}\n"
    );

    let mut res = BufferedResponse::new();
    status_success(&mut res, "done", Some(&0)).unwrap();
    assert_eq!(
        body_of(&res),
        "{\"status\":\"success\",\"message\":\"done\",\"data\":0}\n"
    );
}

#[test]
fn status_error_shape() {
    let mut res = BufferedResponse::new();
    status_error(&mut res, "bad").unwrap();

    assert_eq!(res.status(), Some(400));
    assert_eq!(body_of(&res), "{\"status\":\"error\",\"message\":\"bad\"}\n");
}

#[test]
fn writers_accept_a_sink_behind_a_trait_object() {
    let mut res = BufferedResponse::new();
    {
        let sink: &mut dyn ResponseSink = &mut res;
        success(sink, "dyn").unwrap();
    }

    assert_eq!(res.header("Content-Type"), Some("application/json"));
    assert_eq!(body_of(&res), "{\"success\":true,\"data\":\"dyn\"}\n");
}

#[test]
fn maps_with_non_string_keys_fail_after_commit() {
    let mut data = BTreeMap::new();
    data.insert([1, 2], "array key");

    let mut res = BufferedResponse::new();
    assert!(custom(&mut res, 201, &data).is_err());
    assert_eq!(res.status(), Some(201));
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert!(res.body().is_empty());
}
