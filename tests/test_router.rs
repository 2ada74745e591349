use devsim::device::{DeviceFacade, DeviceInfo};
use devsim::http::request::{Method, Request, RequestBuilder};
use devsim::http::response::StatusCode;
use devsim::http::router::Router;

fn test_router() -> Router {
    let info = DeviceInfo {
        name: "bench-probe".to_string(),
        model: "bp-7".to_string(),
        manufacturer: "acme".to_string(),
        kind: "sensor".to_string(),
        protocol: "das".to_string(),
    };
    Router::new(DeviceFacade::new(info))
}

fn get(path: &str) -> Request {
    RequestBuilder::new()
        .method(Method::GET)
        .path(path)
        .build()
        .unwrap()
}

fn post(path: &str, body: &[u8]) -> Request {
    RequestBuilder::new()
        .method(Method::POST)
        .path(path)
        .header("Content-Length", body.len().to_string())
        .body(body.to_vec())
        .build()
        .unwrap()
}

#[test]
fn test_get_info_returns_identity_record() {
    let router = test_router();
    let response = router.dispatch(&get("/info"));

    assert_eq!(response.status, StatusCode::Ok);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(parsed["device_name"], "bench-probe");
    assert_eq!(parsed["device_model"], "bp-7");
    assert_eq!(parsed["manufacturer"], "acme");
    assert_eq!(parsed["device_type"], "sensor");
    assert_eq!(parsed["primary_protocol"], "das");
}

#[test]
fn test_get_info_is_byte_identical_across_calls() {
    let router = test_router();

    let first = router.dispatch(&get("/info"));
    let second = router.dispatch(&get("/info"));

    assert_eq!(first.body, second.body);
}

#[test]
fn test_get_info_escapes_identity_fields() {
    let info = DeviceInfo {
        name: "probe \"7\"\\north".to_string(),
        model: "bp-7".to_string(),
        manufacturer: "acme".to_string(),
        kind: "sensor".to_string(),
        protocol: "das".to_string(),
    };
    let router = Router::new(DeviceFacade::new(info));

    let response = router.dispatch(&get("/info"));
    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();

    assert_eq!(parsed["device_name"], "probe \"7\"\\north");
}

#[test]
fn test_get_data_returns_sensor_snapshot() {
    let router = test_router();
    let response = router.dispatch(&get("/data"));

    assert_eq!(response.status, StatusCode::Ok);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert!(parsed["temperature"].is_number());
    assert!(parsed["humidity"].is_number());
    assert_eq!(parsed["status"], "OK");
}

#[test]
fn test_post_cmd_echoes_command() {
    let router = test_router();
    let response = router.dispatch(&post("/cmd", b"{\"command\":\"reboot\"}"));

    assert_eq!(response.status, StatusCode::Ok);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["command"], "reboot");
}

#[test]
fn test_post_cmd_raw_token() {
    let router = test_router();
    let response = router.dispatch(&post("/cmd", b"reboot"));

    assert_eq!(response.status, StatusCode::Ok);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(parsed["command"], "reboot");
}

#[test]
fn test_post_cmd_without_command_is_rejected() {
    let router = test_router();
    let response = router.dispatch(&post("/cmd", b"{}"));

    assert_eq!(response.status, StatusCode::BadRequest);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(parsed["status"], "error");
    assert!(parsed["message"].is_string());
}

#[test]
fn test_unknown_path_is_not_found() {
    let router = test_router();
    let response = router.dispatch(&get("/unknown"));

    assert_eq!(response.status, StatusCode::NotFound);

    let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(parsed["error"], "Not found");
}

#[test]
fn test_wrong_method_is_not_found() {
    let router = test_router();

    // No method-not-allowed distinction; everything unmatched is a 404
    let response = router.dispatch(&post("/info", b""));
    assert_eq!(response.status, StatusCode::NotFound);

    let response = router.dispatch(&get("/cmd"));
    assert_eq!(response.status, StatusCode::NotFound);

    let delete = RequestBuilder::new()
        .method(Method::DELETE)
        .path("/data")
        .build()
        .unwrap();
    let response = router.dispatch(&delete);
    assert_eq!(response.status, StatusCode::NotFound);
}

#[test]
fn test_path_match_is_exact() {
    let router = test_router();

    assert_eq!(
        router.dispatch(&get("/info/")).status,
        StatusCode::NotFound
    );
    assert_eq!(
        router.dispatch(&get("/info?verbose=1")).status,
        StatusCode::NotFound
    );
}
