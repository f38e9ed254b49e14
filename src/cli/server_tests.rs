//! Router tests driven in-process through `oneshot`

use super::server::{parse_stage_ids, router, AppState};
use crate::config::{CANDIDATE_LINK_VARS, DEFAULT_CANDIDATE_LINK};
use crate::error::{Error, Result};
use crate::http::RemoteResponse;
use crate::remote::HiringApi;
use crate::service::HiringService;
use crate::template::UrlTemplate;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use tower::ServiceExt;

struct FakeApi {
    candidates: Value,
    opening: Value,
    openings: Value,
}

#[async_trait]
impl HiringApi for FakeApi {
    async fn fetch_candidates_by_stage(&self, _opening_id: &str, token: &str) -> Result<Value> {
        if token == "boom" {
            return Err(Error::Other("upstream unreachable".to_string()));
        }
        Ok(self.candidates.clone())
    }

    async fn fetch_opening_detail(&self, _opening_id: &str, _token: &str) -> Result<RemoteResponse> {
        Ok(RemoteResponse {
            status: 200,
            body: self.opening.to_string(),
        })
    }

    async fn fetch_opening_list(&self, _token: &str) -> Result<RemoteResponse> {
        Ok(RemoteResponse {
            status: 200,
            body: self.openings.to_string(),
        })
    }
}

fn fixture() -> FakeApi {
    FakeApi {
        candidates: json!({"candidates": [
            {"id": "100", "name": "An", "cvs": [{"id": "cv1"}], "stage_id": "1"},
            {"id": "101", "name": "Binh", "cvs": [{"id": "cv2"}], "stage_id": "2"},
            {"id": "102", "name": "Chi", "cvs": [{"id": "cv3"}], "stage_id": "3"}
        ]}),
        opening: json!({"opening": {"stats": {"stages": [
            {"id": "1", "name": "Applied", "state": "active"},
            {"id": "2", "name": "Interview", "state": "active"}
        ]}}}),
        openings: json!({"openings": [
            {"id": "42", "name": "Rust Engineer", "status": "10"},
            {"id": "43", "name": "Old", "status": "30"}
        ]}),
    }
}

fn app(api: FakeApi, token: &str) -> axum::Router {
    let link = UrlTemplate::new(DEFAULT_CANDIDATE_LINK, CANDIDATE_LINK_VARS).unwrap();
    router(AppState::new(HiringService::new(api, link), token))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(fixture(), "tok"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "message": "API đang hoạt động bình thường"})
    );
}

#[tokio::test]
async fn test_candidates_filtered_by_stage() {
    let (status, body) = get(app(fixture(), "tok"), "/candidates?opening_id=42&stage_ids=1,2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["opening_id"], "42");
    assert_eq!(body["message"], "Đã tìm thấy 2 ứng viên");
    assert_eq!(body["candidates"][0]["stage_name"], "Applied");
    assert_eq!(body["candidates"][1]["stage_name"], "Interview");
    assert_eq!(
        body["candidates"][1]["candidate_link"],
        "https://hiring.base.vn/opening/42?candidate=101"
    );
}

#[tokio::test]
async fn test_candidates_without_filter_returns_all() {
    let (status, body) = get(app(fixture(), "tok"), "/candidates?opening_id=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["candidates"][2]["stage_name"], Value::Null);
}

#[tokio::test]
async fn test_candidates_empty_result_shape() {
    let mut api = fixture();
    api.candidates = json!({"message": "no such opening"});

    let (status, body) = get(app(api, "tok"), "/candidates?opening_id=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"candidates": [], "total": 0}));
}

#[test_case("/candidates" ; "candidates without opening")]
#[test_case("/candidates?opening_id=" ; "candidates with blank opening")]
#[test_case("/stages" ; "stages without opening")]
#[tokio::test]
async fn test_missing_opening_id_is_bad_request(uri: &str) {
    let (status, body) = get(app(fixture(), "tok"), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "opening_id is required"}));
}

#[tokio::test]
async fn test_repeated_parameter_uses_first_value() {
    let (status, body) = get(app(fixture(), "tok"), "/stages?opening_id=42&opening_id=43").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["opening_id"], "42");

    let (status, body) = get(
        app(fixture(), "tok"),
        "/candidates?opening_id=42&stage_ids=1&stage_ids=oops",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_malformed_stage_ids_is_bad_request() {
    let (status, body) = get(app(fixture(), "tok"), "/candidates?opening_id=42&stage_ids=1,two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "stage_ids must be a comma-separated list of integers"})
    );
}

#[tokio::test]
async fn test_upstream_failure_is_internal_error() {
    let (status, body) = get(app(fixture(), "boom"), "/candidates?opening_id=42").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "upstream unreachable"}));
}

#[tokio::test]
async fn test_job_openings() {
    let (status, body) = get(app(fixture(), "tok"), "/job-openings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "openings": [{"id": "42", "name": "Rust Engineer"}],
            "total": 1,
            "message": "Đã tìm thấy 1 vị trí tuyển dụng"
        })
    );
}

#[tokio::test]
async fn test_job_openings_empty_shape() {
    let mut api = fixture();
    api.openings = json!({"openings": []});

    let (_, body) = get(app(api, "tok"), "/job-openings").await;
    assert_eq!(body, json!({"openings": [], "total": 0}));
}

#[tokio::test]
async fn test_stages() {
    let (status, body) = get(app(fixture(), "tok"), "/stages?opening_id=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["opening_id"], "42");
    assert_eq!(body["message"], "Đã tìm thấy 2 giai đoạn tuyển dụng");
    assert_eq!(body["stages"][0], json!({"id": "1", "name": "Applied"}));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app(fixture(), "tok")
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "https://assistant.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[test_case("", &[] ; "empty")]
#[test_case("1,2", &[1, 2] ; "plain")]
#[test_case(" 3 , 4 ,", &[3, 4] ; "spaces and trailing comma")]
fn test_parse_stage_ids(raw: &str, expected: &[i64]) {
    assert_eq!(parse_stage_ids(raw).unwrap(), expected);
}

#[test]
fn test_parse_stage_ids_rejects_non_integers() {
    let err = parse_stage_ids("1,x").unwrap_err();
    assert!(err.is_client_error());
}
