//! `POST /generate-docs` tests

use rocket::http::{ContentType, Status};
use serde_json::json;

use crate::helpers::{SAMPLE_SOURCE, client_for, failing_context, offline_client, parse_json, unready_context};

#[rocket::async_test]
async fn test_generate_docs_returns_entities_in_source_order() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": SAMPLE_SOURCE }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = parse_json(&response.into_string().await.expect("response body"));
    let results = body["results"].as_array().expect("results array");
    let names: Vec<&str> = results
        .iter()
        .map(|r| r["entity_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["add", "Greeter", "Greeter.hello"]);
    assert_eq!(results[0]["entity_type"], "function");
    assert_eq!(results[1]["entity_type"], "class");
    assert_eq!(results[2]["entity_type"], "method");
    assert!(
        results[0]["original_code"]
            .as_str()
            .unwrap()
            .starts_with("def add(a, b):")
    );
    assert_eq!(results[0]["generated_docstring"], "Defines def add(a, b).");
}

#[rocket::async_test]
async fn test_generate_docs_accepts_camel_case_body() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({
            "sourceCode": "def f():\n    pass",
            "verbosity": "detailed",
            "sessionId": "camel",
            "persist": false
        }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = parse_json(&response.into_string().await.unwrap());
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert!(
        body["results"][0]["generated_docstring"]
            .as_str()
            .unwrap()
            .contains("spanning 2 lines")
    );
}

#[rocket::async_test]
async fn test_generate_docs_without_entities_returns_empty_list() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": "x = 1\nprint(x)\n" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = parse_json(&response.into_string().await.unwrap());
    assert_eq!(body["results"], json!([]));
}

#[rocket::async_test]
async fn test_empty_source_is_bad_request() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": "" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body = parse_json(&response.into_string().await.unwrap());
    assert_eq!(body["detail"], "Source code cannot be empty.");
}

#[rocket::async_test]
async fn test_missing_source_is_unprocessable() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "verbosity": "concise" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body = parse_json(&response.into_string().await.unwrap());
    assert!(body["detail"].as_str().unwrap().contains("source_code"));
}

#[rocket::async_test]
async fn test_unknown_verbosity_is_unprocessable() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": "def f():\n    pass", "verbosity": "verbose" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[rocket::async_test]
async fn test_malformed_json_is_bad_request() {
    let client = offline_client().await;

    let response = client
        .post("/generate-docs")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body = parse_json(&response.into_string().await.unwrap());
    assert!(body["detail"].is_string());
}

#[rocket::async_test]
async fn test_generate_docs_when_model_not_loaded_is_unavailable() {
    let client = client_for(&unready_context().await).await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": "def f():\n    pass" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::ServiceUnavailable);
    let body = parse_json(&response.into_string().await.unwrap());
    assert!(body["detail"].as_str().unwrap().contains("unavailable"));
}

#[rocket::async_test]
async fn test_summarizer_failure_is_internal_error_and_not_persisted() {
    let client = client_for(&failing_context().await).await;

    let response = client
        .post("/generate-docs")
        .json(&json!({ "source_code": SAMPLE_SOURCE, "session_id": "broken" }))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body = parse_json(&response.into_string().await.unwrap());
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .contains("inference backend crashed")
    );

    let history = client.get("/history/broken").dispatch().await;
    let body = parse_json(&history.into_string().await.unwrap());
    assert_eq!(body["runs"], json!([]));
}
