// src/tests/router_tests/generate_tests.rs
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{fake_pipeline, FakeOptions, AUTOACCESS_URL, RESPECT_URL};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;

fn post_generate(body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/generate".parse().unwrap();
    req
}

/// Run through the router the way the server does, errors included.
fn respond(req: Request, pipeline: &crate::pipeline::Pipeline) -> Response {
    match handle(req, pipeline) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

fn body_json(resp: &mut Response) -> Value {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn empty_url_list_is_rejected_without_downstream_calls() {
    let (pipeline, log) = fake_pipeline(FakeOptions::default());

    let mut resp = respond(post_generate(r#"{"urls": []}"#), &pipeline);

    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(&mut resp), json!({"error": "No URLs provided"}));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn missing_url_field_is_rejected() {
    let (pipeline, log) = fake_pipeline(FakeOptions::default());

    let mut resp = respond(post_generate(r#"{"links": ["x"]}"#), &pipeline);

    assert_eq!(resp.status(), 400);
    assert!(body_json(&mut resp).get("error").is_some());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn malformed_body_is_a_bad_request() {
    let (pipeline, _log) = fake_pipeline(FakeOptions::default());

    let mut resp = respond(post_generate("urls=1"), &pipeline);

    assert_eq!(resp.status(), 400);
    let body = body_json(&mut resp);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON body"));
}

#[test]
fn results_follow_input_order_with_unsupported_slot() {
    let (pipeline, log) = fake_pipeline(FakeOptions::default());
    let payload = json!({
        "urls": [RESPECT_URL, "https://example.com/cars/1", AUTOACCESS_URL]
    });

    let mut resp = respond(post_generate(&payload.to_string()), &pipeline);

    assert_eq!(resp.status(), 200);
    let results = body_json(&mut resp);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["title"], "2015 Toyota Hilux");
    assert_eq!(results[1], json!({"error": "Unsupported auction site"}));
    assert_eq!(results[2]["title"], "Nissan Note");

    let log = log.lock().unwrap();
    assert!(!log.iter().any(|c| c.contains("example.com")));
    let posts: Vec<&String> = log.iter().filter(|c| c.starts_with("post ")).collect();
    assert_eq!(posts, vec!["post 2015 Toyota Hilux", "post Nissan Note"]);
}

#[test]
fn one_failing_url_does_not_sink_the_batch() {
    let (pipeline, _log) = fake_pipeline(FakeOptions::default());
    let missing = "https://autoaccess.example/lot/404";
    let payload = json!({ "urls": [missing, RESPECT_URL] });

    let mut resp = respond(post_generate(&payload.to_string()), &pipeline);

    assert_eq!(resp.status(), 200);
    let results = body_json(&mut resp);
    assert_eq!(
        results[0],
        json!({ "error": format!("HTTP 404 fetching {missing}") })
    );
    assert_eq!(results[1]["title"], "2015 Toyota Hilux");
}

#[test]
fn generation_failure_is_reported_per_url() {
    let (pipeline, log) = fake_pipeline(FakeOptions {
        fail_generation: true,
        ..FakeOptions::default()
    });
    let payload = json!({ "urls": [AUTOACCESS_URL] });

    let mut resp = respond(post_generate(&payload.to_string()), &pipeline);

    let results = body_json(&mut resp);
    let error = results[0]["error"].as_str().unwrap();
    assert!(error.starts_with("Description generation failed"));
    assert!(error.contains("429"));
    // Nothing is uploaded or posted once generation fails.
    assert!(!log
        .lock()
        .unwrap()
        .iter()
        .any(|c| c.starts_with("upload") || c.starts_with("post")));
}
