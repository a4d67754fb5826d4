use crate::errors::{ResultResp, ServerError};
use crate::pipeline::Pipeline;
use crate::responses::{html_response, json_response};
use crate::templates;
use astra::Request;
use serde::Deserialize;
use serde_json::json;
use std::io::Read;

#[derive(Debug, Default, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    urls: Option<Vec<String>>,
}

pub fn handle(mut req: Request, pipeline: &Pipeline) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/health") => json_response(&json!({ "status": "ok" })),
        ("POST", "/generate") => {
            let body = read_body(&mut req)?;
            let urls = parse_generate(&body)?;

            tracing::info!(count = urls.len(), "batch received");
            let results = pipeline.process_batch(&urls);
            json_response(&results)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read body: {e}")))?;
    Ok(body)
}

/// The `urls` of a generate request. An empty body or a null list is
/// treated like a request without urls.
fn parse_generate(body: &[u8]) -> Result<Vec<String>, ServerError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        GenerateRequest::default()
    } else {
        serde_json::from_slice(body)
            .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))?
    };

    match request.urls {
        Some(urls) if !urls.is_empty() => Ok(urls),
        _ => Err(ServerError::BadRequest("No URLs provided".into())),
    }
}
