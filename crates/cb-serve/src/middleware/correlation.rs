use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use ulid::Ulid;

/// Request-scoped correlation id, echoed back in the response headers and
/// attached to every error envelope.
#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

const HEADER_NAME: &str = "x-correlation-id";

fn incoming_or_minted(headers: &HeaderMap) -> String {
    headers
        .get(HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map_or_else(
            || format!("corr_{}", Ulid::new()),
            |value| value.to_string(),
        )
}

pub async fn correlation_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = incoming_or_minted(request.headers());
    request.extensions_mut().insert(CorrelationId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(HEADER_NAME), value);
    }
    response
}
