use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::error::{AppError, AppResult};
use crate::core::models::ApiEnvelope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Raw status and body of a completed `fetch`.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

fn js_error(context: &str, value: JsValue) -> AppError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    AppError::Network(format!("{context}: {detail}"))
}

// Generic fetch executor; JSON in, text out.
pub async fn execute_request(
    method: Method,
    url: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> AppResult<RawResponse> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        let json = serde_json::to_string(body)?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_error("building request", e))?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(|e| js_error("setting headers", e))?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(|e| js_error("setting headers", e))?;
    }
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| js_error("setting headers", e))?;
    }

    let window = web_sys::window().ok_or_else(|| AppError::Network("no window".to_string()))?;
    tracing::debug!(method = method.as_str(), url, "sending request");
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error(url, e))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| AppError::Decode("fetch did not resolve to a Response".to_string()))?;
    let text = JsFuture::from(response.text().map_err(|e| js_error("reading body", e))?)
        .await
        .map_err(|e| js_error("reading body", e))?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse { status: response.status(), url: url.to_string(), body: text })
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error for a non-2xx answer. Auth failures stay `Http` so callers can
/// detect them; otherwise the envelope message is preferred when present.
fn failure(raw: &RawResponse) -> AppError {
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&raw.body)
        .ok()
        .and_then(|env| env.message);
    match message {
        Some(message) if !matches!(raw.status, 401 | 403) => AppError::Api(message),
        _ => AppError::Http { status: raw.status, url: raw.url.clone() },
    }
}

/// Unwraps `{ success, data, message? }` into `T`.
pub fn decode_envelope<T: DeserializeOwned>(raw: &RawResponse) -> AppResult<T> {
    if !is_success(raw.status) {
        return Err(failure(raw));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(&raw.body)?;
    envelope.into_result()
}

/// Like [`decode_envelope`] for endpoints whose `data` is empty or ignored.
pub fn decode_ack(raw: &RawResponse) -> AppResult<()> {
    if !is_success(raw.status) {
        return Err(failure(raw));
    }
    if raw.body.trim().is_empty() {
        return Ok(());
    }
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(&raw.body)?;
    if envelope.success {
        Ok(())
    } else {
        Err(AppError::Api(envelope.message.unwrap_or_else(|| "request rejected".to_string())))
    }
}
