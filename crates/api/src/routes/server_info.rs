//! Server info endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Fixed error message for a failed host lookup; clients match on this
/// exact body, so the text stays as-is.
const LOOKUP_ERROR_MESSAGE: &str = "无法获取主机信息";

/// GET /sip — returns the local machine's address and hostname.
///
/// Lookup failures are reported in-body as `{"error": ...}` with HTTP 200,
/// never as an error status.
pub async fn get() -> Json<Value> {
    match probe::net::lookup().await {
        Ok(info) => Json(json!({ "ip": info.ip, "hostname": info.hostname })),
        Err(_) => Json(json!({ "error": LOOKUP_ERROR_MESSAGE })),
    }
}
