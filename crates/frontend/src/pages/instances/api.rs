use contracts::shared::core_response::CoreResponse;
use contracts::shared::instances::Instance;
use contracts::shared::proxy::{ProxyErrorBody, PROXY_FAILURE_MESSAGE};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_instances() -> Result<Vec<Instance>, String> {
    let response = Request::post(&api_url("/api/instances"))
        .send()
        .await
        .map_err(|e| {
            log::warn!("instances request failed: {}", e);
            PROXY_FAILURE_MESSAGE.to_string()
        })?;
    let ok = response.ok();
    let body = response.text().await.map_err(|e| {
        log::warn!("instances body unreadable: {}", e);
        PROXY_FAILURE_MESSAGE.to_string()
    })?;
    if !ok {
        return Err(error_message(&body));
    }
    instances_from_body(&body)
}

/// Сообщение прокси, либо общее сообщение, если тело не распознано
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ProxyErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| PROXY_FAILURE_MESSAGE.to_string())
}

/// Тело апстрима приходит как есть: либо список, либо конверт core API
pub fn instances_from_body(body: &str) -> Result<Vec<Instance>, String> {
    if let Ok(list) = serde_json::from_str::<Vec<Instance>>(body) {
        return Ok(list);
    }
    let envelope: CoreResponse =
        serde_json::from_str(body).map_err(|e| format!("Unexpected instances data: {}", e))?;
    if !envelope.is_success() {
        return Err(envelope.message);
    }
    serde_json::from_value(envelope.data).map_err(|e| format!("Unexpected instances data: {}", e))
}
