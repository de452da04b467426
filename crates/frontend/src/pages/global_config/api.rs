use contracts::shared::core_response::CoreResponse;
use contracts::shared::plugins::Plugin;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Схема плагинов и текущие значения настроек
pub async fn fetch_plugins() -> Result<Vec<Plugin>, String> {
    let response: CoreResponse = Request::get(&api_url("/api/plugins"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch plugins: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse plugins response: {}", e))?;
    plugins_from_response(response)
}

pub fn plugins_from_response(response: CoreResponse) -> Result<Vec<Plugin>, String> {
    if !response.is_success() {
        return Err(format!("{} ({})", response.message, response.status));
    }
    serde_json::from_value(response.data).map_err(|e| format!("Unexpected plugins data: {}", e))
}
