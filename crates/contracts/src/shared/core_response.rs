use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

/// Конверт, в который бэкенд заворачивает ответы core API
/// для маршрутов jobs / logs / plugins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CoreResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    pub status: u16,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl CoreResponse {
    pub fn success(status: u16, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind: ResponseType::Success,
            status,
            message: message.into(),
            data,
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Error,
            status,
            message: message.into(),
            data: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ResponseType::Success
    }
}
