use serde::{Deserialize, Serialize};

/// Сообщение, которое отдаёт прокси при любой ошибке апстрима.
///
/// Подробности ошибки клиенту не передаются.
pub const PROXY_FAILURE_MESSAGE: &str = "fail getting data";

/// Тело ответа прокси при ошибке
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProxyErrorBody {
    pub error: String,
}

impl ProxyErrorBody {
    pub fn generic() -> Self {
        Self {
            error: PROXY_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_body_serializes_literal_message() {
        let json = serde_json::to_string(&ProxyErrorBody::generic()).unwrap();
        assert_eq!(json, r#"{"error":"fail getting data"}"#);
    }
}
