use serde::{Deserialize, Serialize};

/// Инстанс, как его возвращает core API (`POST /instances`).
///
/// Бэкенд не разбирает этот тип: тело апстрима проксируется как есть,
/// структура нужна только фронтенду для отображения.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Instance {
    pub hostname: String,
    pub port: u16,
    #[serde(default)]
    pub server_name: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Instance {
    pub fn is_up(&self) -> bool {
        self.status.as_deref() == Some("up")
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_defaults_for_missing_fields() {
        let json = r#"{"hostname":"bw-1","port":5000}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.address(), "bw-1:5000");
        assert!(instance.method.is_empty());
        assert!(!instance.is_up());
    }

    #[test]
    fn test_instance_status_up() {
        let json = r#"{"hostname":"bw-1","port":5000,"server_name":"www.example.com","method":"ui","status":"up"}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert!(instance.is_up());
        assert_eq!(instance.server_name, "www.example.com");
    }
}
