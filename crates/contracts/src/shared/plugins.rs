use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Плагин с набором настроек (формат plugin.json core API).
///
/// Каждый плагин становится отдельной вкладкой на странице глобальной
/// конфигурации, его настройки - строками этой вкладки.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Plugin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub settings: BTreeMap<String, PluginSetting>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PluginSetting {
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub default: String,
    /// Текущее значение, если core его вернул; иначе используется `default`
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub regex: String,
    #[serde(rename = "type", default)]
    pub kind: SettingKind,
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl PluginSetting {
    pub fn current_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.default)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    #[default]
    Text,
    Password,
    Number,
    Check,
    Select,
    #[serde(other)]
    Other,
}

impl SettingKind {
    /// Значение атрибута `type` для `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            SettingKind::Password => "password",
            SettingKind::Number => "number",
            SettingKind::Check => "checkbox",
            _ => "text",
        }
    }
}
