use std::collections::HashMap;

use contracts::shared::plugins::{Plugin, PluginSetting};

use crate::shared::settings_panel::model::{Constraint, Tab, TabGroup};
use crate::shared::settings_panel::ui::SettingFieldSpec;

/// `LOG_LEVEL` -> `log-level`, used when the schema has no explicit id
fn setting_id(key: &str, setting: &PluginSetting) -> String {
    if setting.id.is_empty() {
        key.to_lowercase().replace('_', "-")
    } else {
        setting.id.clone()
    }
}

/// Одна вкладка на плагин, одна строка на настройку.
/// Описания полей индексируются по id строки.
pub fn build_panel(plugins: &[Plugin]) -> (TabGroup, HashMap<String, SettingFieldSpec>) {
    let mut fields = HashMap::new();
    let tabs = plugins
        .iter()
        .map(|plugin| {
            let mut tab = Tab::new(plugin.id.clone(), plugin.name.clone());
            for (key, setting) in &plugin.settings {
                let id = setting_id(key, setting);
                tab = tab.with_row(id.clone(), setting.label.clone());
                fields.insert(
                    id.clone(),
                    SettingFieldSpec {
                        id,
                        label: setting.label.clone(),
                        help: setting.help.clone(),
                        value: setting.current_value().to_string(),
                        kind: setting.kind,
                        options: setting.select.clone(),
                        constraint: Constraint::new(setting.required, &setting.regex),
                    },
                );
            }
            tab
        })
        .collect();
    (TabGroup::new(tabs), fields)
}
