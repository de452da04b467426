use std::collections::HashMap;

use leptos::prelude::*;

use super::super::model::SettingsPanelState;
use super::setting_field::{SettingField, SettingFieldSpec};

/// Панели вкладок со строками настроек.
///
/// Разметка строится один раз, видимость панелей и строк считается из состояния.
#[component]
pub fn SettingsPanels(
    state: RwSignal<SettingsPanelState>,
    fields: HashMap<String, SettingFieldSpec>,
) -> impl IntoView {
    let tabs = state.with_untracked(|s| s.group.tabs().to_vec());

    tabs.into_iter()
        .map(|tab| {
            let key = StoredValue::new(tab.key.clone());
            let panel_class = move || {
                state.with(|s| {
                    format!(
                        "settings-panel {}",
                        key.with_value(|k| s.group.panel_visibility(k)).class()
                    )
                })
            };

            let rows = tab
                .rows
                .into_iter()
                .map(|row| {
                    let row_id = row.id.clone();
                    let row_class = move || {
                        state.with(|s| {
                            format!(
                                "settings-row {}",
                                key.with_value(|k| s.group.row_visibility(k, &row_id)).class()
                            )
                        })
                    };
                    let field = match fields.get(&row.id) {
                        Some(spec) => view! { <SettingField spec=spec.clone() /> }.into_any(),
                        None => {
                            log::warn!("no field description for setting '{}'", row.id);
                            view! { <span class="form__label">{row.label}</span> }.into_any()
                        }
                    };
                    view! {
                        <div data-setting-container=row.id class=row_class>
                            {field}
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div data-plugin-item=tab.key class=panel_class>
                    <h2 class="settings-panel__title">{tab.label}</h2>
                    <div data-plugin-settings="" class="settings-panel__grid">
                        {rows}
                    </div>
                </div>
            }
        })
        .collect_view()
}
