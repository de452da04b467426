use leptos::prelude::*;

use super::super::model::SettingsPanelState;

/// Поле поиска по настройкам
#[component]
pub fn SettingsSearch(
    state: RwSignal<SettingsPanelState>,
    #[prop(into)] input_id: String,
    /// Вызывается после применения фильтра
    on_searched: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="settings-search">
            <input
                id=input_id
                type="search"
                class="form__input"
                placeholder="Search settings"
                autocomplete="off"
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    let outcome = state.try_update(|s| s.search(&query));
                    log::debug!("settings search '{}': {:?}", query, outcome);
                    on_searched.run(());
                }
            />
        </div>
    }
}
