use std::collections::HashMap;

use leptos::prelude::*;

use super::super::model::{SettingsPanelState, TabGroup, NO_MATCH_LABEL};
use super::empty_state::use_empty_state;
use super::panels::SettingsPanels;
use super::search::SettingsSearch;
use super::setting_field::SettingFieldSpec;
use super::tab_bar::TabBar;
use super::tab_select::TabSelect;

/// Панель настроек: поиск, вкладки (десктоп и dropdown), панели и
/// заглушка "No match" для пустого результата поиска.
#[component]
pub fn SettingsPanel(
    group: TabGroup,
    fields: HashMap<String, SettingFieldSpec>,
) -> impl IntoView {
    let state = RwSignal::new(SettingsPanelState::new(group));

    // input и click пересчитывают пустое состояние
    let interactions = RwSignal::new(0u32);
    let bump = move || interactions.update(|n| *n = n.wrapping_add(1));

    let tracked = Signal::derive(move || {
        state.with(|s| {
            s.group
                .tabs()
                .iter()
                .map(|t| s.group.tab_visibility(&t.key))
                .collect::<Vec<_>>()
        })
    });
    let view_state = use_empty_state(tracked, interactions.into());

    view! {
        <div data-service-content="" class="settings" on:click=move |_| bump()>
            <SettingsSearch
                state=state
                input_id="settings-filter"
                on_searched=Callback::new(move |_| bump())
            />
            <TabBar state=state />
            <TabSelect state=state />
            <p
                data-no-match=""
                class=move || format!("settings__empty {}", view_state.get().placeholder.class())
            >
                {NO_MATCH_LABEL}
            </p>
            <div class=move || format!("settings__content {}", view_state.get().container.class())>
                <SettingsPanels state=state fields=fields />
            </div>
        </div>
    }
}
