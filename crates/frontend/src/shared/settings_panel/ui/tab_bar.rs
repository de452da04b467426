use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::super::model::{Marker, SettingsPanelState, CLASS_ACTIVE};
use super::dom::closest_marker;

/// Десктопные вкладки панели настроек
#[component]
pub fn TabBar(state: RwSignal<SettingsPanelState>) -> impl IntoView {
    let tabs = state.with_untracked(|s| s.group.tabs().to_vec());

    let on_click = move |ev: MouseEvent| {
        let Some(key) = closest_marker(&ev, Marker::TabHandler) else {
            return;
        };
        state.update(|s| {
            if !s.select_tab(&key) {
                log::debug!("tab '{}' not selectable", key);
            }
        });
    };

    view! {
        <div class="settings-tabs" role="tablist" on:click=on_click>
            {tabs
                .into_iter()
                .map(|tab| {
                    let key = tab.key.clone();
                    let class = move || {
                        state.with(|s| {
                            format!(
                                "settings-tabs__tab {} {}",
                                if s.group.is_active(&key) { CLASS_ACTIVE } else { "" },
                                s.group.tab_visibility(&key).tab_class(),
                            )
                        })
                    };
                    view! {
                        <button type="button" role="tab" data-tab-handler=tab.key class=class>
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
