use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::super::model::{Marker, SettingsPanelState, CLASS_ACTIVE};
use super::dom::closest_marker;

/// Выбор вкладки через выпадающий список (мобильный вид)
#[component]
pub fn TabSelect(state: RwSignal<SettingsPanelState>) -> impl IntoView {
    let tabs = state.with_untracked(|s| s.group.tabs().to_vec());
    let caption = Memo::new(move |_| state.with(|s| s.dropdown_caption()));

    let on_pick = move |ev: MouseEvent| {
        let Some(key) = closest_marker(&ev, Marker::TabSelectHandler) else {
            return;
        };
        state.update(|s| {
            s.select_from_dropdown(&key);
        });
    };

    view! {
        <div class="settings-tab-select">
            <button
                type="button"
                class="settings-tab-select__btn"
                data-tab-select-dropdown-btn=""
                data-tab-id=move || caption.get().tab_id
                on:click=move |_| state.update(|s| s.toggle_dropdown())
            >
                <span>{move || caption.get().label}</span>
                <svg
                    data-tab-select-dropdown-arrow=""
                    class=move || format!("settings-tab-select__arrow {}", state.with(|s| s.dropdown.arrow_class()))
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                >
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
            </button>
            <div
                data-tab-select-dropdown=""
                class=move || format!("settings-tab-select__menu {}", state.with(|s| s.dropdown.menu_class()))
                on:click=on_pick
            >
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let key = tab.key.clone();
                        let class = move || {
                            state.with(|s| {
                                format!(
                                    "settings-tab-select__item {} {}",
                                    if s.group.is_active(&key) { CLASS_ACTIVE } else { "" },
                                    s.group.tab_visibility(&key).tab_class(),
                                )
                            })
                        };
                        view! {
                            <button type="button" data-tab-select-handler=tab.key class=class>
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
