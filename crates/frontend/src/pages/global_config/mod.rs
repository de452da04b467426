pub mod api;
pub mod model;

use leptos::prelude::*;
use thaw::*;

use crate::shared::settings_panel::ui::SettingsPanel;
use api::fetch_plugins;
use model::build_panel;

/// Глобальная конфигурация: настройки всех плагинов с поиском
#[component]
pub fn GlobalConfigPage() -> impl IntoView {
    let (plugins, set_plugins) = signal(None::<Vec<contracts::shared::plugins::Plugin>>);
    let (error, set_error) = signal(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_plugins().await {
            Ok(list) => {
                log::info!("loaded {} plugins", list.len());
                set_plugins.set(Some(list));
            }
            Err(e) => {
                log::error!("{}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="page page--global-config">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! { <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar> }
                    })
            }}
            {move || match plugins.get() {
                None if error.get().is_none() => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(list) => {
                    let (group, fields) = build_panel(&list);
                    view! { <SettingsPanel group=group fields=fields /> }.into_any()
                }
            }}
        </div>
    }
}
