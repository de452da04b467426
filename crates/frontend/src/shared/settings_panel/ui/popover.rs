use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model::{PopoverState, POPOVER_SETTLE_MS};

/// Кнопка "?" с подсказкой, появляющейся при наведении
#[component]
pub fn PopoverHelp(
    /// Имя поповера (`data-popover-btn` / `data-popover-content`)
    #[prop(into)]
    name: String,
    /// Текст подсказки
    #[prop(into)]
    text: String,
) -> impl IntoView {
    let state = RwSignal::new(PopoverState::default());

    let show = move |_| {
        state.update(|p| p.show());
        spawn_local(async move {
            TimeoutFuture::new(POPOVER_SETTLE_MS).await;
            let _ = state.try_update(|p| p.settle());
        });
    };
    let hide = move |_| state.update(|p| p.hide());

    view! {
        <div class="popover">
            <button
                type="button"
                class="popover__btn"
                aria-label="help"
                data-popover-btn=name.clone()
                on:pointerover=show
                on:pointerout=hide
            >
                "?"
            </button>
            <p
                data-popover-content=name
                class=move || format!("popover__content {}", state.get().class())
            >
                {text}
            </p>
        </div>
    }
}
