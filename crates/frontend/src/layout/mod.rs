pub mod global_context;
pub mod left;

use leptos::prelude::*;

use global_context::AppGlobalContext;

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |              top header                  |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    type="button"
                    class="top-header__toggle"
                    aria-label="menu"
                    on:click=move |_| ctx.toggle_left()
                >
                    "☰"
                </button>
                <span class="top-header__title">{move || ctx.page.get().label()}</span>
            </header>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div data-zone="center" class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
