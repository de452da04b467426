//! Боковое меню: переключение страниц

use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ctx.page.get() == page
                                    on:click=move |_| ctx.open_page(page)
                                >
                                    {page.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
