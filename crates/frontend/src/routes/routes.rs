use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages::global_config::GlobalConfigPage;
use crate::pages::instances::InstancesPage;
use leptos::prelude::*;

#[component]
fn PageContent() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.page.get() {
        Page::GlobalConfig => view! { <GlobalConfigPage /> }.into_any(),
        Page::Instances => view! { <InstancesPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageContent /> }.into_any()
        />
    }
}
