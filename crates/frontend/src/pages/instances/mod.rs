pub mod api;
pub mod state;

use contracts::shared::instances::Instance;
use leptos::prelude::*;
use thaw::*;

use crate::shared::settings_panel::ui::use_empty_state;
use api::fetch_instances;
use state::{placeholder_visibility, row_visibilities};

#[component]
pub fn InstancesPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Instance>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (keyword, set_keyword) = signal(String::new());
    let interactions = RwSignal::new(0u32);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_instances().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                    interactions.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let visibilities =
        Signal::derive(move || items.with(|list| keyword.with(|k| row_visibilities(list, k))));
    let empty = use_empty_state(visibilities, interactions.into());

    view! {
        <div class="page page--instances">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    id="keyword"
                    type="search"
                    class="form__input"
                    placeholder="Hostname"
                    on:input=move |ev| {
                        set_keyword.set(event_target_value(&ev));
                        interactions.update(|n| *n = n.wrapping_add(1));
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || loading.get())
                >
                    "Refresh"
                </Button>
                {move || loading.get().then(|| view! { <Spinner /> })}
            </Flex>

            {move || {
                error
                    .get()
                    .map(|e| view! { <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar> })
            }}

            <p data-instances-empty="" class=move || {
                    format!(
                        "instances__empty {}",
                        placeholder_visibility(empty.get(), error.with(Option::is_some)).class(),
                    )
                }
            >
                "No instance match"
            </p>

            <div class=move || empty.get().container.class()>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Hostname"</TableHeaderCell>
                            <TableHeaderCell>"Port"</TableHeaderCell>
                            <TableHeaderCell>"Server name"</TableHeaderCell>
                            <TableHeaderCell>"Method"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, instance)| {
                                    let hidden = move || {
                                        visibilities.with(|v| {
                                            v.get(idx).map(|v| !v.is_visible()).unwrap_or(true)
                                        })
                                    };
                                    let badge_color = if instance.is_up() {
                                        BadgeColor::Success
                                    } else {
                                        BadgeColor::Danger
                                    };
                                    let status = instance.status.clone().unwrap_or_else(|| "down".to_string());
                                    view! {
                                        <TableRow class:hidden=hidden>
                                            <TableCell>{instance.hostname}</TableCell>
                                            <TableCell>{instance.port}</TableCell>
                                            <TableCell>{instance.server_name}</TableCell>
                                            <TableCell>{instance.method}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                                                    {status}
                                                </Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
