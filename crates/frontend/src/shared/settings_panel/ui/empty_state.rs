use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model::{recompute, EmptyStateView, Visibility, EMPTY_STATE_DELAY_MS};

/// Пустое состояние для отфильтрованного списка.
///
/// Пересчитывается с задержкой после каждого изменения `trigger`, чтобы увидеть
/// итоговую видимость `tracked` после всех обработчиков события.
/// Первый запуск эффекта пропускается: до первого взаимодействия контейнер показан.
pub fn use_empty_state(
    tracked: Signal<Vec<Visibility>>,
    trigger: Signal<u32>,
) -> ReadSignal<EmptyStateView> {
    let (view, set_view) = signal(EmptyStateView::initial());

    Effect::new(move |prev: Option<()>| {
        trigger.track();
        if prev.is_none() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(EMPTY_STATE_DELAY_MS).await;
            let Some(items) = tracked.try_get_untracked() else {
                return;
            };
            let next = recompute(items);
            log::debug!("empty state recomputed: {:?}", next.placeholder);
            let _ = set_view.try_set(next);
        });
    });

    view
}
