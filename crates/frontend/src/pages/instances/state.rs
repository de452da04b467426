use contracts::shared::instances::Instance;

use crate::shared::settings_panel::model::{EmptyStateView, SettingsFilter, Visibility};

/// Видимость строк таблицы по ключевому слову (подстрока hostname)
pub fn row_visibilities(instances: &[Instance], keyword: &str) -> Vec<Visibility> {
    let keyword = SettingsFilter::normalize(keyword);
    instances
        .iter()
        .map(|i| {
            if SettingsFilter::normalize(&i.hostname).contains(&keyword) {
                Visibility::Shown
            } else {
                Visibility::Filtered
            }
        })
        .collect()
}

/// Заглушка "нет совпадений" не показывается рядом с ошибкой загрузки
pub fn placeholder_visibility(view: EmptyStateView, failed: bool) -> Visibility {
    if failed {
        Visibility::Hidden
    } else {
        view.placeholder
    }
}
