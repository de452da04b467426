//! Панель настроек: вкладки, выпадающий выбор вкладки (мобильный вид),
//! поиск по настройкам, индикатор "ничего не найдено", inline-валидация
//! полей и подсказки-поповеры.
//!
//! - `model` - чистое состояние без DOM, видимость как явный enum
//! - `ui` - Leptos-компоненты, рендерящие состояние в CSS-классы

pub mod model;
pub mod ui;

pub use model::{SettingsPanelState, Visibility};
