use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

/// Страницы приложения
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    GlobalConfig,
    Instances,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::GlobalConfig, Page::Instances];

    pub fn key(self) -> &'static str {
        match self {
            Page::GlobalConfig => "global_config",
            Page::Instances => "instances",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::GlobalConfig => "Global config",
            Page::Instances => "Instances",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// `?page=...` -> page; unknown or missing values give `None`
pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(PAGE_PARAM).and_then(|key| Page::from_key(key))
}

pub fn page_query(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([(
        PAGE_PARAM.to_string(),
        page.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Синхронизация активной страницы с URL (?page=...)
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_query(this.page.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.page.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
