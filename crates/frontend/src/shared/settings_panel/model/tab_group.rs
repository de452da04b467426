use super::visibility::Visibility;

/// Строка настройки внутри панели вкладки
#[derive(Clone, Debug, PartialEq)]
pub struct SettingRow {
    pub id: String,
    pub label: String,
    pub filtered: bool,
}

/// Вкладка и её панель (общий ключ)
#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub key: String,
    pub label: String,
    pub rows: Vec<SettingRow>,
    pub filtered: bool,
}

impl Tab {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            rows: Vec::new(),
            filtered: false,
        }
    }

    pub fn with_row(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.rows.push(SettingRow {
            id: id.into(),
            label: label.into(),
            filtered: false,
        });
        self
    }
}

/// Группа взаимоисключающих вкладок.
///
/// Видимость панелей не хранится: панель показана, если её вкладка
/// активна и не отфильтрована поиском.
#[derive(Clone, Debug, PartialEq)]
pub struct TabGroup {
    tabs: Vec<Tab>,
    active: Option<String>,
}

impl TabGroup {
    /// The first tab starts active
    pub fn new(tabs: Vec<Tab>) -> Self {
        let active = tabs.first().map(|t| t.key.clone());
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub(super) fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    pub fn tab(&self, key: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.key == key)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.as_deref().and_then(|key| self.tab(key))
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.as_deref() == Some(key)
    }

    /// Activate `key`. Unknown or filtered-out keys leave the group untouched
    /// and return `false`.
    pub fn select(&mut self, key: &str) -> bool {
        match self.tab(key) {
            Some(tab) if !tab.filtered => {
                self.active = Some(key.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn tab_visibility(&self, key: &str) -> Visibility {
        match self.tab(key) {
            Some(tab) if tab.filtered => Visibility::Filtered,
            Some(_) => Visibility::Shown,
            None => Visibility::Hidden,
        }
    }

    pub fn panel_visibility(&self, key: &str) -> Visibility {
        match self.tab(key) {
            Some(tab) if tab.filtered => Visibility::Filtered,
            Some(_) => Visibility::shown_if(self.is_active(key)),
            None => Visibility::Hidden,
        }
    }

    pub fn row_visibility(&self, key: &str, row_id: &str) -> Visibility {
        self.tab(key)
            .and_then(|tab| tab.rows.iter().find(|r| r.id == row_id))
            .map(|row| {
                if row.filtered {
                    Visibility::Filtered
                } else {
                    Visibility::Shown
                }
            })
            .unwrap_or(Visibility::Hidden)
    }

    pub fn visible_panels(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|t| self.panel_visibility(&t.key).is_visible())
            .map(|t| t.key.as_str())
            .collect()
    }

    /// First tab not hidden by the filter, in document order
    pub fn first_visible(&self) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| !t.filtered)
            .map(|t| t.key.as_str())
    }

    /// `true` for an empty group as well
    pub fn all_filtered(&self) -> bool {
        self.tabs.iter().all(|t| t.filtered)
    }

    pub(super) fn clear_filter(&mut self) {
        for tab in &mut self.tabs {
            tab.filtered = false;
            for row in &mut tab.rows {
                row.filtered = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> TabGroup {
        TabGroup::new(vec![
            Tab::new("general", "General"),
            Tab::new("logs", "Log Settings"),
            Tab::new("ssl", "SSL"),
        ])
    }

    #[test]
    fn test_first_tab_active_by_default() {
        let g = group();
        assert_eq!(g.active(), Some("general"));
        assert_eq!(g.visible_panels(), vec!["general"]);
        assert_eq!(TabGroup::new(vec![]).active(), None);
    }

    #[test]
    fn test_select_shows_exactly_one_panel() {
        let mut g = group();
        for key in ["logs", "ssl", "general"] {
            assert!(g.select(key));
            assert_eq!(g.visible_panels(), vec![key]);
            assert_eq!(g.panel_visibility(key), Visibility::Shown);
        }
        assert_eq!(g.panel_visibility("logs"), Visibility::Hidden);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut g = group();
        g.select("logs");
        let before = g.clone();
        assert!(!g.select("nope"));
        assert_eq!(g, before);
    }

    #[test]
    fn test_row_visibility_unknown_row() {
        let g = TabGroup::new(vec![Tab::new("logs", "Logs").with_row("a", "A")]);
        assert_eq!(g.row_visibility("logs", "a"), Visibility::Shown);
        assert_eq!(g.row_visibility("logs", "b"), Visibility::Hidden);
    }
}
