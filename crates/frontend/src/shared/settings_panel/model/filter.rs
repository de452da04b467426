use super::tab_group::TabGroup;

/// Значение `data-tab-id` кнопки dropdown, когда поиск ничего не нашёл
pub const NO_MATCH_ID: &str = "no-match";
pub const NO_MATCH_LABEL: &str = "No match";

/// Результат применения фильтра
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Every tab is hidden, the empty state is shown
    NoMatch,
    /// The active tab is still visible
    Kept(String),
    /// The first visible tab was selected programmatically
    Selected(String),
}

/// Поиск по настройкам.
///
/// Строка скрывается, если её заголовок не содержит запрос. Если скрыты все
/// строки вкладки, скрывается и вкладка с панелью, но только когда запрос не
/// совпадает с названием самой вкладки: совпадение по названию оставляет
/// вкладку видимой даже без единой видимой строки.
#[derive(Clone, Debug, Default)]
pub struct SettingsFilter {
    last_no_match: bool,
    /// Active tab before the filter moved it, restored on `reset`
    pre_filter_active: Option<String>,
}

impl SettingsFilter {
    pub fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Clear every hidden-by-filter flag and give the selection back to the
    /// tab that was active before `apply`. Must run before each `apply`.
    pub fn reset(&mut self, group: &mut TabGroup) {
        group.clear_filter();
        if let Some(key) = self.pre_filter_active.take() {
            group.select(&key);
        }
    }

    /// A tab chosen by the user while filtered becomes the one `reset` restores
    pub fn note_selection(&mut self, key: &str) {
        if self.pre_filter_active.is_some() {
            self.pre_filter_active = Some(key.to_string());
        }
    }

    pub fn apply(&mut self, group: &mut TabGroup, query: &str) -> FilterOutcome {
        let query = Self::normalize(query);

        if group.tabs().iter().all(|t| !t.filtered) {
            self.pre_filter_active = group.active().map(str::to_string);
        }

        for tab in group.tabs_mut() {
            let mut hidden = 0;
            for row in &mut tab.rows {
                if !Self::normalize(&row.label).contains(&query) {
                    row.filtered = true;
                    hidden += 1;
                }
            }
            if hidden == tab.rows.len() && !Self::normalize(&tab.label).contains(&query) {
                tab.filtered = true;
            }
        }

        let Some(first_visible) = group.first_visible().map(str::to_string) else {
            self.last_no_match = true;
            return FilterOutcome::NoMatch;
        };

        let was_no_match = std::mem::replace(&mut self.last_no_match, false);
        match group.active().map(str::to_string) {
            Some(current) if !was_no_match && group.tab_visibility(&current).is_visible() => {
                FilterOutcome::Kept(current)
            }
            _ => {
                group.select(&first_visible);
                FilterOutcome::Selected(first_visible)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tab_group::Tab;
    use super::super::visibility::Visibility;
    use super::*;

    fn group() -> TabGroup {
        TabGroup::new(vec![
            Tab::new("general", "General")
                .with_row("server-name", "Server Name")
                .with_row("http-port", "HTTP Port"),
            Tab::new("logs", "Log Settings")
                .with_row("log-level", "Log Level")
                .with_row("log-path", "Log Path"),
        ])
    }

    fn search(filter: &mut SettingsFilter, group: &mut TabGroup, q: &str) -> FilterOutcome {
        filter.reset(group);
        filter.apply(group, q)
    }

    #[test]
    fn test_level_scenario() {
        let mut g = group();
        let mut f = SettingsFilter::default();

        let outcome = search(&mut f, &mut g, "level");

        assert_eq!(outcome, FilterOutcome::Selected("logs".into()));
        assert_eq!(g.tab_visibility("logs"), Visibility::Shown);
        assert_eq!(g.row_visibility("logs", "log-level"), Visibility::Shown);
        assert_eq!(g.row_visibility("logs", "log-path"), Visibility::Filtered);
        assert_eq!(g.tab_visibility("general"), Visibility::Filtered);
        assert_eq!(g.panel_visibility("general"), Visibility::Filtered);
        assert_eq!(g.visible_panels(), vec!["logs"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        search(&mut f, &mut g, "  LOG PATH ");
        assert_eq!(g.row_visibility("logs", "log-path"), Visibility::Shown);
        assert_eq!(g.row_visibility("logs", "log-level"), Visibility::Filtered);
    }

    #[test]
    fn test_tab_label_match_overrides_row_exhaustion() {
        let mut g = group();
        let mut f = SettingsFilter::default();

        let outcome = search(&mut f, &mut g, "settings");

        // no row label contains "settings", but the tab label does
        assert_eq!(g.row_visibility("logs", "log-level"), Visibility::Filtered);
        assert_eq!(g.row_visibility("logs", "log-path"), Visibility::Filtered);
        assert_eq!(g.tab_visibility("logs"), Visibility::Shown);
        assert_eq!(g.panel_visibility("logs"), Visibility::Shown);
        assert_eq!(outcome, FilterOutcome::Selected("logs".into()));
    }

    #[test]
    fn test_active_tab_kept_when_still_visible() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        g.select("logs");

        let outcome = search(&mut f, &mut g, "p");

        assert_eq!(outcome, FilterOutcome::Kept("logs".into()));
        assert_eq!(g.active(), Some("logs"));
    }

    #[test]
    fn test_apply_then_reset_restores_visibility() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        g.select("logs");
        let before = g.clone();

        f.apply(&mut g, "path");
        f.reset(&mut g);

        assert_eq!(g, before);
    }

    #[test]
    fn test_reset_restores_selection_after_it_moved() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        let before = g.clone();
        let panels_before: Vec<String> = g.visible_panels().iter().map(|k| k.to_string()).collect();

        assert_eq!(f.apply(&mut g, "level"), FilterOutcome::Selected("logs".into()));
        assert_eq!(g.visible_panels(), vec!["logs"]);
        f.reset(&mut g);

        assert_eq!(g.visible_panels(), panels_before);
        assert_eq!(g.active(), Some("general"));
        for tab in before.tabs() {
            assert_eq!(g.panel_visibility(&tab.key), before.panel_visibility(&tab.key));
        }
        assert_eq!(g, before);
    }

    #[test]
    fn test_typing_keeps_pre_filter_selection() {
        let mut g = group();
        let mut f = SettingsFilter::default();

        for q in ["l", "le", "lev", "level"] {
            search(&mut f, &mut g, q);
        }
        assert_eq!(g.active(), Some("logs"));

        f.reset(&mut g);
        assert_eq!(g.active(), Some("general"));
    }

    #[test]
    fn test_user_choice_while_filtered_survives_reset() {
        let mut g = group();
        let mut f = SettingsFilter::default();

        search(&mut f, &mut g, "p");
        assert!(g.select("logs"));
        f.note_selection("logs");

        f.reset(&mut g);
        assert_eq!(g.active(), Some("logs"));
    }

    #[test]
    fn test_reset_without_apply_keeps_selection() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        g.select("logs");
        f.reset(&mut g);
        assert_eq!(g.active(), Some("logs"));
    }

    #[test]
    fn test_no_match_then_match_selects_first_visible() {
        let mut g = group();
        let mut f = SettingsFilter::default();

        assert_eq!(search(&mut f, &mut g, "xyz"), FilterOutcome::NoMatch);
        assert!(g.all_filtered());
        assert!(g.visible_panels().is_empty());

        // "general" stayed active through the no-match, still re-selected
        let outcome = search(&mut f, &mut g, "port");
        assert_eq!(outcome, FilterOutcome::Selected("general".into()));
        assert!(!g.all_filtered());
    }

    #[test]
    fn test_no_match_persists_until_matching_query() {
        let mut g = group();
        let mut f = SettingsFilter::default();
        search(&mut f, &mut g, "xyz");
        assert_eq!(search(&mut f, &mut g, "xyzw"), FilterOutcome::NoMatch);
        assert!(g.all_filtered());
        assert_eq!(search(&mut f, &mut g, ""), FilterOutcome::Selected("general".into()));
    }

    #[test]
    fn test_empty_tab_hidden_unless_label_matches() {
        let mut g = TabGroup::new(vec![
            Tab::new("empty", "Empty"),
            Tab::new("logs", "Logs").with_row("log-level", "Log Level"),
        ]);
        let mut f = SettingsFilter::default();

        search(&mut f, &mut g, "level");
        assert_eq!(g.tab_visibility("empty"), Visibility::Filtered);

        search(&mut f, &mut g, "emp");
        assert_eq!(g.tab_visibility("empty"), Visibility::Shown);

        search(&mut f, &mut g, "");
        assert_eq!(g.tab_visibility("empty"), Visibility::Shown);
    }
}
