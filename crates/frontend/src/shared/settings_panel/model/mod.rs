pub mod dropdown;
pub mod empty_state;
pub mod filter;
pub mod markers;
pub mod popover;
pub mod tab_group;
pub mod validation;
pub mod visibility;

pub use dropdown::{DropdownCaption, DropdownState};
pub use empty_state::{recompute, EmptyStateView, EMPTY_STATE_DELAY_MS};
pub use filter::{FilterOutcome, SettingsFilter, NO_MATCH_ID, NO_MATCH_LABEL};
pub use markers::Marker;
pub use popover::{PopoverState, POPOVER_SETTLE_MS};
pub use tab_group::{SettingRow, Tab, TabGroup};
pub use validation::{format_value, initial_feedback, reflect, Constraint, FieldFeedback, Validity};
pub use visibility::{Visibility, CLASS_ACTIVE};

/// Состояние одной панели настроек: группа вкладок, dropdown и фильтр.
///
/// Десктопные вкладки и мобильный dropdown - два представления одной группы.
#[derive(Clone, Debug)]
pub struct SettingsPanelState {
    pub group: TabGroup,
    pub dropdown: DropdownState,
    filter: SettingsFilter,
}

impl SettingsPanelState {
    pub fn new(group: TabGroup) -> Self {
        Self {
            group,
            dropdown: DropdownState::default(),
            filter: SettingsFilter::default(),
        }
    }

    /// Click on a desktop tab
    pub fn select_tab(&mut self, key: &str) -> bool {
        if !self.group.select(key) {
            return false;
        }
        self.filter.note_selection(key);
        true
    }

    /// Click on a dropdown item: select and close the dropdown
    pub fn select_from_dropdown(&mut self, key: &str) -> bool {
        if !self.select_tab(key) {
            return false;
        }
        self.dropdown.close();
        true
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown.toggle();
    }

    /// Reset the previous filter, then apply `query`.
    /// The dropdown closes unless nothing matched.
    pub fn search(&mut self, query: &str) -> FilterOutcome {
        self.filter.reset(&mut self.group);
        let outcome = self.filter.apply(&mut self.group, query);
        if outcome != FilterOutcome::NoMatch {
            self.dropdown.close();
        }
        outcome
    }

    pub fn reset_search(&mut self) {
        self.filter.reset(&mut self.group);
    }

    pub fn is_no_match(&self) -> bool {
        self.group.all_filtered()
    }

    pub fn dropdown_caption(&self) -> DropdownCaption {
        DropdownCaption::for_group(&self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SettingsPanelState {
        SettingsPanelState::new(TabGroup::new(vec![
            Tab::new("general", "General").with_row("server-name", "Server Name"),
            Tab::new("logs", "Log Settings")
                .with_row("log-level", "Log Level")
                .with_row("log-path", "Log Path"),
        ]))
    }

    #[test]
    fn test_dropdown_select_closes_and_updates_caption() {
        let mut s = state();
        s.toggle_dropdown();
        assert!(s.dropdown.is_open());

        assert!(s.select_from_dropdown("logs"));
        assert!(!s.dropdown.is_open());
        let caption = s.dropdown_caption();
        assert_eq!(caption.tab_id, "logs");
        assert_eq!(caption.label, "Log Settings");
    }

    #[test]
    fn test_dropdown_unknown_key_is_noop() {
        let mut s = state();
        s.toggle_dropdown();
        assert!(!s.select_from_dropdown("missing"));
        assert!(s.dropdown.is_open());
        assert_eq!(s.group.active(), Some("general"));
    }

    #[test]
    fn test_no_match_caption_until_reset() {
        let mut s = state();
        assert_eq!(s.search("zzz"), FilterOutcome::NoMatch);
        assert!(s.is_no_match());
        assert_eq!(s.dropdown_caption().tab_id, NO_MATCH_ID);
        assert_eq!(s.dropdown_caption().label, NO_MATCH_LABEL);

        s.reset_search();
        assert!(!s.is_no_match());
        assert_eq!(s.dropdown_caption().label, "General");
    }

    #[test]
    fn test_search_then_reset_restores_visible_panel() {
        let mut s = state();
        let before: Vec<String> = s.group.visible_panels().iter().map(|k| k.to_string()).collect();

        s.search("level");
        assert_eq!(s.group.visible_panels(), vec!["logs"]);
        s.reset_search();

        assert_eq!(s.group.visible_panels(), before);
        assert_eq!(s.group.active(), Some("general"));
    }

    #[test]
    fn test_search_closes_dropdown() {
        let mut s = state();
        s.toggle_dropdown();
        assert_eq!(s.search("level"), FilterOutcome::Selected("logs".into()));
        assert!(!s.dropdown.is_open());

        s.toggle_dropdown();
        assert_eq!(s.search("e"), FilterOutcome::Kept("general".into()));
        assert!(!s.dropdown.is_open());
    }

    #[test]
    fn test_no_match_leaves_dropdown_open() {
        let mut s = state();
        s.toggle_dropdown();
        assert_eq!(s.search("zzz"), FilterOutcome::NoMatch);
        assert!(s.dropdown.is_open());
    }

    #[test]
    fn test_filtered_tab_cannot_be_reshown_by_click() {
        let mut s = state();
        s.search("level");
        assert!(!s.select_tab("general"));
        assert_eq!(s.group.tab_visibility("general"), Visibility::Filtered);
        assert_eq!(s.group.active(), Some("logs"));
    }
}
