use super::filter::{NO_MATCH_ID, NO_MATCH_LABEL};
use super::tab_group::TabGroup;

/// Открыт/закрыт выпадающий список вкладок (мобильный вид)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `hidden` / `flex` class pair of the menu
    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "flex"
        } else {
            "hidden"
        }
    }

    /// The arrow points up while the menu is open
    pub fn arrow_class(&self) -> &'static str {
        if self.open {
            "rotate-180"
        } else {
            ""
        }
    }
}

/// Текст и `data-tab-id` кнопки dropdown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownCaption {
    pub tab_id: String,
    pub label: String,
}

impl DropdownCaption {
    pub fn for_group(group: &TabGroup) -> Self {
        if group.all_filtered() {
            return Self {
                tab_id: NO_MATCH_ID.to_string(),
                label: NO_MATCH_LABEL.to_string(),
            };
        }
        match group.active_tab() {
            Some(tab) => Self {
                tab_id: tab.key.clone(),
                label: tab.label.trim().to_string(),
            },
            None => Self {
                tab_id: String::new(),
                label: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_syncs_arrow() {
        let mut d = DropdownState::default();
        assert_eq!((d.menu_class(), d.arrow_class()), ("hidden", ""));
        d.toggle();
        assert_eq!((d.menu_class(), d.arrow_class()), ("flex", "rotate-180"));
        d.toggle();
        assert_eq!((d.menu_class(), d.arrow_class()), ("hidden", ""));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut d = DropdownState::default();
        d.close();
        assert!(!d.is_open());
        d.toggle();
        d.close();
        d.close();
        assert_eq!(d.arrow_class(), "");
    }
}
