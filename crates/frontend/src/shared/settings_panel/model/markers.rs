/// Маркер-атрибуты, по которым обработчик находит элемент события.
///
/// Сами обработчики регистрируются компонентами явно.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    TabHandler,
    TabSelectHandler,
    SettingInput,
}

impl Marker {
    pub const fn attr(self) -> &'static str {
        match self {
            Marker::TabHandler => "data-tab-handler",
            Marker::TabSelectHandler => "data-tab-select-handler",
            Marker::SettingInput => "data-setting-input",
        }
    }

    /// CSS selector matching any element carrying the marker
    pub fn selector(self) -> String {
        format!("[{}]", self.attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(Marker::TabHandler.selector(), "[data-tab-handler]");
        assert_eq!(Marker::SettingInput.attr(), "data-setting-input");
    }
}
