/// Маркер-класс скрытого элемента
pub const CLASS_HIDDEN: &str = "hidden";
/// Класс принудительного скрытия фильтром, перекрывает логику вкладок
pub const CLASS_FORCE_HIDDEN: &str = "!hidden";
pub const CLASS_ACTIVE: &str = "active";

/// Видимость вкладки, панели или строки настройки.
///
/// `Hidden` - скрыто выбором другой вкладки, `Filtered` - скрыто поиском.
/// CSS-классы вычисляются из этого значения и нигде не хранятся.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
    Filtered,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Shown
    }

    pub fn shown_if(visible: bool) -> Self {
        if visible {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// Class for panels, rows and placeholders
    pub fn class(self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden | Visibility::Filtered => CLASS_HIDDEN,
        }
    }

    /// Class for tab buttons: filtered tabs get the forced variant
    pub fn tab_class(self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => CLASS_HIDDEN,
            Visibility::Filtered => CLASS_FORCE_HIDDEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        assert_eq!(Visibility::Shown.class(), "");
        assert_eq!(Visibility::Hidden.class(), "hidden");
        assert_eq!(Visibility::Filtered.class(), "hidden");
        assert_eq!(Visibility::Filtered.tab_class(), "!hidden");
        assert!(!Visibility::Filtered.is_visible());
        assert_eq!(Visibility::shown_if(false), Visibility::Hidden);
    }
}
