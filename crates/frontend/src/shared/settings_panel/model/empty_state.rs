use super::visibility::Visibility;

/// Задержка пересчёта пустого состояния, мс.
///
/// Пересчёт должен видеть DOM после всех остальных обработчиков того же события.
pub const EMPTY_STATE_DELAY_MS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyStateView {
    pub placeholder: Visibility,
    pub container: Visibility,
}

impl EmptyStateView {
    /// Before the first recompute: container shown, placeholder hidden
    pub fn initial() -> Self {
        Self {
            placeholder: Visibility::Hidden,
            container: Visibility::Shown,
        }
    }
}

/// All tracked elements hidden (or none tracked) -> placeholder shown, container hidden
pub fn recompute<I>(tracked: I) -> EmptyStateView
where
    I: IntoIterator<Item = Visibility>,
{
    let all_hidden = tracked.into_iter().all(|v| !v.is_visible());
    EmptyStateView {
        placeholder: Visibility::shown_if(all_hidden),
        container: Visibility::shown_if(!all_hidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_hidden_shows_placeholder() {
        let view = recompute([Visibility::Filtered, Visibility::Hidden]);
        assert_eq!(view.placeholder, Visibility::Shown);
        assert_eq!(view.container, Visibility::Hidden);
    }

    #[test]
    fn test_any_visible_hides_placeholder() {
        let view = recompute([Visibility::Filtered, Visibility::Shown]);
        assert_eq!(view, EmptyStateView::initial());
    }

    #[test]
    fn test_nothing_tracked_counts_as_empty() {
        let view = recompute(std::iter::empty());
        assert!(view.placeholder.is_visible());
    }
}
