/// Через сколько мс после показа снимается `opacity-0` (запуск fade-in)
pub const POPOVER_SETTLE_MS: u32 = 10;

/// Состояние всплывающей подсказки
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Hidden,
    /// Visible but still transparent, waiting for the fade-in
    Entering,
    Shown,
}

impl PopoverState {
    pub fn show(&mut self) {
        *self = PopoverState::Entering;
    }

    /// Finish the fade-in. Ignored unless entering.
    pub fn settle(&mut self) {
        if *self == PopoverState::Entering {
            *self = PopoverState::Shown;
        }
    }

    pub fn hide(&mut self) {
        *self = PopoverState::Hidden;
    }

    pub fn class(self) -> &'static str {
        match self {
            PopoverState::Hidden => "hidden",
            PopoverState::Entering => "transition-all delay-200 opacity-0",
            PopoverState::Shown => "transition-all delay-200",
        }
    }
}
