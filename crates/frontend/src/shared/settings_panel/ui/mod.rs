pub mod dom;
pub mod empty_state;
pub mod panels;
pub mod popover;
pub mod search;
pub mod setting_field;
pub mod settings_panel;
pub mod tab_bar;
pub mod tab_select;

pub use empty_state::use_empty_state;
pub use popover::PopoverHelp;
pub use setting_field::{SettingField, SettingFieldSpec};
pub use settings_panel::SettingsPanel;
