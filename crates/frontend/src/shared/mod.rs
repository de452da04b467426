pub mod api_utils;
pub mod settings_panel;
