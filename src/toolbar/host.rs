use crate::showcase::{SettingChange, Theme};

/// Callbacks owned by the screen hosting the toolbar.
pub trait ShowcaseHost {
    fn theme_selected(&mut self, theme: &Theme);
    fn setting_selected(&mut self, change: SettingChange);
    fn reset(&mut self);
}
