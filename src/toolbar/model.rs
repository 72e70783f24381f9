use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::ResolvedShowcase;
use crate::platform::Platform;
use crate::showcase::{SettingDescriptor, Theme};
use crate::toolbar::commands::{
    Command, CMD_BASE_SETTING, CMD_BASE_THEME, CMD_RESET, CMD_TOGGLE_DIRECTION,
    CMD_TOGGLE_SETTINGS_MENU, CMD_TOGGLE_THEMES_MENU,
};
use crate::toolbar::common;
use crate::toolbar::host::ShowcaseHost;
use crate::toolbar::menu::{MenuItem, MenuSpec};

/// The settings toolbar of the showcase screen: two dropdown pickers, a
/// reset button, and the RTL checkbox. Holds only the dropdown visibility;
/// everything it decides is reported through [`ShowcaseHost`] and
/// [`ToolbarUpdate`].
pub struct ToolbarModel {
    themes: Option<Vec<Theme>>,
    settings: Option<Vec<SettingDescriptor>>,
    themes_menu_visible: bool,
    settings_menu_visible: bool,
    last_error: Option<String>,
}

/// What the frontend should do after a command was handled.
#[derive(Debug, Default, Clone)]
pub struct ToolbarUpdate {
    pub refresh: bool,
    pub reload: bool,
    pub quit: bool,
}

fn refresh() -> ToolbarUpdate {
    ToolbarUpdate {
        refresh: true,
        ..Default::default()
    }
}

impl ToolbarModel {
    pub fn new(
        themes: Option<Vec<Theme>>,
        settings: Option<Vec<SettingDescriptor>>,
    ) -> Self {
        Self {
            themes,
            settings,
            themes_menu_visible: false,
            settings_menu_visible: false,
            last_error: None,
        }
    }

    pub fn from_resolved(showcase: ResolvedShowcase) -> Self {
        Self::new(showcase.themes, showcase.settings)
    }

    pub fn theme_count(&self) -> usize {
        self.themes.as_ref().map_or(0, Vec::len)
    }

    pub fn setting_count(&self) -> usize {
        self.settings.as_ref().map_or(0, Vec::len)
    }

    /// The theme control is live whenever a theme list was supplied at all.
    pub fn themes_enabled(&self) -> bool {
        self.themes.is_some()
    }

    /// The settings and reset controls need at least one setting.
    pub fn settings_enabled(&self) -> bool {
        self.settings.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn themes_menu_visible(&self) -> bool {
        self.themes_menu_visible
    }

    pub fn settings_menu_visible(&self) -> bool {
        self.settings_menu_visible
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The toolbar row itself: one entry per control, with enabled/checked
    /// state for the frontend to draw.
    pub fn toolbar_spec(&self, platform: &dyn Platform) -> MenuSpec {
        MenuSpec::new(vec![
            MenuItem::Action {
                id: CMD_TOGGLE_THEMES_MENU,
                title: "Themes".to_string(),
                checked: self.themes_menu_visible,
                enabled: self.themes_enabled(),
            },
            MenuItem::Action {
                id: CMD_TOGGLE_SETTINGS_MENU,
                title: "Settings".to_string(),
                checked: self.settings_menu_visible,
                enabled: self.settings_enabled(),
            },
            MenuItem::Action {
                id: CMD_RESET,
                title: "Reset".to_string(),
                checked: false,
                enabled: self.settings_enabled(),
            },
            MenuItem::Action {
                id: CMD_TOGGLE_DIRECTION,
                title: "RTL".to_string(),
                checked: platform.forced_rtl(),
                enabled: true,
            },
        ])
    }

    pub fn themes_menu_spec(&self) -> MenuSpec {
        let mut items = vec![MenuItem::Header("Themes".to_string())];
        if let Some(themes) = &self.themes {
            for (idx, theme) in themes.iter().enumerate() {
                items.push(MenuItem::Action {
                    id: CMD_BASE_THEME + idx as u16,
                    title: common::theme_label(theme).to_string(),
                    checked: false,
                    enabled: true,
                });
            }
        }
        MenuSpec::new(items)
    }

    pub fn settings_menu_spec(&self) -> MenuSpec {
        let mut items = vec![MenuItem::Header("Settings".to_string())];
        if let Some(settings) = &self.settings {
            for (idx, setting) in settings.iter().enumerate() {
                items.push(MenuItem::Action {
                    id: CMD_BASE_SETTING + idx as u16,
                    title: common::setting_label(setting),
                    checked: false,
                    enabled: true,
                });
            }
        }
        MenuSpec::new(items)
    }

    pub fn handle(
        &mut self,
        cmd: Command,
        host: &mut dyn ShowcaseHost,
        platform: &mut dyn Platform,
    ) -> Result<ToolbarUpdate> {
        debug!(?cmd, "toolbar command");

        let update = match cmd {
            Command::ToggleThemesMenu => {
                if self.themes_enabled() {
                    self.themes_menu_visible = !self.themes_menu_visible;
                }
                refresh()
            }
            Command::ToggleSettingsMenu => {
                if self.settings_enabled() {
                    self.settings_menu_visible = !self.settings_menu_visible;
                }
                refresh()
            }
            Command::SelectTheme(index) => self.select_theme(index, host),
            Command::SelectSetting(index) => self.select_setting(index, host),
            Command::DismissThemesMenu => {
                self.themes_menu_visible = false;
                refresh()
            }
            Command::DismissSettingsMenu => {
                self.settings_menu_visible = false;
                refresh()
            }
            Command::Reset => {
                if self.settings_enabled() {
                    host.reset();
                }
                refresh()
            }
            Command::ToggleDirection => self
                .toggle_direction(platform)
                .unwrap_or_else(|err| self.note_error(err)),
            Command::Quit => ToolbarUpdate {
                quit: true,
                ..Default::default()
            },
        };

        Ok(update)
    }

    fn select_theme(&mut self, index: usize, host: &mut dyn ShowcaseHost) -> ToolbarUpdate {
        let Some(theme) = self.themes.as_ref().and_then(|themes| themes.get(index)) else {
            warn!(index, "theme selection out of range");
            return ToolbarUpdate::default();
        };
        host.theme_selected(theme);
        self.themes_menu_visible = false;
        refresh()
    }

    fn select_setting(&mut self, index: usize, host: &mut dyn ShowcaseHost) -> ToolbarUpdate {
        let Some(setting) = self
            .settings
            .as_ref()
            .and_then(|settings| settings.get(index))
        else {
            warn!(index, "setting selection out of range");
            return ToolbarUpdate::default();
        };
        host.setting_selected(setting.change());
        self.settings_menu_visible = false;
        refresh()
    }

    // The allowed flag receives the forced flag's value from before the
    // toggle, not after it; after two toggles it equals the forced value
    // the first toggle produced.
    fn toggle_direction(&mut self, platform: &mut dyn Platform) -> Result<ToolbarUpdate> {
        let prior = platform.forced_rtl();
        platform
            .set_forced_rtl(!prior)
            .context("set forced direction")?;
        platform
            .set_allowed_rtl(prior)
            .context("set allowed direction")?;
        self.last_error = None;

        Ok(ToolbarUpdate {
            refresh: true,
            reload: platform.supports_reload(),
            ..Default::default()
        })
    }

    fn note_error(&mut self, err: anyhow::Error) -> ToolbarUpdate {
        self.last_error = Some(err.to_string());
        refresh()
    }
}
