//! Command ids shared between the toolbar model and its frontends.
//!
//! Menu entries carry numeric ids so frontends stay dumb: they hand the id
//! of whatever was activated back to [`decode`], which turns it into a typed
//! [`Command`]. Ids for list entries are base + position; `decode` refuses
//! ids that fall outside the lists currently on screen.

pub const CMD_BASE_THEME: u16 = 2000;
pub const CMD_BASE_SETTING: u16 = 3000;
pub const CMD_TOGGLE_THEMES_MENU: u16 = 5000;
pub const CMD_TOGGLE_SETTINGS_MENU: u16 = 5001;
pub const CMD_DISMISS_THEMES_MENU: u16 = 5002;
pub const CMD_DISMISS_SETTINGS_MENU: u16 = 5003;
pub const CMD_RESET: u16 = 5004;
pub const CMD_TOGGLE_DIRECTION: u16 = 5005;
pub const CMD_QUIT: u16 = 5006;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleThemesMenu,
    ToggleSettingsMenu,
    SelectTheme(usize),
    SelectSetting(usize),
    DismissThemesMenu,
    DismissSettingsMenu,
    Reset,
    ToggleDirection,
    Quit,
}

pub fn decode(cmd_id: u16, theme_count: usize, setting_count: usize) -> Option<Command> {
    if let Some(idx) = index_in_range(cmd_id, CMD_BASE_THEME, theme_count) {
        return Some(Command::SelectTheme(idx));
    }
    if let Some(idx) = index_in_range(cmd_id, CMD_BASE_SETTING, setting_count) {
        return Some(Command::SelectSetting(idx));
    }

    match cmd_id {
        CMD_TOGGLE_THEMES_MENU => Some(Command::ToggleThemesMenu),
        CMD_TOGGLE_SETTINGS_MENU => Some(Command::ToggleSettingsMenu),
        CMD_DISMISS_THEMES_MENU => Some(Command::DismissThemesMenu),
        CMD_DISMISS_SETTINGS_MENU => Some(Command::DismissSettingsMenu),
        CMD_RESET => Some(Command::Reset),
        CMD_TOGGLE_DIRECTION => Some(Command::ToggleDirection),
        CMD_QUIT => Some(Command::Quit),
        _ => None,
    }
}

fn index_in_range(cmd_id: u16, base: u16, count: usize) -> Option<usize> {
    let idx = cmd_id.checked_sub(base)? as usize;
    (idx < count).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_theme_ids_within_the_current_list() {
        assert_eq!(
            decode(CMD_BASE_THEME, 3, 0),
            Some(Command::SelectTheme(0))
        );
        assert_eq!(
            decode(CMD_BASE_THEME + 2, 3, 0),
            Some(Command::SelectTheme(2))
        );
    }

    #[test]
    fn rejects_theme_ids_past_the_list_end() {
        assert_eq!(decode(CMD_BASE_THEME + 3, 3, 0), None);
        assert_eq!(decode(CMD_BASE_THEME, 0, 0), None);
    }

    #[test]
    fn decodes_setting_ids_within_the_current_list() {
        assert_eq!(
            decode(CMD_BASE_SETTING + 1, 0, 2),
            Some(Command::SelectSetting(1))
        );
        assert_eq!(decode(CMD_BASE_SETTING + 2, 0, 2), None);
    }

    #[test]
    fn decodes_fixed_action_ids() {
        assert_eq!(decode(CMD_RESET, 0, 0), Some(Command::Reset));
        assert_eq!(
            decode(CMD_TOGGLE_DIRECTION, 0, 0),
            Some(Command::ToggleDirection)
        );
        assert_eq!(decode(CMD_QUIT, 0, 0), Some(Command::Quit));
    }

    #[test]
    fn rejects_unknown_ids() {
        assert_eq!(decode(100, 5, 5), None);
        assert_eq!(decode(u16::MAX, 5, 5), None);
    }
}
