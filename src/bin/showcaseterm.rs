use anyhow::Result;

#[cfg(target_arch = "wasm32")]
fn main() -> Result<()> {
    anyhow::bail!("showcaseterm needs a real terminal; build it for a native target");
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    terminal_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal_app {
    use std::io::{self, Write};

    use anyhow::{Context, Result};
    use crossterm::{
        cursor,
        event::{self, Event, KeyCode, KeyEventKind},
        queue,
        style::Print,
        terminal::{self, Clear, ClearType},
    };

    use showcasectl::config;
    use showcasectl::platform::{self, Platform};
    use showcasectl::showcase::{SettingChange, Theme};
    use showcasectl::telemetry;
    use showcasectl::toolbar::commands::{decode, Command};
    use showcasectl::toolbar::host::ShowcaseHost;
    use showcasectl::toolbar::menu::MenuItem;
    use showcasectl::toolbar::model::ToolbarModel;
    use showcasectl::toolbar::render;

    pub fn run() -> Result<()> {
        telemetry::init_tracing();
        let mut app = App::new()?;

        terminal::enable_raw_mode().context("enable raw mode")?;
        let result = app.run_loop();
        let _ = terminal::disable_raw_mode();
        println!();

        result
    }

    /// The parent screen: owns the showcased component's active theme and
    /// the property overrides picked through the settings menu.
    #[derive(Default)]
    struct ShowcaseScreen {
        active_theme: Option<Theme>,
        overrides: Vec<SettingChange>,
    }

    impl ShowcaseHost for ShowcaseScreen {
        fn theme_selected(&mut self, theme: &Theme) {
            self.active_theme = Some(theme.clone());
        }

        fn setting_selected(&mut self, change: SettingChange) {
            self.overrides
                .retain(|c| c.property_name != change.property_name);
            self.overrides.push(change);
        }

        fn reset(&mut self) {
            self.overrides.clear();
        }
    }

    struct App {
        model: ToolbarModel,
        platform: Box<dyn Platform>,
        screen: ShowcaseScreen,
    }

    impl App {
        fn new() -> Result<Self> {
            let cfg = config::load_optional()?;
            let resolved = config::resolve(cfg.as_ref());

            Ok(Self {
                model: ToolbarModel::from_resolved(resolved),
                platform: platform::platform()?,
                screen: ShowcaseScreen::default(),
            })
        }

        fn run_loop(&mut self) -> Result<()> {
            loop {
                self.draw().context("draw frame")?;

                let Some(cmd) = next_command(&self.model)? else {
                    continue;
                };
                let update = self
                    .model
                    .handle(cmd, &mut self.screen, &mut *self.platform)?;

                if update.quit {
                    break;
                }
                if update.reload {
                    // Fire-and-forget restart so the direction change takes
                    // visual effect; on success this never returns.
                    let _ = terminal::disable_raw_mode();
                    self.platform.reload().context("reload application")?;
                }
            }
            Ok(())
        }

        fn draw(&self) -> Result<()> {
            let mut out = io::stdout();
            queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0)).context("clear frame")?;

            let mut lines = vec![
                "Component showcase".to_string(),
                String::new(),
                render::render_toolbar(&self.model.toolbar_spec(&*self.platform)),
                String::new(),
            ];

            if self.model.themes_menu_visible() {
                lines.extend(
                    render::render_menu(&self.model.themes_menu_spec())
                        .lines()
                        .map(str::to_string),
                );
            }
            if self.model.settings_menu_visible() {
                lines.extend(
                    render::render_menu(&self.model.settings_menu_spec())
                        .lines()
                        .map(str::to_string),
                );
            }

            lines.push(String::new());
            lines.push(self.screen_summary());
            if let Some(err) = self.model.last_error() {
                lines.push(format!("error: {err}"));
            }
            lines.push(String::new());
            lines.push(
                "t themes  s settings  1-9 select  esc close  r reset  d rtl  q quit".to_string(),
            );

            for line in lines {
                queue!(out, Print(line), cursor::MoveToNextLine(1)).context("draw line")?;
            }
            out.flush().context("flush frame")
        }

        fn screen_summary(&self) -> String {
            let theme = self
                .screen
                .active_theme
                .as_ref()
                .map(|t| t.title.as_str())
                .unwrap_or("(default)");
            let layout = if self.platform.forced_rtl() {
                "rtl"
            } else {
                "ltr"
            };

            let overrides = if self.screen.overrides.is_empty() {
                "none".to_string()
            } else {
                self.screen
                    .overrides
                    .iter()
                    .map(|c| format!("{}={}", c.property_name, c.value))
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            format!("theme: {theme}  layout: {layout}  overrides: {overrides}")
        }
    }

    fn next_command(model: &ToolbarModel) -> Result<Option<Command>> {
        let ev = event::read().context("read terminal event")?;
        let Event::Key(key) = ev else {
            return Ok(None);
        };
        if key.kind == KeyEventKind::Release {
            return Ok(None);
        }
        Ok(map_key(key.code, model))
    }

    fn map_key(code: KeyCode, model: &ToolbarModel) -> Option<Command> {
        match code {
            KeyCode::Char('t') => Some(Command::ToggleThemesMenu),
            KeyCode::Char('s') => Some(Command::ToggleSettingsMenu),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('d') => Some(Command::ToggleDirection),
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Esc => {
                if model.settings_menu_visible() {
                    Some(Command::DismissSettingsMenu)
                } else if model.themes_menu_visible() {
                    Some(Command::DismissThemesMenu)
                } else {
                    None
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits activate the numbered row of whichever dropdown is
                // open; the row's command id goes through `decode` like any
                // other widget activation.
                let pos = (c as usize) - ('1' as usize);
                let spec = if model.themes_menu_visible() {
                    model.themes_menu_spec()
                } else if model.settings_menu_visible() {
                    model.settings_menu_spec()
                } else {
                    return None;
                };
                let id = spec.actions().nth(pos).and_then(|item| match item {
                    MenuItem::Action { id, .. } => Some(*id),
                    _ => None,
                })?;
                decode(id, model.theme_count(), model.setting_count())
            }
            _ => None,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use showcasectl::showcase::SettingValue;

        fn model_with_open_themes_menu() -> ToolbarModel {
            let mut model = ToolbarModel::new(Some(vec![Theme::new("Light")]), None);
            let mut screen = ShowcaseScreen::default();
            let mut platform = platform::platform().unwrap();
            model
                .handle(Command::ToggleThemesMenu, &mut screen, &mut *platform)
                .unwrap();
            model
        }

        #[test]
        fn digits_select_in_the_open_menu_only() {
            let closed = ToolbarModel::new(Some(vec![Theme::new("Light")]), None);
            assert_eq!(map_key(KeyCode::Char('1'), &closed), None);

            let open = model_with_open_themes_menu();
            assert_eq!(
                map_key(KeyCode::Char('1'), &open),
                Some(Command::SelectTheme(0))
            );
            // No third row in a one-theme menu, so the press maps to nothing.
            assert_eq!(map_key(KeyCode::Char('3'), &open), None);
        }

        #[test]
        fn esc_dismisses_the_open_menu() {
            let closed = ToolbarModel::new(Some(vec![Theme::new("Light")]), None);
            assert_eq!(map_key(KeyCode::Esc, &closed), None);

            let open = model_with_open_themes_menu();
            assert_eq!(
                map_key(KeyCode::Esc, &open),
                Some(Command::DismissThemesMenu)
            );
        }

        #[test]
        fn screen_applies_latest_override_per_property() {
            let mut screen = ShowcaseScreen::default();
            screen.setting_selected(SettingChange {
                property_name: "size".to_string(),
                value: SettingValue::Text("tiny".to_string()),
            });
            screen.setting_selected(SettingChange {
                property_name: "size".to_string(),
                value: SettingValue::Text("giant".to_string()),
            });

            assert_eq!(screen.overrides.len(), 1);
            assert_eq!(
                screen.overrides[0].value,
                SettingValue::Text("giant".to_string())
            );

            screen.reset();
            assert!(screen.overrides.is_empty());
        }
    }
}
