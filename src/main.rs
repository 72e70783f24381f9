use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use showcasectl::config;
use showcasectl::platform::{self, Platform as _};
use showcasectl::showcase::{SettingChange, Theme};
use showcasectl::telemetry;
use showcasectl::toolbar::commands::Command as ToolbarCommand;
use showcasectl::toolbar::host::ShowcaseHost;
use showcasectl::toolbar::menu::MenuItem;
use showcasectl::toolbar::model::ToolbarModel;

#[derive(Parser, Debug)]
#[command(name = "showcasectl", version, about = "Component showcase settings toolbar")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the themes offered by the theme picker.
    Themes,
    /// Prints the settings offered by the settings picker, as menu labels.
    Settings,
    /// Applies the theme at the given menu position.
    SelectTheme {
        /// 0-based position in the `themes` output.
        index: usize,
    },
    /// Applies the setting at the given menu position.
    SelectSetting {
        /// 0-based position in the `settings` output.
        index: usize,
    },
    /// Asks the showcase screen to reset the component to its defaults.
    Reset,
    /// Flips the right-to-left layout flags and persists them.
    ToggleRtl,
    /// Checks local prerequisites and prints guidance.
    Doctor,
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Creates the config file with a starter template if it is missing.
    InitConfig,
}

/// One-shot host: the "parent screen" of the CLI is stdout.
struct PrintHost;

impl ShowcaseHost for PrintHost {
    fn theme_selected(&mut self, theme: &Theme) {
        println!("theme: {theme}");
    }

    fn setting_selected(&mut self, change: SettingChange) {
        println!("{}={}", change.property_name, change.value);
    }

    fn reset(&mut self) {
        println!("reset");
    }
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Themes => {
            let model = load_model()?;
            print_entries(&model.themes_menu_spec().items);
        }
        Command::Settings => {
            let model = load_model()?;
            print_entries(&model.settings_menu_spec().items);
        }
        Command::SelectTheme { index } => {
            let mut model = load_model()?;
            ensure_index("theme", index, model.theme_count())?;
            let mut platform = platform::platform()?;
            model
                .handle(ToolbarCommand::SelectTheme(index), &mut PrintHost, &mut *platform)
                .context("select theme")?;
        }
        Command::SelectSetting { index } => {
            let mut model = load_model()?;
            ensure_index("setting", index, model.setting_count())?;
            let mut platform = platform::platform()?;
            model
                .handle(
                    ToolbarCommand::SelectSetting(index),
                    &mut PrintHost,
                    &mut *platform,
                )
                .context("select setting")?;
        }
        Command::Reset => {
            let mut model = load_model()?;
            if !model.settings_enabled() {
                bail!("Reset is disabled: no settings are configured.");
            }
            let mut platform = platform::platform()?;
            model
                .handle(ToolbarCommand::Reset, &mut PrintHost, &mut *platform)
                .context("reset")?;
        }
        Command::ToggleRtl => {
            let mut model = load_model()?;
            let mut platform = platform::platform()?;
            let update = model
                .handle(ToolbarCommand::ToggleDirection, &mut PrintHost, &mut *platform)
                .context("toggle direction")?;
            if let Some(err) = model.last_error() {
                bail!("{err}");
            }
            println!(
                "force_rtl={} allow_rtl={}",
                platform.forced_rtl(),
                platform.allowed_rtl()
            );
            // One-shot invocation: a re-exec here would just toggle again,
            // so leave the restart to the interactive frontend.
            if update.reload {
                println!("(restart the showcase for the change to take effect)");
            }
        }
        Command::Doctor => {
            let platform = platform::platform()?;
            let report = platform.doctor().context("doctor")?;
            if !report.ok {
                bail!(report.message);
            }
            println!("{}", report.message);
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists().context("ensure config exists")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn load_model() -> Result<ToolbarModel> {
    let cfg = config::load_optional()?;
    let resolved = config::resolve(cfg.as_ref());
    Ok(ToolbarModel::from_resolved(resolved))
}

fn print_entries(items: &[MenuItem]) {
    let mut idx = 0;
    for item in items {
        if let MenuItem::Action { title, .. } = item {
            println!("[{idx}] {title}");
            idx += 1;
        }
    }
}

fn ensure_index(kind: &str, index: usize, count: usize) -> Result<()> {
    if index < count {
        return Ok(());
    }
    if count == 0 {
        bail!("Invalid {kind} index {index}. No {kind}s are configured.");
    }
    bail!(
        "Invalid {kind} index {index}. Expected a value in 0..={}.",
        count - 1
    )
}
