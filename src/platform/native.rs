use std::{env, path::Path, path::PathBuf, process::Command};

use anyhow::{Context, Result};
use tracing::warn;

use super::{DoctorReport, Platform};
use crate::config;

/// Direction flags backed by the config file. Reload re-executes the current
/// binary, which is how a direction change becomes visible in the terminal
/// frontend.
pub struct NativePlatform {
    config_path: Option<PathBuf>,
    forced_rtl: bool,
    allowed_rtl: bool,
}

impl NativePlatform {
    pub fn new() -> Self {
        Self::at_config_path(config::resolve_config_path())
    }

    pub fn at_config_path(config_path: Option<PathBuf>) -> Self {
        let cfg = config_path.as_deref().and_then(|path| {
            config::load_at(path).unwrap_or_else(|err| {
                warn!("ignoring unreadable config: {err:#}");
                None
            })
        });

        Self {
            config_path,
            forced_rtl: cfg.as_ref().and_then(|c| c.force_rtl).unwrap_or(false),
            allowed_rtl: cfg.as_ref().and_then(|c| c.allow_rtl).unwrap_or(true),
        }
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = self.config_path.as_deref() else {
            return Ok(());
        };
        config::patch_direction(path, self.forced_rtl, self.allowed_rtl)
            .context("persist direction flags")
    }
}

impl Platform for NativePlatform {
    fn forced_rtl(&self) -> bool {
        self.forced_rtl
    }

    fn allowed_rtl(&self) -> bool {
        self.allowed_rtl
    }

    fn set_forced_rtl(&mut self, enabled: bool) -> Result<()> {
        self.forced_rtl = enabled;
        self.persist()
    }

    fn set_allowed_rtl(&mut self, enabled: bool) -> Result<()> {
        self.allowed_rtl = enabled;
        self.persist()
    }

    fn supports_reload(&self) -> bool {
        true
    }

    fn reload(&self) -> Result<()> {
        let exe = env::current_exe().context("current_exe")?;
        let args: Vec<String> = env::args().skip(1).collect();
        reload_process(&exe, &args)
    }

    fn doctor(&self) -> Result<DoctorReport> {
        let mut notes = Vec::new();

        match self.config_path.as_deref() {
            Some(path) if path.exists() => notes.push(format!("config: {}", path.display())),
            Some(path) => notes.push(format!("config: {} (not created yet)", path.display())),
            None => notes.push(
                "config: no usable path (set SHOWCASECTL_CONFIG or ensure HOME/APPDATA)"
                    .to_string(),
            ),
        }

        let reload_ok = env::current_exe().is_ok();
        notes.push(if reload_ok {
            "reload: available (re-exec of the current binary)".to_string()
        } else {
            "reload: current executable is not resolvable".to_string()
        });

        Ok(DoctorReport {
            ok: reload_ok,
            message: notes.join("\n"),
        })
    }
}

#[cfg(unix)]
fn reload_process(exe: &Path, args: &[String]) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure.
    let err = Command::new(exe).args(args).exec();
    Err(err).with_context(|| format!("re-exec {}", exe.display()))
}

#[cfg(not(unix))]
fn reload_process(exe: &Path, args: &[String]) -> Result<()> {
    Command::new(exe)
        .args(args)
        .spawn()
        .with_context(|| format!("relaunch {}", exe.display()))?;
    std::process::exit(0);
}
