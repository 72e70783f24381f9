use anyhow::{bail, Result};

use super::{DoctorReport, Platform};

/// Direction flags for wasm builds. The embedding page owns the application
/// lifecycle, so flags live for the session only and reloads are refused.
pub struct WebPlatform {
    forced_rtl: bool,
    allowed_rtl: bool,
}

impl WebPlatform {
    pub fn new() -> Self {
        Self {
            forced_rtl: false,
            allowed_rtl: true,
        }
    }
}

impl Platform for WebPlatform {
    fn forced_rtl(&self) -> bool {
        self.forced_rtl
    }

    fn allowed_rtl(&self) -> bool {
        self.allowed_rtl
    }

    fn set_forced_rtl(&mut self, enabled: bool) -> Result<()> {
        self.forced_rtl = enabled;
        Ok(())
    }

    fn set_allowed_rtl(&mut self, enabled: bool) -> Result<()> {
        self.allowed_rtl = enabled;
        Ok(())
    }

    fn supports_reload(&self) -> bool {
        false
    }

    fn reload(&self) -> Result<()> {
        bail!("application reload is not available on web");
    }

    fn doctor(&self) -> Result<DoctorReport> {
        Ok(DoctorReport {
            ok: true,
            message: "web platform: session-only direction flags, no reload".to_string(),
        })
    }
}
