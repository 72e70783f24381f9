use anyhow::Result;

#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub ok: bool,
    pub message: String,
}

/// Host-platform services the toolbar depends on: the process-wide text
/// direction flags and the ability to restart the app so a direction change
/// takes visual effect.
pub trait Platform {
    fn forced_rtl(&self) -> bool;
    fn allowed_rtl(&self) -> bool;
    fn set_forced_rtl(&mut self, enabled: bool) -> Result<()>;
    fn set_allowed_rtl(&mut self, enabled: bool) -> Result<()>;
    /// False on web, where the page owns the application lifecycle.
    fn supports_reload(&self) -> bool;
    fn reload(&self) -> Result<()>;
    fn doctor(&self) -> Result<DoctorReport>;
}

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativePlatform;

pub fn platform() -> Result<Box<dyn Platform>> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        return Ok(Box::new(native::NativePlatform::new()));
    }

    #[cfg(target_arch = "wasm32")]
    {
        return Ok(Box::new(web::WebPlatform::new()));
    }
}
