//! Settings toolbar for a terminal component showcase: theme picker,
//! property-setting picker, reset, and the right-to-left layout toggle.

pub mod config;
pub mod platform;
pub mod showcase;
pub mod telemetry;
pub mod toolbar;
