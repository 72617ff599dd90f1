//! Selection state and derived datasets for one dashboard viewer.

pub mod config;
pub mod session;

pub use config::{load_settings, load_settings_from, DashboardSettings, SettingsError};
pub use session::{DashboardContext, DashboardSession};
pub use shared::error::SessionError;
