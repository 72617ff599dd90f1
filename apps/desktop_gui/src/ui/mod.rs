//! UI layer for the dashboard: app shell, tab panels, widgets and themes.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{DashboardApp, PersistedDashboardSettings, SETTINGS_STORAGE_KEY};
