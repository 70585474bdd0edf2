//! # Cutproof Settings
//!
//! Configuration management for Cutproof: playback duration, viewer
//! preferences, and default-asset overrides, persisted as TOML or JSON in
//! the platform configuration directory.

pub mod config;
pub mod error;

pub use config::{Config, FileSettings, PlaybackSettings, ViewerSettings};
pub use error::{Result, SettingsError};
