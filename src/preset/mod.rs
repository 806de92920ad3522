//! Hero reel presets.
//!
//! A preset is compiled once per [`VideoConfig`](config::VideoConfig) into a
//! [`HeroReel`](hero_reel::HeroReel) and then evaluated per frame.

/// Preset selection, video config and JSON jobs.
pub mod config;
/// Compiled hero reel.
pub mod hero_reel;
/// Canvas-proportional geometry.
pub mod layout;
/// Mock UI content block of the extended preset.
pub mod mock_ui;
/// Named interval tables.
pub mod timeline;
