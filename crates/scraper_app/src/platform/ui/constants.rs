use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "Universal Scraper";
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 768.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Repaint cadence while something on screen is animating.
pub const ANIMATION_FRAME_MS: u64 = 33;
/// Longest a single frame may advance the clock, so a stalled window does
/// not skip the intro in one step.
pub const MAX_FRAME_MS: u64 = 250;

pub const INTRO_FONT_SIZE: f32 = 36.0;
pub const HEADING_FONT_SIZE: f32 = 28.0;
pub const TREE_INDENT: f32 = 16.0;

pub const COLOR_KEY: Color32 = Color32::from_rgb(0x9c, 0xdc, 0xfe);
pub const COLOR_STRING: Color32 = Color32::from_rgb(0xce, 0x91, 0x78);
pub const COLOR_NUMBER: Color32 = Color32::from_rgb(0xb5, 0xce, 0xa8);
pub const COLOR_KEYWORD: Color32 = Color32::from_rgb(0x56, 0x9c, 0xd6);
pub const COLOR_ERROR: Color32 = Color32::from_rgb(0xf4, 0x47, 0x47);
pub const COLOR_NOTICE: Color32 = Color32::from_rgb(0xe5, 0xc0, 0x7b);
