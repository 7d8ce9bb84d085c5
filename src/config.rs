use log::Level;

/// Local-storage key holding the demo chat history as a JSON array.
pub const CHAT_STORAGE_KEY: &str = "picklecue_demo_chat";

pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const CONTENT_SWAP_DELAY_MS: u32 = 200;
pub const CHAT_SCROLL_DELAY_MS: u32 = 50;

// Simulated reply delay is REPLY_DELAY_MIN_MS + REPLY_DELAY_SPREAD_MS * r, r in [0, 1).
pub const REPLY_DELAY_MIN_MS: u32 = 800;
pub const REPLY_DELAY_SPREAD_MS: u32 = 600;
pub const REPLY_EVERY: usize = 3;

/// Height of the fixed top nav, subtracted when scrolling to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
