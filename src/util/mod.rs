//! Utility helpers shared across UI modules.

pub mod format;
pub mod time;
