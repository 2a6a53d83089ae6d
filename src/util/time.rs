//! Wall-clock access that works in the browser and degrades elsewhere.

/// Milliseconds since the Unix epoch in the browser; `0.0` off-browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
