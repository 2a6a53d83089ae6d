//! Display formatting for prices, ratings, review counts, and message times.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// US-dollar currency text, e.g. `$1,234.50`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Rating with one decimal place.
pub fn format_stars(stars: f64) -> String {
    format!("{stars:.1}")
}

/// Review count, abbreviated to thousands from 1000 up (`1.2k`).
#[allow(clippy::cast_precision_loss)]
pub fn format_reviews(reviews: u64) -> String {
    if reviews >= 1000 {
        format!("{:.1}k", reviews as f64 / 1000.0)
    } else {
        reviews.to_string()
    }
}

/// Five-glyph star strip: a filled star per whole point, outlined after.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_glyphs(rating: f64) -> String {
    let full = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// `HH:MM` for a message timestamp.
pub fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Local wall-clock time for `timestamp_ms`; empty off-browser.
pub fn format_message_time(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        clock_label(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}
