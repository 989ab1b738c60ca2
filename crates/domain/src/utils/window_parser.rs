//! Shift window (anchor record) title parser.
//!
//! An anchor title embeds the day's open hours as `H:MM-H:MM` anywhere in the
//! text, e.g. `"Dyżur 7:00-18:00"`. Only hour components are kept.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WINDOW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):\d{2}-(\d{1,2}):\d{2}").expect("WINDOW_REGEX should compile - this is a bug")
});

/// Half-open range of bookable hours `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl ShiftWindow {
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start_hour..self.end_hour
    }
}

/// True when the title carries an `H:MM-H:MM` range, valid or not.
pub fn has_window_pattern(title: &str) -> bool {
    WINDOW_REGEX.is_match(title)
}

/// Parse the window out of a record title.
///
/// Returns `None` when the pattern is absent, an hour exceeds 24, or the end
/// is not after the start.
pub fn parse_window_title(title: &str) -> Option<ShiftWindow> {
    let caps = WINDOW_REGEX.captures(title)?;
    let start_hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let end_hour: u32 = caps.get(2)?.as_str().parse().ok()?;

    if end_hour > 24 || end_hour <= start_hour {
        return None;
    }
    Some(ShiftWindow { start_hour, end_hour })
}
