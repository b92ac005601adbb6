//! Task item model
//!
//! Items are serde round-trippable so the whole list can be written to the
//! JSON store as-is. Due dates and durations are optional; helpers here
//! handle their terminal-friendly text formats.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text color for a task, from a fixed terminal palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl TextColor {
    /// Terminal color, None for the default foreground
    pub fn color(&self) -> Option<Color> {
        match self {
            TextColor::Default => None,
            TextColor::Red => Some(Color::Red),
            TextColor::Green => Some(Color::Green),
            TextColor::Yellow => Some(Color::Yellow),
            TextColor::Blue => Some(Color::Blue),
            TextColor::Magenta => Some(Color::Magenta),
            TextColor::Cyan => Some(Color::Cyan),
        }
    }

    /// Next color in the palette, wrapping around
    pub fn cycle(&self) -> TextColor {
        match self {
            TextColor::Default => TextColor::Red,
            TextColor::Red => TextColor::Green,
            TextColor::Green => TextColor::Yellow,
            TextColor::Yellow => TextColor::Blue,
            TextColor::Blue => TextColor::Magenta,
            TextColor::Magenta => TextColor::Cyan,
            TextColor::Cyan => TextColor::Default,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextColor::Default => "default",
            TextColor::Red => "red",
            TextColor::Green => "green",
            TextColor::Yellow => "yellow",
            TextColor::Blue => "blue",
            TextColor::Magenta => "magenta",
            TextColor::Cyan => "cyan",
        }
    }
}

/// A single task item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub color: TextColor,
    #[serde(default)]
    pub due_date: Option<DateTime<Local>>,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Item {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            created_at: Local::now(),
            color: TextColor::Default,
            due_date: None,
            duration_minutes: None,
        }
    }
}

/// Format a duration as `1h 30m`, `2h`, or `45m`
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        if rest > 0 {
            format!("{}h {}m", hours, rest)
        } else {
            format!("{}h", hours)
        }
    } else {
        format!("{}m", rest)
    }
}

/// Parse a duration: `1h 30m`, `45m`, `2h`, or bare minutes (`90`)
pub fn parse_duration(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Bare number means minutes
    if let Ok(minutes) = input.parse::<u32>() {
        return Some(minutes);
    }

    let mut total: u32 = 0;
    let mut matched = false;
    for part in input.split_whitespace() {
        if let Some(hours) = part.strip_suffix(['h', 'H']) {
            total = total.checked_add(hours.parse::<u32>().ok()?.checked_mul(60)?)?;
            matched = true;
        } else if let Some(minutes) = part.strip_suffix(['m', 'M']) {
            total = total.checked_add(minutes.parse::<u32>().ok()?)?;
            matched = true;
        } else {
            return None;
        }
    }

    if matched { Some(total) } else { None }
}

/// Format a due date relative to `now`: `Today, 14:00`, `Tomorrow, 09:30`,
/// or `Sep 12, 14:00`
pub fn format_due(due: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let days = due.date_naive().signed_duration_since(now.date_naive()).num_days();
    let time = due.format("%H:%M");
    match days {
        0 => format!("Today, {}", time),
        1 => format!("Tomorrow, {}", time),
        _ => {
            if due.year() == now.year() {
                format!("{}", due.format("%b %-d, %H:%M"))
            } else {
                format!("{}", due.format("%b %-d %Y, %H:%M"))
            }
        }
    }
}

/// Parse a due date in `YYYY-MM-DD HH:MM` or `YYYY-MM-DD` form
///
/// A bare date lands on midnight. Returns None for anything else,
/// including invalid calendar dates.
pub fn parse_due(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    Local.from_local_datetime(&naive).earliest()
}
