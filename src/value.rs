//! Single values and inclusive ranges stored in a section

use crate::types::{Month, Weekday};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const HOUR_FORMAT: &str = "%I:%M %p";

/// How a [`ValuePair`] is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Plain numerals, as used in the canonical form
    Numeric,
    /// Month names (`March`)
    MonthName,
    /// Weekday names (`Friday`)
    WeekdayName,
    /// Hour window on a 12-hour clock (`03:00 AM-05:59 AM`)
    HourWindow,
}

/// A single value (`min == max`) or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValuePair {
    min: u32,
    max: u32,
}

impl ValuePair {
    /// Create a pair holding one value
    pub fn single(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Create an inclusive range. Callers validate `min <= max`.
    pub fn range(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the pair holds exactly one value
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    /// Render the pair; collapses to one value when both ends render the same
    pub fn render(&self, mode: RenderMode) -> String {
        let (min, max) = match mode {
            RenderMode::Numeric => (self.min.to_string(), self.max.to_string()),
            RenderMode::MonthName => (month_name(self.min), month_name(self.max)),
            RenderMode::WeekdayName => (weekday_name(self.min), weekday_name(self.max)),
            RenderMode::HourWindow => (clock(self.min, 0, 0), clock(self.max, 59, 59)),
        };

        if min == max {
            min
        } else {
            format!("{}-{}", min, max)
        }
    }
}

impl std::fmt::Display for ValuePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(RenderMode::Numeric))
    }
}

fn month_name(number: u32) -> String {
    Month::from_number(number)
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| number.to_string())
}

fn weekday_name(number: u32) -> String {
    Weekday::from_number(number)
        .map(|d| d.name().to_string())
        .unwrap_or_else(|| number.to_string())
}

fn clock(hour: u32, minute: u32, second: u32) -> String {
    NaiveTime::from_hms_opt(hour, minute, second)
        .map(|t| t.format(HOUR_FORMAT).to_string())
        .unwrap_or_else(|| hour.to_string())
}
