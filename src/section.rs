//! One field of a cron expression
//!
//! A [`Section`] owns the ordered set of values and ranges for a single
//! [`TimeField`], plus the flags that change how it is serialized:
//!
//! - `every` renders the stored values as a step (`*/5`)
//! - `any` marks the field as "don't care" (`?` on input)
//! - `enabled` is set by the first `add`; a disabled section renders as `*`

use crate::error::{CronError, Result};
use crate::types::TimeField;
use crate::value::{RenderMode, ValuePair};
use std::collections::BTreeSet;

/// Values, ranges, and flags for one field
///
/// Two sections are equal when they belong to the same field and render the
/// same canonical text.
#[derive(Debug, Clone)]
pub struct Section {
    field: TimeField,
    values: BTreeSet<ValuePair>,
    every: bool,
    any: bool,
    enabled: bool,
}

impl Section {
    /// Create an empty, disabled section for `field`
    pub fn new(field: TimeField) -> Self {
        Self {
            field,
            values: BTreeSet::new(),
            every: false,
            any: false,
            enabled: false,
        }
    }

    pub fn field(&self) -> TimeField {
        self.field
    }

    /// Whether the section renders as a step expression
    pub fn every(&self) -> bool {
        self.every
    }

    /// Whether the section was marked "don't care"
    pub fn any(&self) -> bool {
        self.any
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_every(&mut self, every: bool) -> &mut Self {
        self.every = every;
        self
    }

    pub fn set_any(&mut self, any: bool) -> &mut Self {
        self.any = any;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    /// Whether the section constrains the schedule at all
    ///
    /// Inactive sections serialize as `*` and contribute nothing to a
    /// description.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.values.is_empty()
    }

    /// Check a value against the field's domain
    pub fn is_valid(&self, value: u32) -> bool {
        self.field.contains(value)
    }

    /// Check both ends of a pair against the field's domain
    pub fn is_valid_pair(&self, pair: &ValuePair) -> bool {
        pair.min() <= pair.max() && self.is_valid(pair.min()) && self.is_valid(pair.max())
    }

    fn check(&self, value: u32) -> Result<()> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(CronError::OutOfRange {
                field: self.field,
                value: u64::from(value),
                min: self.field.min(),
                max: self.field.max(),
            })
        }
    }

    fn check_range(&self, min: u32, max: u32) -> Result<ValuePair> {
        self.check(min)?;
        self.check(max)?;
        if min > max {
            return Err(CronError::InvertedRange {
                field: self.field,
                min,
                max,
            });
        }
        Ok(ValuePair::range(min, max))
    }

    /// Add a single value
    pub fn add(&mut self, value: u32) -> Result<&mut Self> {
        self.check(value)?;
        self.insert(ValuePair::single(value));
        Ok(self)
    }

    /// Add a value and render the section as a step (`*/value`)
    pub fn add_step(&mut self, value: u32) -> Result<&mut Self> {
        self.add(value)?;
        self.every = true;
        Ok(self)
    }

    /// Add an inclusive range
    pub fn add_range(&mut self, min: u32, max: u32) -> Result<&mut Self> {
        let pair = self.check_range(min, max)?;
        self.insert(pair);
        Ok(self)
    }

    fn insert(&mut self, pair: ValuePair) {
        self.values.insert(pair);
        self.enabled = true;
    }

    /// Remove a single value; absent values are ignored
    pub fn remove(&mut self, value: u32) -> Result<&mut Self> {
        self.check(value)?;
        self.values.remove(&ValuePair::single(value));
        Ok(self)
    }

    /// Remove an inclusive range; absent ranges are ignored
    pub fn remove_range(&mut self, min: u32, max: u32) -> Result<&mut Self> {
        let pair = self.check_range(min, max)?;
        self.values.remove(&pair);
        Ok(self)
    }

    /// Drop all values and the `every` / `any` flags, keeping `enabled`
    pub fn clear(&mut self) -> &mut Self {
        self.values.clear();
        self.every = false;
        self.any = false;
        self
    }

    /// Return the section to its freshly created state
    pub fn reset(&mut self) -> &mut Self {
        self.clear();
        self.enabled = false;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &ValuePair> + '_ {
        self.values.iter()
    }

    pub fn contains(&self, pair: &ValuePair) -> bool {
        self.values.contains(pair)
    }

    /// Numeric rendering of each stored pair, ascending
    pub fn values(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(|p| p.render(RenderMode::Numeric))
    }

    /// Step sizes that divide the field's cycle evenly; `None` for date fields
    pub fn allowed_increments(&self) -> Option<Vec<u32>> {
        if !self.field.is_time() {
            return None;
        }
        let cycle = self.field.max() + 1;
        Some((1..cycle).filter(|n| cycle % n == 0).collect())
    }

    /// Mode used when this field appears in a description
    pub fn render_mode(&self) -> RenderMode {
        match self.field {
            TimeField::Hours if !self.every => RenderMode::HourWindow,
            TimeField::Month => RenderMode::MonthName,
            TimeField::DayOfWeek => RenderMode::WeekdayName,
            _ => RenderMode::Numeric,
        }
    }

    fn joined(&self, mode: RenderMode) -> String {
        self.values
            .iter()
            .map(|p| p.render(mode))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Phrase describing this field alone; `None` when the section is inactive
    pub fn description(&self) -> Option<String> {
        if !self.is_active() {
            return None;
        }

        let list = self.joined(self.render_mode());
        let phrase = match (self.field, self.every) {
            (TimeField::Seconds, true) => format!("Every {} seconds", list),
            (TimeField::Seconds, false) => format!("Only at {} seconds past the minute", list),
            (TimeField::Minutes, true) => format!("every {} minutes", list),
            (TimeField::Minutes, false) => format!("only at {} minutes past the hour", list),
            (TimeField::Hours, true) => format!("every {} hours", list),
            (TimeField::Hours, false) => list,
            (TimeField::DayOfMonth, _) => format!("only on day {} of the month", list),
            (TimeField::Month, _) => format!("only in {}", list),
            (TimeField::DayOfWeek, _) => format!("only on {}", list),
            (TimeField::Year, _) => format!("only in year {}", list),
        };
        Some(phrase)
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.to_string() == other.to_string()
    }
}

impl Eq for Section {}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_active() {
            return write!(f, "*");
        }
        let list = self.joined(RenderMode::Numeric);
        if self.every {
            write!(f, "*/{}", list)
        } else {
            write!(f, "{}", list)
        }
    }
}
