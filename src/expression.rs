//! The aggregate cron expression
//!
//! A [`CronExpression`] owns exactly one [`Section`] per [`TimeField`] and
//! serializes them in canonical order:
//!
//! ```text
//! ┌───────────── second (0-59)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 = Sunday)
//! │ │ │ │ │ │ ┌───────────── year (1-9999)
//! │ │ │ │ │ │ │
//! * * * * * * *
//! ```

use crate::describe;
use crate::error::{CronError, Result};
use crate::parser;
use crate::section::Section;
use crate::types::{Month, TimeField, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field count of an expression built in code rather than parsed
pub const CANONICAL_FIELD_COUNT: usize = 7;

/// A 7-field cron expression
///
/// Equality compares the canonical form and the declared field count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CronExpression {
    sections: [Section; 7],
    field_count: usize,
}

impl PartialEq for CronExpression {
    fn eq(&self, other: &Self) -> bool {
        self.field_count == other.field_count && self.to_string() == other.to_string()
    }
}

impl Eq for CronExpression {}

impl Default for CronExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl CronExpression {
    /// Create an expression that matches every second of every day
    pub fn new() -> Self {
        Self {
            sections: TimeField::ALL.map(Section::new),
            field_count: CANONICAL_FIELD_COUNT,
        }
    }

    /// Parse a 5, 6, or 7 field expression
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_expr::CronExpression;
    ///
    /// let expr = CronExpression::parse("2 3 4 5 6").unwrap();
    /// assert_eq!(expr.to_string(), "* 2 3 4 5 6 *");
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        parser::parse(expression)
    }

    /// Start a chained builder
    pub fn builder() -> CronExpressionBuilder {
        CronExpressionBuilder::default()
    }

    pub(crate) fn with_field_count(mut self, field_count: usize) -> Self {
        self.field_count = field_count;
        self
    }

    /// Number of fields the expression was declared with
    ///
    /// 7 for expressions built in code; the token count for parsed ones.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn section(&self, field: TimeField) -> &Section {
        &self.sections[field.index()]
    }

    pub fn section_mut(&mut self, field: TimeField) -> &mut Section {
        &mut self.sections[field.index()]
    }

    /// All sections in canonical order
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter()
    }

    pub fn seconds(&self) -> &Section {
        self.section(TimeField::Seconds)
    }

    pub fn minutes(&self) -> &Section {
        self.section(TimeField::Minutes)
    }

    pub fn hours(&self) -> &Section {
        self.section(TimeField::Hours)
    }

    pub fn day_of_month(&self) -> &Section {
        self.section(TimeField::DayOfMonth)
    }

    pub fn month(&self) -> &Section {
        self.section(TimeField::Month)
    }

    pub fn day_of_week(&self) -> &Section {
        self.section(TimeField::DayOfWeek)
    }

    pub fn year(&self) -> &Section {
        self.section(TimeField::Year)
    }

    /// Add a single value to `field`
    pub fn add(&mut self, field: TimeField, value: u32) -> Result<&mut Self> {
        self.section_mut(field).add(value)?;
        Ok(self)
    }

    /// Add a step value to `field` (`*/value`)
    pub fn add_step(&mut self, field: TimeField, value: u32) -> Result<&mut Self> {
        self.section_mut(field).add_step(value)?;
        Ok(self)
    }

    /// Add an inclusive range to `field`
    pub fn add_range(&mut self, field: TimeField, min: u32, max: u32) -> Result<&mut Self> {
        self.section_mut(field).add_range(min, max)?;
        Ok(self)
    }

    pub fn add_month(&mut self, month: Month) -> Result<&mut Self> {
        self.add(TimeField::Month, month.number())
    }

    pub fn add_month_range(&mut self, from: Month, to: Month) -> Result<&mut Self> {
        self.add_range(TimeField::Month, from.number(), to.number())
    }

    pub fn add_weekday(&mut self, day: Weekday) -> Result<&mut Self> {
        self.add(TimeField::DayOfWeek, day.number())
    }

    pub fn add_weekday_range(&mut self, from: Weekday, to: Weekday) -> Result<&mut Self> {
        self.add_range(TimeField::DayOfWeek, from.number(), to.number())
    }

    /// Remove a single value from `field`; absent values are ignored
    pub fn remove(&mut self, field: TimeField, value: u32) -> Result<&mut Self> {
        self.section_mut(field).remove(value)?;
        Ok(self)
    }

    /// Remove an inclusive range from `field`; absent ranges are ignored
    pub fn remove_range(&mut self, field: TimeField, min: u32, max: u32) -> Result<&mut Self> {
        self.section_mut(field).remove_range(min, max)?;
        Ok(self)
    }

    pub fn remove_month(&mut self, month: Month) -> Result<&mut Self> {
        self.remove(TimeField::Month, month.number())
    }

    pub fn remove_weekday(&mut self, day: Weekday) -> Result<&mut Self> {
        self.remove(TimeField::DayOfWeek, day.number())
    }

    /// Return one field to its default `*` state
    pub fn reset(&mut self, field: TimeField) -> &mut Self {
        tracing::trace!(field = %field, "Reset cron section");
        self.section_mut(field).reset();
        self
    }

    /// Return every field to its default `*` state
    pub fn reset_all(&mut self) -> &mut Self {
        for field in TimeField::ALL {
            self.section_mut(field).reset();
        }
        tracing::debug!("Reset all cron sections");
        self
    }

    /// Canonical 7-field form
    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Human-readable description of the schedule
    ///
    /// Fails with [`CronError::InvalidFieldCount`] when the expression was
    /// parsed from a string that did not have 5, 6, or 7 fields.
    pub fn description(&self) -> Result<String> {
        describe::describe(self)
    }
}

impl std::fmt::Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<String> = self.sections.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", fields.join(" "))
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CronExpression> for String {
    fn from(expr: CronExpression) -> Self {
        expr.to_string()
    }
}

/// Consuming builder; the first failing call is reported by [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct CronExpressionBuilder {
    inner: Result<CronExpression>,
}

impl Default for CronExpressionBuilder {
    fn default() -> Self {
        Self {
            inner: Ok(CronExpression::new()),
        }
    }
}

impl CronExpressionBuilder {
    fn apply<F>(mut self, op: F) -> Self
    where
        F: FnOnce(&mut CronExpression) -> Result<()>,
    {
        let outcome = match self.inner.as_mut() {
            Ok(expr) => op(expr),
            Err(_) => Ok(()),
        };
        if let Err(e) = outcome {
            self.inner = Err(e);
        }
        self
    }

    pub fn value(self, field: TimeField, value: u32) -> Self {
        self.apply(|e| e.add(field, value).map(|_| ()))
    }

    pub fn step(self, field: TimeField, value: u32) -> Self {
        self.apply(|e| e.add_step(field, value).map(|_| ()))
    }

    pub fn range(self, field: TimeField, min: u32, max: u32) -> Self {
        self.apply(|e| e.add_range(field, min, max).map(|_| ()))
    }

    pub fn month(self, month: Month) -> Self {
        self.apply(|e| e.add_month(month).map(|_| ()))
    }

    pub fn month_range(self, from: Month, to: Month) -> Self {
        self.apply(|e| e.add_month_range(from, to).map(|_| ()))
    }

    pub fn weekday(self, day: Weekday) -> Self {
        self.apply(|e| e.add_weekday(day).map(|_| ()))
    }

    pub fn weekday_range(self, from: Weekday, to: Weekday) -> Self {
        self.apply(|e| e.add_weekday_range(from, to).map(|_| ()))
    }

    pub fn build(self) -> Result<CronExpression> {
        self.inner
    }
}
