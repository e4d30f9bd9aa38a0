//! Human-readable descriptions
//!
//! Each active section contributes one clause, joined with `", "` in the
//! order time, day of month, day of week, month, year. Two rules shape the
//! time clause:
//!
//! - single hour and minute values (with an optional single second) collapse
//!   into one `At hh:mm[:ss] AM` clause
//! - when neither seconds nor minutes say anything, the description leads
//!   with `Every minute`

use crate::error::{CronError, Result};
use crate::expression::CronExpression;
use crate::section::Section;
use crate::types::TimeField;
use chrono::NaiveTime;

const FIELD_COUNTS: std::ops::RangeInclusive<usize> = 5..=7;

const DATE_FIELDS: [TimeField; 4] = [
    TimeField::DayOfMonth,
    TimeField::DayOfWeek,
    TimeField::Month,
    TimeField::Year,
];

/// Describe an expression in English
///
/// # Examples
///
/// ```
/// use a3s_cron_expr::{describe, parse};
///
/// let expr = parse("2 3 4 5 6").unwrap();
/// assert_eq!(
///     describe(&expr).unwrap(),
///     "At 03:02 AM, only on day 4 of the month, only on Saturday, only in May"
/// );
/// ```
pub fn describe(expr: &CronExpression) -> Result<String> {
    let count = expr.field_count();
    if !FIELD_COUNTS.contains(&count) {
        tracing::debug!(fields = count, "Cannot describe cron expression");
        return Err(CronError::InvalidFieldCount { count });
    }

    let mut clauses = Vec::new();

    match merged_time(expr) {
        Some(at) => clauses.push(at),
        None => {
            let seconds = expr.seconds().description();
            let minutes = expr.minutes().description();
            if seconds.is_none() && minutes.is_none() {
                clauses.push("Every minute".to_string());
            }
            clauses.extend(seconds);
            clauses.extend(minutes);
            clauses.extend(expr.hours().description());
        }
    }

    for field in DATE_FIELDS {
        clauses.extend(expr.section(field).description());
    }

    Ok(compose(&clauses))
}

/// The section's only value, if it holds exactly one non-step single value
fn single_value(section: &Section) -> Option<u32> {
    if !section.is_active() || section.every() || section.len() != 1 {
        return None;
    }
    section
        .iter()
        .next()
        .filter(|pair| pair.is_single())
        .map(|pair| pair.min())
}

/// `At hh:mm[:ss] AM` when hour and minute (and seconds, if set) are single values
fn merged_time(expr: &CronExpression) -> Option<String> {
    let hour = single_value(expr.hours())?;
    let minute = single_value(expr.minutes())?;

    let (second, format) = if expr.seconds().is_active() {
        (single_value(expr.seconds())?, "At %I:%M:%S %p")
    } else {
        (0, "At %I:%M %p")
    };

    NaiveTime::from_hms_opt(hour, minute, second).map(|t| t.format(format).to_string())
}

fn compose(clauses: &[String]) -> String {
    clauses
        .iter()
        .enumerate()
        .map(|(i, clause)| -> String {
            let mut chars = clause.chars();
            match chars.next() {
                Some(first) if i == 0 => first.to_uppercase().chain(chars).collect(),
                Some(first) => first.to_lowercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, Weekday};

    #[test]
    fn test_default_is_every_minute() {
        let expr = CronExpression::new();
        assert_eq!(describe(&expr).unwrap(), "Every minute");
    }

    #[test]
    fn test_full_merge() {
        let mut expr = CronExpression::new();
        expr.add(TimeField::Seconds, 5).unwrap();
        expr.add(TimeField::Minutes, 44).unwrap();
        expr.add(TimeField::Hours, 3).unwrap();
        assert_eq!(describe(&expr).unwrap(), "At 03:44:05 AM");
    }

    #[test]
    fn test_merge_without_seconds() {
        let mut expr = CronExpression::new();
        expr.add(TimeField::Minutes, 30).unwrap();
        expr.add(TimeField::Hours, 14).unwrap();
        assert_eq!(describe(&expr).unwrap(), "At 02:30 PM");
    }

    #[test]
    fn test_no_merge_for_ranges_or_steps() {
        let mut expr = CronExpression::new();
        expr.add(TimeField::Seconds, 5).unwrap();
        expr.add_range(TimeField::Minutes, 10, 20).unwrap();
        expr.add(TimeField::Hours, 3).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Only at 5 seconds past the minute, only at 10-20 minutes past the hour, 03:00 AM-03:59 AM"
        );

        let mut expr = CronExpression::new();
        expr.add_step(TimeField::Seconds, 10).unwrap();
        expr.add(TimeField::Minutes, 0).unwrap();
        expr.add(TimeField::Hours, 0).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Every 10 seconds, only at 0 minutes past the hour, 12:00 AM-12:59 AM"
        );
    }

    #[test]
    fn test_every_steps() {
        let mut expr = CronExpression::new();
        expr.add_step(TimeField::Seconds, 5).unwrap();
        expr.add_step(TimeField::Minutes, 44).unwrap();
        expr.add_step(TimeField::Hours, 3).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Every 5 seconds, every 44 minutes, every 3 hours"
        );
    }

    #[test]
    fn test_minutes_lead_is_capitalised() {
        let mut expr = CronExpression::new();
        expr.add(TimeField::Minutes, 15).unwrap();
        expr.add_month(Month::June).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Only at 15 minutes past the hour, only in June"
        );
    }

    #[test]
    fn test_hours_only_keeps_every_minute() {
        let mut expr = CronExpression::new();
        expr.add(TimeField::Hours, 4).unwrap();
        expr.add_weekday(Weekday::Friday).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Every minute, 04:00 AM-04:59 AM, only on Friday"
        );
    }

    #[test]
    fn test_weekday_before_month() {
        let mut expr = CronExpression::new();
        expr.add_month(Month::January).unwrap();
        expr.add_weekday(Weekday::Friday).unwrap();
        expr.add(TimeField::Year, 2021).unwrap();
        assert_eq!(
            describe(&expr).unwrap(),
            "Every minute, only on Friday, only in January, only in year 2021"
        );
    }

    #[test]
    fn test_rejects_bad_field_count() {
        let expr = crate::parser::parse("0 0 0 0").unwrap();
        assert_eq!(
            describe(&expr).unwrap_err(),
            CronError::InvalidFieldCount { count: 4 }
        );
    }

    #[test]
    fn test_compose_casing() {
        let clauses = vec![
            "only on day 1 of the month".to_string(),
            "Only at 3 minutes past the hour".to_string(),
        ];
        assert_eq!(
            compose(&clauses),
            "Only on day 1 of the month, only at 3 minutes past the hour"
        );
        assert_eq!(compose(&[]), "");
    }
}
