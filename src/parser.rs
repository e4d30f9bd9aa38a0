//! Cron expression parser
//!
//! Accepts 5, 6, or 7 whitespace-separated fields:
//!
//! | fields | mapping                                              |
//! |--------|------------------------------------------------------|
//! | 5      | minute hour day-of-month month day-of-week           |
//! | 6      | second minute hour day-of-month month day-of-week    |
//! | 7      | second minute hour day-of-month month day-of-week year |
//!
//! Missing seconds and year default to `*`. Any other field count still
//! parses, but leaves every field unassigned; describing such an expression
//! fails.
//!
//! Special characters:
//! - `*` - any value
//! - `?` - don't care
//! - `,` - value list separator (e.g., `1,3,5`)
//! - `-` - range (e.g., `1-5`)
//! - `*/` - step (e.g., `*/5`, or `*/3,4` for several steps)
//!
//! Month and day-of-week fields also accept names (`MAR`, `friday`).

use crate::error::{CronError, Result};
use crate::expression::CronExpression;
use crate::section::Section;
use crate::types::{Month, TimeField, Weekday};

const FIVE_FIELDS: [TimeField; 5] = [
    TimeField::Minutes,
    TimeField::Hours,
    TimeField::DayOfMonth,
    TimeField::Month,
    TimeField::DayOfWeek,
];

const SIX_FIELDS: [TimeField; 6] = [
    TimeField::Seconds,
    TimeField::Minutes,
    TimeField::Hours,
    TimeField::DayOfMonth,
    TimeField::Month,
    TimeField::DayOfWeek,
];

/// Parse a cron expression string
///
/// # Examples
///
/// ```
/// use a3s_cron_expr::parse;
///
/// // Five fields: seconds and year default to `*`
/// let expr = parse("*/5 9-17 * * mon-fri").unwrap();
/// assert_eq!(expr.to_string(), "* */5 9-17 * * 1-5 *");
///
/// // Seven fields round-trip unchanged
/// let expr = parse("0 30 2 1 * * 2030").unwrap();
/// assert_eq!(expr.to_string(), "0 30 2 1 * * 2030");
/// ```
pub fn parse(expression: &str) -> Result<CronExpression> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();

    let fields: &[TimeField] = match tokens.len() {
        5 => &FIVE_FIELDS,
        6 => &SIX_FIELDS,
        7 => &TimeField::ALL,
        n => {
            tracing::warn!(
                expression = expression,
                fields = n,
                "Unsupported cron field count, fields left unassigned"
            );
            &[]
        }
    };

    let mut expr = CronExpression::new();
    for (&field, token) in fields.iter().zip(&tokens) {
        *expr.section_mut(field) = parse_field(field, token)?;
    }

    tracing::debug!(
        expression = expression,
        fields = tokens.len(),
        canonical = %expr,
        "Parsed cron expression"
    );

    Ok(expr.with_field_count(tokens.len()))
}

/// Parse a single field token into a fresh section
fn parse_field(field: TimeField, token: &str) -> Result<Section> {
    let mut section = Section::new(field);

    match token {
        "*" => return Ok(section),
        "?" => {
            section.set_any(true);
            return Ok(section);
        }
        _ => {}
    }

    let (list, every) = match token.strip_prefix("*/") {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    for part in list.split(',') {
        if part.is_empty() {
            return Err(invalid_token(field, token));
        }

        match part.split_once('-') {
            // a step is a single value, never a range
            Some(_) if every => return Err(invalid_token(field, token)),
            Some((start, end)) => {
                let start = parse_value(field, start, token)?;
                let end = parse_value(field, end, token)?;
                section.add_range(start, end)?;
            }
            None => {
                section.add(parse_value(field, part, token)?)?;
            }
        }
    }

    section.set_every(every);
    Ok(section)
}

/// Parse a number, or a month / weekday name where the field allows one
fn parse_value(field: TimeField, text: &str, token: &str) -> Result<u32> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        // numerals too wide for u32 are still out of the field's domain
        let wide = text.parse::<u64>().unwrap_or(u64::MAX);
        return u32::try_from(wide).map_err(|_| CronError::OutOfRange {
            field,
            value: wide,
            min: field.min(),
            max: field.max(),
        });
    }

    let named = match field {
        TimeField::Month => Month::from_name(text).map(Month::number),
        TimeField::DayOfWeek => Weekday::from_name(text).map(Weekday::number),
        _ => None,
    };

    named.ok_or_else(|| invalid_token(field, token))
}

fn invalid_token(field: TimeField, token: &str) -> CronError {
    CronError::InvalidToken {
        field,
        token: token.to_string(),
    }
}
