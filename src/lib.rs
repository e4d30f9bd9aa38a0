//! # a3s-cron-expr
//!
//! Build, parse, serialize, and describe 7-field cron expressions.
//!
//! ## Overview
//!
//! `a3s-cron-expr` keeps a structured model of a cron schedule: one
//! [`Section`] per field (seconds, minutes, hours, day of month, month,
//! day of week, year), each holding values, ranges, and step flags. The model
//! converts to its canonical 7-field text and to an English description. It
//! never computes fire times.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_expr::{CronExpression, Month, TimeField, Weekday};
//!
//! # fn example() -> a3s_cron_expr::Result<()> {
//! let mut expr = CronExpression::new();
//! expr.add(TimeField::Seconds, 5)?
//!     .add(TimeField::Minutes, 44)?
//!     .add(TimeField::Hours, 3)?
//!     .add_weekday(Weekday::Friday)?
//!     .add_month(Month::March)?;
//!
//! assert_eq!(expr.to_string(), "5 44 3 * 3 5 *");
//! assert_eq!(
//!     expr.description()?,
//!     "At 03:44:05 AM, only on Friday, only in March"
//! );
//!
//! // 5- and 6-field strings normalize to the canonical form
//! let parsed = CronExpression::parse("*/15 9-17 * * mon-fri")?;
//! assert_eq!(parsed.to_string(), "* */15 9-17 * * 1-5 *");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **ValuePair** - a single value or inclusive range, rendered per [`RenderMode`]
//! - **Section** - validated, ordered values for one field plus `every`/`any`/`enabled`
//! - **CronExpression** - owns the seven sections, canonical serialization, serde
//! - **parser** - 5/6/7 field strings into sections
//! - **describe** - English phrasing with the `At hh:mm:ss` merge rule

mod describe;
pub mod error;
mod expression;
mod parser;
mod section;
pub mod types;
mod value;

// Re-export core types
pub use describe::describe;
pub use error::{CronError, Result};
pub use expression::{CronExpression, CronExpressionBuilder, CANONICAL_FIELD_COUNT};
pub use parser::parse;
pub use section::Section;
pub use types::{Month, TimeField, Weekday};
pub use value::{RenderMode, ValuePair};
