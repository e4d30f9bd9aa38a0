//! Field kinds and the symbolic month / weekday tables

use serde::{Deserialize, Serialize};

/// One of the seven positions of a cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    /// Seconds (0-59)
    Seconds,
    /// Minutes (0-59)
    Minutes,
    /// Hours (0-23)
    Hours,
    /// Day of the month (1-31)
    DayOfMonth,
    /// Month (1-12)
    Month,
    /// Day of the week (0-7, 0 and 7 are Sunday)
    DayOfWeek,
    /// Year (1-9999)
    Year,
}

impl TimeField {
    /// All fields in canonical serialization order
    pub const ALL: [TimeField; 7] = [
        TimeField::Seconds,
        TimeField::Minutes,
        TimeField::Hours,
        TimeField::DayOfMonth,
        TimeField::Month,
        TimeField::DayOfWeek,
        TimeField::Year,
    ];

    /// Position of the field in the canonical form
    pub fn index(self) -> usize {
        match self {
            TimeField::Seconds => 0,
            TimeField::Minutes => 1,
            TimeField::Hours => 2,
            TimeField::DayOfMonth => 3,
            TimeField::Month => 4,
            TimeField::DayOfWeek => 5,
            TimeField::Year => 6,
        }
    }

    /// Smallest valid value
    pub fn min(self) -> u32 {
        match self {
            TimeField::Seconds | TimeField::Minutes | TimeField::Hours | TimeField::DayOfWeek => 0,
            TimeField::DayOfMonth | TimeField::Month | TimeField::Year => 1,
        }
    }

    /// Largest valid value
    pub fn max(self) -> u32 {
        match self {
            TimeField::Seconds | TimeField::Minutes => 59,
            TimeField::Hours => 23,
            TimeField::DayOfMonth => 31,
            TimeField::Month => 12,
            TimeField::DayOfWeek => 7,
            TimeField::Year => 9999,
        }
    }

    /// Check whether `value` lies inside the field's domain
    pub fn contains(self, value: u32) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Whether the field measures time of day rather than a calendar date
    pub fn is_time(self) -> bool {
        matches!(
            self,
            TimeField::Seconds | TimeField::Minutes | TimeField::Hours
        )
    }

    /// Lowercase display name
    pub fn name(self) -> &'static str {
        match self {
            TimeField::Seconds => "seconds",
            TimeField::Minutes => "minutes",
            TimeField::Hours => "hours",
            TimeField::DayOfMonth => "day of month",
            TimeField::Month => "month",
            TimeField::DayOfWeek => "day of week",
            TimeField::Year => "year",
        }
    }
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Months of the year, numbered 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Cron number of the month
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Display name of the month
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Month::ALL.iter().copied().find(|m| m.number() == number)
    }

    /// Look up a month by full name or three-letter abbreviation, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Month::ALL.iter().copied().find(|m| {
            let full = m.name().to_ascii_lowercase();
            full == name || full[..3] == name
        })
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Days of the week, numbered from Sunday = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Cron number of the weekday
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Display name of the weekday
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Map a cron number to a weekday; both 0 and 7 are Sunday
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            7 => Some(Weekday::Sunday),
            n => Weekday::ALL.iter().copied().find(|d| d.number() == n),
        }
    }

    /// Look up a weekday by full name or three-letter abbreviation, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Weekday::ALL.iter().copied().find(|d| {
            let full = d.name().to_ascii_lowercase();
            full == name || full[..3] == name
        })
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_domains() {
        assert!(TimeField::Seconds.contains(0));
        assert!(!TimeField::Seconds.contains(60));
        assert!(!TimeField::Hours.contains(24));
        assert!(!TimeField::DayOfMonth.contains(0));
        assert!(!TimeField::Month.contains(13));
        assert!(TimeField::DayOfWeek.contains(7));
        assert!(!TimeField::Year.contains(0));
        assert!(TimeField::Year.contains(9999));
    }

    #[test]
    fn test_field_order() {
        for (i, field) in TimeField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert!(TimeField::Hours.is_time());
        assert!(!TimeField::Month.is_time());
    }

    #[test]
    fn test_month_lookup() {
        assert_eq!(Month::March.number(), 3);
        assert_eq!(Month::from_number(11), Some(Month::November));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_name("aug"), Some(Month::August));
        assert_eq!(Month::from_name("DECEMBER"), Some(Month::December));
        assert_eq!(Month::from_name("smarch"), None);
    }

    #[test]
    fn test_weekday_lookup() {
        assert_eq!(Weekday::Friday.number(), 5);
        assert_eq!(Weekday::from_number(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_number(7), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_number(8), None);
        assert_eq!(Weekday::from_name("Thu"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_name("tuesday"), Some(Weekday::Tuesday));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&TimeField::DayOfWeek).unwrap(),
            "\"day_of_week\""
        );
        assert_eq!(serde_json::to_string(&Month::May).unwrap(), "\"may\"");
        let day: Weekday = serde_json::from_str("\"monday\"").unwrap();
        assert_eq!(day, Weekday::Monday);
    }
}
