//! Locale date formatting.
//!
//! Each supported regional convention is one [`DateFormatter`]
//! implementation; [`DateLocale::formatter`] picks it.

use crate::domain::models::DateLocale;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Renders dates with a numeric year, two-digit month and day, and for
/// date-times two-digit hour and minute, in the locale's conventional order.
pub trait DateFormatter {
    /// Format a calendar date
    fn format_date(&self, date: NaiveDate) -> String;

    /// Format a date with hour and minute
    fn format_date_time(&self, at: NaiveDateTime) -> String;
}

/// Simplified Chinese: `2024/01/05`, `2024/01/05 14:30`
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhCnDates;

impl DateFormatter for ZhCnDates {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y/%m/%d").to_string()
    }

    fn format_date_time(&self, at: NaiveDateTime) -> String {
        at.format("%Y/%m/%d %H:%M").to_string()
    }
}

/// US English: `01/05/2024`, `01/05/2024, 02:30 PM`
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUsDates;

impl DateFormatter for EnUsDates {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%m/%d/%Y").to_string()
    }

    fn format_date_time(&self, at: NaiveDateTime) -> String {
        at.format("%m/%d/%Y, %I:%M %p").to_string()
    }
}

impl DateLocale {
    /// Formatter implementing this locale's convention
    pub fn formatter(self) -> &'static dyn DateFormatter {
        match self {
            Self::ZhCn => &ZhCnDates,
            Self::EnUs => &EnUsDates,
        }
    }
}

/// Format the local calendar date of `at`
pub fn format_date<Tz: TimeZone>(locale: DateLocale, at: &DateTime<Tz>) -> String {
    locale.formatter().format_date(at.naive_local().date())
}

/// Format the local date, hour and minute of `at`
pub fn format_date_time<Tz: TimeZone>(locale: DateLocale, at: &DateTime<Tz>) -> String {
    locale.formatter().format_date_time(at.naive_local())
}
