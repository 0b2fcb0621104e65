//! Best-effort month extraction from free-form date labels.
//!
//! Date labels such as "May 2006" or "Dec 29, 2018 – Jan 5, 2019" are not
//! machine-parseable in general. The only thing we rely on is a three letter
//! English month abbreviation somewhere in the label.

use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
        .expect("month token regex should compile")
});

/// Calendar month, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Month(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    fn from_abbreviation(token: &str) -> Option<Self> {
        let number = match token.to_ascii_lowercase().as_str() {
            "jan" => 1,
            "feb" => 2,
            "mar" => 3,
            "apr" => 4,
            "may" => 5,
            "jun" => 6,
            "jul" => 7,
            "aug" => 8,
            "sep" => 9,
            "oct" => 10,
            "nov" => 11,
            "dec" => 12,
            _ => return None,
        };
        Some(Month(number))
    }
}

/// Returns the first month abbreviation found anywhere in `date`,
/// case-insensitively. Ranges resolve to their first month.
pub fn parse_month(date: &str) -> Option<Month> {
    MONTH_TOKEN
        .find(date)
        .and_then(|m| Month::from_abbreviation(m.as_str()))
}
