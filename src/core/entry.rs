// A single birthday book entry
//
// Each entry carries both the formatted display string and the bare
// name key. Keeping them in one struct means any reorder or removal
// moves both together, so they can never drift out of alignment.

use crate::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};

/// One record in the birthday book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Formatted as `"First Last, M/D/Y"`
    pub display: String,
    /// Formatted as `"First Last"`, used for search and delete prompts
    pub name_key: String,
}

impl Entry {
    /// Build an entry from the raw `add` arguments. The date fields are
    /// kept as the text the user typed; no range checking happens here
    /// or anywhere else (month 13 is a legal entry).
    pub fn new(first: &str, last: &str, month: &str, day: &str, year: &str) -> Self {
        Self {
            display: format!("{} {}, {}/{}/{}", first, last, month, day, year),
            name_key: format!("{} {}", first, last),
        }
    }

    /// Rebuild an entry from a saved line pair, as-is.
    pub fn from_lines(display: &str, name_key: &str) -> Self {
        Self {
            display: display.to_string(),
            name_key: name_key.to_string(),
        }
    }

    /// True if any whitespace-split token of the name equals the term,
    /// case-insensitively. Exact token match, not substring: "Ann"
    /// matches "Ann Lee" and "Bob Ann" but not "Annika".
    pub fn name_matches(&self, lowered_term: &str) -> bool {
        self.name_key
            .split_whitespace()
            .any(|token| token.to_lowercase() == lowered_term)
    }

    /// Pull (month, day, year) back out of the display string: token
    /// index 2 is the `M/D/Y` part. Only fails for entries loaded from
    /// a tampered file; everything `add` produces parses.
    fn birth_date(&self) -> Result<(i64, i64, i64)> {
        let date = self
            .display
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| BookError::MalformedEntry(self.display.clone()))?;

        let mut parts = date.split('/').map(|p| p.parse::<i64>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(month)), Some(Ok(day)), Some(Ok(year))) => Ok((month, day, year)),
            _ => Err(BookError::MalformedEntry(self.display.clone())),
        }
    }

    /// Age in whole years on `today`: year difference, minus one if the
    /// birthday has not yet come around this year. The stored date is
    /// taken literally, so an impossible date like 2/31 still compares
    /// as the tuple (2, 31).
    pub fn age_on(&self, today: NaiveDate) -> Result<i64> {
        let (month, day, year) = self.birth_date()?;
        let not_yet = (i64::from(today.month()), i64::from(today.day())) < (month, day);
        Ok(i64::from(today.year()) - year - i64::from(not_yet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_format() {
        let entry = Entry::new("Ada", "Lovelace", "12", "10", "1815");
        assert_eq!(entry.display, "Ada Lovelace, 12/10/1815");
        assert_eq!(entry.name_key, "Ada Lovelace");
    }

    #[test]
    fn test_name_match_is_token_exact() {
        let entry = Entry::new("Ann", "Lee", "1", "2", "1990");
        assert!(entry.name_matches("ann"));
        assert!(entry.name_matches("lee"));
        assert!(!entry.name_matches("an"));
        assert!(!entry.name_matches("annika"));
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let entry = Entry::new("Ann", "Lee", "6", "15", "1990");
        // Birthday already passed this year
        assert_eq!(entry.age_on(date(2024, 7, 1)).unwrap(), 34);
        // Birthday still to come
        assert_eq!(entry.age_on(date(2024, 6, 1)).unwrap(), 33);
        // On the day itself it counts as passed
        assert_eq!(entry.age_on(date(2024, 6, 15)).unwrap(), 34);
    }

    #[test]
    fn test_age_accepts_impossible_dates() {
        // No calendar validation anywhere: month 13 just compares as 13
        let entry = Entry::new("Max", "Odd", "13", "40", "2000");
        assert_eq!(entry.age_on(date(2024, 7, 1)).unwrap(), 23);
    }

    #[test]
    fn test_malformed_entry_fails_to_date() {
        let entry = Entry::from_lines("garbage", "garbage");
        assert!(matches!(
            entry.age_on(date(2024, 1, 1)),
            Err(BookError::MalformedEntry(_))
        ));
    }
}
