/// The in-memory record store
///
/// An ordered list of entries, insertion order unless explicitly
/// sorted. All mutation goes through here; the session layer decides
/// when to call what.

use crate::core::entry::Entry;
use crate::error::Result;
use chrono::NaiveDate;

/// Ordered store of birthday entries
#[derive(Debug, Default)]
pub struct BirthdayBook {
    entries: Vec<Entry>,
}

impl BirthdayBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry at the end (used by both `add` and `load`).
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Name key of the entry at a 0-based index.
    pub fn name_at(&self, index: usize) -> &str {
        &self.entries[index].name_key
    }

    /// Remove and return the entry at a 0-based index. The caller has
    /// already bounds-checked via the delete command's range test.
    pub fn remove(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }

    /// All display strings whose name has a token equal to `term`,
    /// case-insensitively, in store order.
    pub fn search(&self, term: &str) -> Vec<String> {
        let lowered = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name_matches(&lowered))
            .map(|e| e.display.clone())
            .collect()
    }

    /// Lexicographic sort by the full display string. Display strings
    /// begin with the first name, so this is the "by first name" sort
    /// the help text advertises.
    pub fn sort_alphabetically(&mut self) {
        self.entries.sort_by(|a, b| a.display.cmp(&b.display));
    }

    /// One single left-to-right adjacent-swap pass over the entries,
    /// ordered by age as of `today`. This is deliberately NOT a full
    /// sort: exactly one bubble pass runs, and the age list it
    /// compares against is computed once up front and never reindexed
    /// after swaps. Callers get a list that is at most closer to age
    /// order, not fully sorted.
    pub fn sort_by_age(&mut self, today: NaiveDate) -> Result<()> {
        let ages = self
            .entries
            .iter()
            .map(|e| e.age_on(today))
            .collect::<Result<Vec<i64>>>()?;

        for j in 0..ages.len().saturating_sub(1) {
            if ages[j] > ages[j + 1] {
                self.entries.swap(j, j + 1);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(dates: &[(&str, &str, &str, &str, &str)]) -> BirthdayBook {
        let mut book = BirthdayBook::new();
        for (first, last, m, d, y) in dates {
            book.push(Entry::new(first, last, m, d, y));
        }
        book
    }

    fn displays(book: &BirthdayBook) -> Vec<&str> {
        book.entries().iter().map(|e| e.display.as_str()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_search_matches_first_and_last_name() {
        let book = book_with(&[
            ("Ann", "Lee", "1", "2", "1990"),
            ("Bob", "Ann", "3", "4", "1985"),
            ("Cid", "Rey", "5", "6", "1970"),
        ]);

        let matches = book.search("ANN");
        assert_eq!(
            matches,
            vec!["Ann Lee, 1/2/1990".to_string(), "Bob Ann, 3/4/1985".to_string()]
        );
        assert!(book.search("nobody").is_empty());
    }

    #[test]
    fn test_sort_alphabetically_uses_display_string() {
        let mut book = book_with(&[
            ("Zed", "Aarons", "1", "1", "2000"),
            ("Amy", "Zhou", "1", "1", "2000"),
        ]);
        book.sort_alphabetically();
        assert_eq!(
            displays(&book),
            vec!["Amy Zhou, 1/1/2000", "Zed Aarons, 1/1/2000"]
        );
    }

    #[test]
    fn test_sort_by_age_is_a_single_pass() {
        // Ages as of 2024-07-01: 44, 34, 24 (oldest first)
        let mut book = book_with(&[
            ("Old", "Est", "1", "1", "1980"),
            ("Mid", "Dle", "1", "1", "1990"),
            ("You", "Ng", "1", "1", "2000"),
        ]);
        book.sort_by_age(today()).unwrap();

        // One bubble pass leaves the list only partially reordered
        assert_eq!(
            displays(&book),
            vec![
                "Mid Dle, 1/1/1990",
                "You Ng, 1/1/2000",
                "Old Est, 1/1/1980"
            ]
        );
    }

    #[test]
    fn test_sort_by_age_compares_stale_ages_after_a_swap() {
        // Ages: 44, 24, 34. After the first swap the 44-year-old sits
        // at index 1, but the pass still compares the ORIGINAL age at
        // index 1 (24) against index 2 (34), so no second swap happens.
        let mut book = book_with(&[
            ("Old", "Est", "1", "1", "1980"),
            ("You", "Ng", "1", "1", "2000"),
            ("Mid", "Dle", "1", "1", "1990"),
        ]);
        book.sort_by_age(today()).unwrap();

        assert_eq!(
            displays(&book),
            vec![
                "You Ng, 1/1/2000",
                "Old Est, 1/1/1980",
                "Mid Dle, 1/1/1990"
            ]
        );
    }

    #[test]
    fn test_sort_by_age_already_ordered_is_untouched() {
        let mut book = book_with(&[
            ("You", "Ng", "1", "1", "2000"),
            ("Old", "Est", "1", "1", "1980"),
        ]);
        book.sort_by_age(today()).unwrap();
        assert_eq!(
            displays(&book),
            vec!["You Ng, 1/1/2000", "Old Est, 1/1/1980"]
        );
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut book = book_with(&[
            ("Ann", "Lee", "1", "2", "1990"),
            ("Bob", "Ann", "3", "4", "1985"),
            ("Cid", "Rey", "5", "6", "1970"),
        ]);
        let removed = book.remove(1);
        assert_eq!(removed.name_key, "Bob Ann");
        assert_eq!(
            displays(&book),
            vec!["Ann Lee, 1/2/1990", "Cid Rey, 5/6/1970"]
        );
    }
}
