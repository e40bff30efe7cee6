use chrono::{Datelike, NaiveDate};

/// Gapless number sequence for generated journal entries, in the format
/// `{prefix}/{year}/{sequential}` (e.g. "AJIVA/2024/0001"). The counter
/// restarts when the entry date moves into a later year.
#[derive(Debug, Clone)]
pub struct EntryNumberSequence {
    prefix: String,
    year: i32,
    next: u64,
}

impl EntryNumberSequence {
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next: 1,
        }
    }

    /// Issue the next number for an entry dated `date`.
    pub fn next_for(&mut self, date: NaiveDate) -> String {
        if date.year() > self.year {
            self.year = date.year();
            self.next = 1;
        }
        let number = format!("{}/{}/{:04}", self.prefix, self.year, self.next);
        self.next += 1;
        number
    }
}
