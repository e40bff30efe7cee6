use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::JournalKind;

/// Lock date categories, following the ledger platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockKind {
    /// General accounting lock (fiscal year close).
    FiscalYear,
    /// Tax reporting lock (issued VAT statements).
    Tax,
    /// Sale journal lock.
    Sale,
    /// Purchase journal lock.
    Purchase,
    /// Hard lock — irreversible, applies to everything.
    Hard,
}

impl LockKind {
    /// Label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FiscalYear => "fiscal year lock",
            Self::Tax => "tax lock",
            Self::Sale => "sale lock",
            Self::Purchase => "purchase lock",
            Self::Hard => "hard lock",
        }
    }
}

/// Per-company lock dates. Edits dated on or before a lock date are
/// disallowed for the corresponding category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LockDates {
    pub fiscal_year: Option<NaiveDate>,
    pub tax: Option<NaiveDate>,
    pub sale: Option<NaiveDate>,
    pub purchase: Option<NaiveDate>,
    pub hard: Option<NaiveDate>,
}

impl LockDates {
    /// Lock dates violated by `date` under the given scope, sorted
    /// ascending — the last element is the most restrictive (latest) one.
    pub fn violations(&self, date: NaiveDate, scope: LockScope) -> Vec<LockViolation> {
        let candidates = [
            (scope.fiscal_year, LockKind::FiscalYear, self.fiscal_year),
            (scope.tax, LockKind::Tax, self.tax),
            (scope.sale, LockKind::Sale, self.sale),
            (scope.purchase, LockKind::Purchase, self.purchase),
            (scope.hard, LockKind::Hard, self.hard),
        ];

        let mut violated: Vec<LockViolation> = candidates
            .into_iter()
            .filter(|(relevant, _, _)| *relevant)
            .filter_map(|(_, kind, lock)| lock.map(|l| (kind, l)))
            .filter(|(_, lock)| date <= *lock)
            .map(|(kind, lock)| LockViolation { kind, date: lock })
            .collect();

        violated.sort_by_key(|v| v.date);
        violated
    }
}

/// Which lock categories are relevant for a given check.
#[derive(Debug, Clone, Copy)]
pub struct LockScope {
    pub fiscal_year: bool,
    pub tax: bool,
    pub sale: bool,
    pub purchase: bool,
    pub hard: bool,
}

impl LockScope {
    /// Scope for a document booked in a journal of the given kind.
    /// Fiscal-year and hard locks always apply; sale/purchase locks apply
    /// to their journal kind; the tax lock applies to tax-relevant checks.
    pub fn for_journal(kind: JournalKind, has_tax: bool) -> Self {
        Self {
            fiscal_year: true,
            tax: has_tax,
            sale: kind == JournalKind::Sale,
            purchase: kind == JournalKind::Purchase,
            hard: true,
        }
    }

    /// Scope for the line-level tax lock check: tax and hard locks only.
    pub fn tax_only() -> Self {
        Self {
            fiscal_year: false,
            tax: true,
            sale: false,
            purchase: false,
            hard: true,
        }
    }
}

/// A violated lock date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockViolation {
    pub kind: LockKind,
    pub date: NaiveDate,
}

/// Format violated lock dates for user-facing error messages,
/// e.g. "tax lock (2024-03-31), hard lock (2024-01-31)".
pub fn format_violations(violations: &[LockViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.kind.label(), v.date))
        .collect::<Vec<_>>()
        .join(", ")
}
