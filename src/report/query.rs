use chrono::NaiveDate;

use crate::core::{Document, DocumentState, JournalKind};
use crate::posting::Ledger;

/// Inclusive date range of a report period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Which side of the VAT book to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookScope {
    Purchases,
    Sales,
    All,
}

impl BookScope {
    /// Journal kinds this scope draws documents from. Adjustment entries
    /// live in general journals and never appear in the book.
    pub fn includes(&self, kind: JournalKind) -> bool {
        match self {
            Self::Purchases => kind == JournalKind::Purchase,
            Self::Sales => kind == JournalKind::Sale,
            Self::All => matches!(kind, JournalKind::Purchase | JournalKind::Sale),
        }
    }
}

/// Date under which a document is reported in the VAT book.
///
/// Argentine purchase documents are attributed to their VAT computation
/// date when one is set, so a deferred credit surfaces in the period it
/// was moved to. Everything else reports under its accounting date.
pub fn effective_date(document: &Document) -> NaiveDate {
    if document.is_ar_purchase() {
        document.vat_computation_date.unwrap_or(document.date)
    } else {
        document.date
    }
}

/// Select the documents a VAT book over `range` covers, ordered by
/// effective date then number. Only documents with at least one
/// tax-relevant line (VAT, taxable base, or tribute) appear; draft
/// documents are included only on request (provisional books).
pub fn select_documents<'a>(
    ledger: &'a Ledger,
    scope: BookScope,
    range: &DateRange,
    include_draft: bool,
) -> Vec<&'a Document> {
    let mut selected: Vec<&Document> = ledger
        .documents()
        .filter(|d| {
            ledger
                .journal(&d.journal)
                .is_some_and(|j| scope.includes(j.kind))
        })
        .filter(|d| include_draft || d.state == DocumentState::Posted)
        .filter(|d| d.affects_tax_report())
        .filter(|d| range.contains(effective_date(d)))
        .collect();
    selected.sort_by(|a, b| {
        (effective_date(a), &a.number).cmp(&(effective_date(b), &b.number))
    });
    selected
}
