use chrono::{Months, NaiveDate};

use crate::core::{Document, JournalKind, LockDates, LockScope, LockViolation};

/// Classification of a document for date resolution and lock checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingProfile {
    /// Argentine purchase document: VAT credit may be deferred, the
    /// accounting date is kept verbatim.
    DeferredVat,
    /// Everything else: the platform's standard lock behavior.
    Standard,
}

/// Classify a document into its posting profile.
pub fn classify(document: &Document) -> PostingProfile {
    if document.is_ar_purchase() {
        PostingProfile::DeferredVat
    } else {
        PostingProfile::Standard
    }
}

/// How the ledger resolves accounting dates and lock checks for a
/// document. The platform's generic extension points become an explicit
/// strategy selected per posting profile.
pub trait DatePolicy {
    /// Whether the document skips the fiscal lock check at posting time.
    fn exempt_from_fiscal_lock(&self) -> bool;

    /// Lock dates the accounting date violates. Used by the platform to
    /// decide whether to auto-adjust the date.
    fn violated_lock_dates(
        &self,
        date: NaiveDate,
        locks: &LockDates,
        journal_kind: JournalKind,
        has_tax: bool,
    ) -> Vec<LockViolation>;

    /// Resolve the accounting date for a document dated `invoice_date`.
    fn accounting_date(
        &self,
        invoice_date: NaiveDate,
        locks: &LockDates,
        journal_kind: JournalKind,
        has_tax: bool,
    ) -> NaiveDate;
}

/// Standard platform behavior: dates in locked periods are shifted past
/// the most restrictive violated lock.
pub struct StandardPolicy;

impl DatePolicy for StandardPolicy {
    fn exempt_from_fiscal_lock(&self) -> bool {
        false
    }

    fn violated_lock_dates(
        &self,
        date: NaiveDate,
        locks: &LockDates,
        journal_kind: JournalKind,
        has_tax: bool,
    ) -> Vec<LockViolation> {
        locks.violations(date, LockScope::for_journal(journal_kind, has_tax))
    }

    fn accounting_date(
        &self,
        invoice_date: NaiveDate,
        locks: &LockDates,
        journal_kind: JournalKind,
        has_tax: bool,
    ) -> NaiveDate {
        let violated = self.violated_lock_dates(invoice_date, locks, journal_kind, has_tax);
        match violated.last() {
            None => invoice_date,
            Some(most_restrictive) => most_restrictive
                .date
                .checked_add_months(Months::new(1))
                .unwrap_or(invoice_date),
        }
    }
}

/// Deferred-VAT behavior for Argentine purchases: the accounting date is
/// never adjusted and never reported as violating a lock. The tax lock is
/// enforced against the VAT computation date on the lines instead.
pub struct DeferredVatPolicy;

impl DatePolicy for DeferredVatPolicy {
    fn exempt_from_fiscal_lock(&self) -> bool {
        true
    }

    fn violated_lock_dates(
        &self,
        _date: NaiveDate,
        _locks: &LockDates,
        _journal_kind: JournalKind,
        _has_tax: bool,
    ) -> Vec<LockViolation> {
        Vec::new()
    }

    fn accounting_date(
        &self,
        invoice_date: NaiveDate,
        _locks: &LockDates,
        _journal_kind: JournalKind,
        _has_tax: bool,
    ) -> NaiveDate {
        invoice_date
    }
}

/// Select the date policy for a document.
pub fn policy_for(document: &Document) -> &'static dyn DatePolicy {
    match classify(document) {
        PostingProfile::DeferredVat => &DeferredVatPolicy,
        PostingProfile::Standard => &StandardPolicy,
    }
}
