use chrono::{Months, NaiveDate};

use crate::core::{Document, JournalKind, LockDates, LockScope};

/// Compute the VAT computation date for a document.
///
/// Unset for anything that is not an Argentine purchase document. For AR
/// purchases, the accounting date is checked against the lock dates with a
/// tax-relevant scope for the document's journal: no violation means the
/// VAT credit is computed in the invoice's own period; otherwise the credit
/// moves to the calendar-month successor of the most restrictive (latest)
/// violated lock date.
///
/// Month arithmetic clamps to the end of the target month, so a lock at
/// 2024-01-31 defers to 2024-02-29 — never a fixed 30-day offset.
///
/// ```
/// use chrono::NaiveDate;
/// use computo::core::*;
/// use computo::deferral::vat_computation_date;
///
/// let mut locks = LockDates::default();
/// locks.tax = NaiveDate::from_ymd_opt(2024, 3, 31);
///
/// let invoice = DocumentBuilder::new(
///     "FA-A-00001",
///     DocumentKind::PurchaseInvoice,
///     "COMPRAS",
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// )
/// .build();
///
/// assert_eq!(
///     vat_computation_date(&invoice, &locks, JournalKind::Purchase),
///     NaiveDate::from_ymd_opt(2024, 4, 30),
/// );
/// ```
pub fn vat_computation_date(
    document: &Document,
    locks: &LockDates,
    journal_kind: JournalKind,
) -> Option<NaiveDate> {
    if !document.is_ar_purchase() {
        return None;
    }

    // Purchase invoices affect tax reports, so the tax lock is in scope.
    let scope = LockScope::for_journal(journal_kind, true);
    let violated = locks.violations(document.date, scope);

    match violated.last() {
        None => Some(document.date),
        Some(most_restrictive) => most_restrictive.date.checked_add_months(Months::new(1)),
    }
}
