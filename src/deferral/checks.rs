use crate::core::{
    CompanyConfig, ComputoError, Document, DocumentState, EntryLine, JournalKind, LockScope,
    format_violations,
};

use super::policy::{PostingProfile, classify, policy_for};

/// Partition documents into (deferred, standard) collections by posting
/// profile.
pub fn partition_by_profile<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> (Vec<&'a Document>, Vec<&'a Document>) {
    let mut deferred = Vec::new();
    let mut standard = Vec::new();
    for document in documents {
        match classify(document) {
            PostingProfile::DeferredVat => deferred.push(document),
            PostingProfile::Standard => standard.push(document),
        }
    }
    (deferred, standard)
}

/// Fiscal lock check at posting time. Deferred-VAT documents are exempt:
/// their accounting date may sit in a locked period because the tax lock
/// is enforced against the computation date on the lines instead. Standard
/// documents fail if their accounting date violates any relevant lock.
pub fn check_fiscal_locks<'a>(
    documents: impl IntoIterator<Item = (&'a Document, JournalKind)>,
    config: &CompanyConfig,
) -> Result<(), ComputoError> {
    for (document, journal_kind) in documents {
        let policy = policy_for(document);
        if policy.exempt_from_fiscal_lock() {
            continue;
        }
        let violated = policy.violated_lock_dates(
            document.date,
            &config.locks,
            journal_kind,
            document.affects_tax_report(),
        );
        if !violated.is_empty() {
            return Err(ComputoError::FiscalLockViolation {
                date: document.date,
                locks: format_violations(&violated),
            });
        }
    }
    Ok(())
}

/// Line-level tax lock check.
///
/// Lines are split into two independent collections: qualifying lines
/// (Argentine purchase documents carrying a VAT computation date) are
/// checked against the computation date; all other lines get the standard
/// check against the accounting date. Either way only posted documents and
/// lines that feed the tax report are considered.
pub fn check_tax_locks<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
    config: &CompanyConfig,
) -> Result<(), ComputoError> {
    let mut qualifying: Vec<(&Document, chrono::NaiveDate, &EntryLine)> = Vec::new();
    let mut other: Vec<(&Document, &EntryLine)> = Vec::new();

    for document in documents {
        for line in &document.lines {
            match document.vat_computation_date {
                Some(computation_date) if document.is_ar_purchase() => {
                    qualifying.push((document, computation_date, line));
                }
                _ => other.push((document, line)),
            }
        }
    }

    for (document, computation_date, line) in qualifying {
        if document.state != DocumentState::Posted || !line.affects_tax_report() {
            continue;
        }
        let violated = config
            .locks
            .violations(computation_date, LockScope::tax_only());
        if !violated.is_empty() {
            return Err(ComputoError::TaxLockViolation {
                locks: format_violations(&violated),
            });
        }
    }

    for (document, line) in other {
        if document.state != DocumentState::Posted || !line.affects_tax_report() {
            continue;
        }
        let violated = config.locks.violations(document.date, LockScope::tax_only());
        if !violated.is_empty() {
            return Err(ComputoError::TaxLockViolation {
                locks: format_violations(&violated),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DocumentBuilder, DocumentKind, LineBuilder, LockDates, VatRate};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config_with_tax_lock(lock: NaiveDate) -> CompanyConfig {
        let mut config = CompanyConfig::new("Vikingo SRL");
        config.locks = LockDates {
            tax: Some(lock),
            ..Default::default()
        };
        config
    }

    fn posted_purchase(doc_date: NaiveDate, computation: Option<NaiveDate>) -> Document {
        let mut document = DocumentBuilder::new(
            "FA-A-00001",
            DocumentKind::PurchaseInvoice,
            "COMPRAS",
            doc_date,
        )
        .line(
            LineBuilder::new("1.1.05.02", "IVA 21%")
                .debit(dec!(210))
                .vat(VatRate::Percent21)
                .build(),
        )
        .build();
        document.state = DocumentState::Posted;
        document.vat_computation_date = computation;
        document
    }

    #[test]
    fn qualifying_lines_checked_against_computation_date() {
        let config = config_with_tax_lock(date(2024, 3, 31));
        // Accounting date is locked, but the computation date is open.
        let document = posted_purchase(date(2024, 2, 10), Some(date(2024, 4, 30)));
        assert!(check_tax_locks([&document], &config).is_ok());
    }

    #[test]
    fn qualifying_violation_names_lock_dates() {
        let config = config_with_tax_lock(date(2024, 5, 31));
        let document = posted_purchase(date(2024, 2, 10), Some(date(2024, 4, 30)));
        let err = check_tax_locks([&document], &config).unwrap_err();
        assert!(err.to_string().contains("2024-05-31"));
    }

    #[test]
    fn draft_documents_skipped() {
        let config = config_with_tax_lock(date(2024, 5, 31));
        let mut document = posted_purchase(date(2024, 2, 10), Some(date(2024, 4, 30)));
        document.state = DocumentState::Draft;
        assert!(check_tax_locks([&document], &config).is_ok());
    }

    #[test]
    fn other_lines_use_accounting_date() {
        let config = config_with_tax_lock(date(2024, 3, 31));
        let mut sale = DocumentBuilder::new(
            "FV-A-00001",
            DocumentKind::SaleInvoice,
            "VENTAS",
            date(2024, 2, 10),
        )
        .line(
            LineBuilder::new("2.1.03", "IVA Débito")
                .credit(dec!(210))
                .vat(VatRate::Percent21)
                .build(),
        )
        .build();
        sale.state = DocumentState::Posted;
        assert!(check_tax_locks([&sale], &config).is_err());
    }

    #[test]
    fn partition_separates_profiles() {
        let bill = posted_purchase(date(2024, 2, 10), None);
        let sale = DocumentBuilder::new(
            "FV-A-00001",
            DocumentKind::SaleInvoice,
            "VENTAS",
            date(2024, 2, 10),
        )
        .build();
        let (deferred, standard) = partition_by_profile([&bill, &sale]);
        assert_eq!(deferred.len(), 1);
        assert_eq!(standard.len(), 1);
    }
}
