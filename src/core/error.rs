use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while posting documents or generating VAT
/// adjustment entries. All are precondition failures: the operation is
/// refused and must be resubmitted after fixing the configuration or the
/// dates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComputoError {
    /// The VAT credit accounts are not configured for the company.
    #[error(
        "please configure the VAT credit accounts for company {company} \
         before posting purchase invoices in locked periods"
    )]
    MissingVatAccounts { company: String },

    /// The dedicated VAT adjustment journal does not exist.
    #[error(
        "VAT adjustment journal ({code}) not found for company {company}; \
         please create it manually"
    )]
    MissingAdjustmentJournal { company: String, code: String },

    /// Posting would impact an already issued tax statement.
    #[error(
        "the operation is refused as it would impact an already issued tax \
         statement; change the VAT computation date or the following lock \
         dates to proceed: {locks}"
    )]
    TaxLockViolation { locks: String },

    /// The accounting date falls in a locked fiscal period.
    #[error("accounting date {date} falls in a locked period: {locks}")]
    FiscalLockViolation { date: NaiveDate, locks: String },

    /// The document references a journal the ledger does not know.
    #[error("unknown journal: {0}")]
    UnknownJournal(String),

    /// A line references an account missing from the chart of accounts.
    #[error("unknown account: {0}")]
    UnknownAccount(String),

    /// A document with this number was already posted.
    #[error("duplicate document number: {0}")]
    DuplicateDocument(String),

    /// Debits and credits do not balance.
    #[error("document {number} is not balanced: debits {debits} != credits {credits}")]
    Unbalanced {
        number: String,
        debits: Decimal,
        credits: Decimal,
    },

    /// Configuration validation failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "vat_credit_account").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
