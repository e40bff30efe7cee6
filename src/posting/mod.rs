//! Posting pipeline: VAT account substitution, lock-aware date resolution,
//! and adjustment entry generation.
//!
//! All mutations of a single [`Ledger::post`] call commit together: every
//! fallible step — validation, substitution, lock checks, adjustment entry
//! construction — runs before any state is stored, so a failure leaves the
//! ledger untouched.

mod numbering;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{
    Account, CompanyConfig, ComputoError, Document, DocumentBuilder, DocumentKind, DocumentState,
    EntryLine, Journal, JournalKind, LineBuilder,
};
use crate::deferral::{check_fiscal_locks, check_tax_locks, policy_for, vat_computation_date};

pub use numbering::EntryNumberSequence;

/// Fixed code of the journal that receives VAT adjustment entries.
pub const ADJUSTMENT_JOURNAL_CODE: &str = "AJIVA";

/// Minimal in-process ledger: chart of accounts, journals, and posted
/// documents for one company. Hosts the deferral rules the way the real
/// ledger platform would, through its posting pipeline.
#[derive(Debug, Clone)]
pub struct Ledger {
    config: CompanyConfig,
    accounts: BTreeMap<String, Account>,
    journals: BTreeMap<String, Journal>,
    documents: BTreeMap<String, Document>,
    adjustment_sequence: EntryNumberSequence,
}

impl Ledger {
    pub fn new(config: CompanyConfig) -> Self {
        Self {
            config,
            accounts: BTreeMap::new(),
            journals: BTreeMap::new(),
            documents: BTreeMap::new(),
            adjustment_sequence: EntryNumberSequence::new(ADJUSTMENT_JOURNAL_CODE, 0),
        }
    }

    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CompanyConfig {
        &mut self.config
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.code.clone(), account);
    }

    pub fn add_journal(&mut self, journal: Journal) {
        self.journals.insert(journal.code.clone(), journal);
    }

    pub fn account(&self, code: &str) -> Option<&Account> {
        self.accounts.get(code)
    }

    pub fn journal(&self, code: &str) -> Option<&Journal> {
        self.journals.get(code)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn document(&self, number: &str) -> Option<&Document> {
        self.documents.get(number)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// The adjustment entry generated for an invoice, if any.
    pub fn adjustment_entry_of(&self, number: &str) -> Option<&Document> {
        self.documents
            .get(number)
            .and_then(|d| d.adjustment_entry.as_deref())
            .and_then(|n| self.documents.get(n))
    }

    /// The purchase invoice that generated an adjustment entry.
    pub fn source_invoice_of(&self, number: &str) -> Option<&Document> {
        self.documents
            .get(number)
            .and_then(|d| d.source_invoice.as_deref())
            .and_then(|n| self.documents.get(n))
    }

    /// Store a document without posting it. Drafts are skipped by lock
    /// checks and appear only in reports that ask for them; posting later
    /// under the same number replaces the draft.
    pub fn save_draft(&mut self, document: Document) -> Result<(), ComputoError> {
        if self
            .documents
            .get(&document.number)
            .is_some_and(|d| d.state == DocumentState::Posted)
        {
            return Err(ComputoError::DuplicateDocument(document.number));
        }
        self.documents.insert(document.number.clone(), document);
        Ok(())
    }

    /// Post a document.
    ///
    /// For Argentine purchase invoices whose VAT computation date differs
    /// from the invoice date, lines on the definitive VAT credit account
    /// are rewritten to the holding account before posting, and a two-line
    /// adjustment entry dated at the computation date is generated and
    /// posted right after (debit definitive, credit holding), linked
    /// bidirectionally to the invoice.
    ///
    /// Returns the number of the adjustment entry when one was created.
    pub fn post(&mut self, mut document: Document) -> Result<Option<String>, ComputoError> {
        if self
            .documents
            .get(&document.number)
            .is_some_and(|d| d.state == DocumentState::Posted)
        {
            return Err(ComputoError::DuplicateDocument(document.number));
        }
        let journal_kind = self
            .journals
            .get(&document.journal)
            .map(|j| j.kind)
            .ok_or_else(|| ComputoError::UnknownJournal(document.journal.clone()))?;

        let debits = document.total_debit();
        let credits = document.total_credit();
        if debits != credits {
            return Err(ComputoError::Unbalanced {
                number: document.number,
                debits,
                credits,
            });
        }

        document.vat_computation_date =
            vat_computation_date(&document, &self.config.locks, journal_kind);
        let deferral = match document.vat_computation_date {
            Some(computation_date) if computation_date != document.date => Some(computation_date),
            _ => None,
        };

        // Reroute the VAT credit through the holding account while the
        // invoice date sits in a locked period.
        let substitution = match deferral {
            Some(_) => match (
                self.config.vat_credit_account.clone(),
                self.config.vat_credit_holding_account.clone(),
            ) {
                (Some(credit), Some(holding)) => {
                    for line in &mut document.lines {
                        if line.account == credit {
                            line.account = holding.clone();
                        }
                    }
                    Some((credit, holding))
                }
                _ => {
                    return Err(ComputoError::MissingVatAccounts {
                        company: self.config.name.clone(),
                    });
                }
            },
            None => None,
        };

        for line in &document.lines {
            if !self.accounts.contains_key(&line.account) {
                return Err(ComputoError::UnknownAccount(line.account.clone()));
            }
        }
        if let Some((credit, _)) = &substitution {
            if !self.accounts.contains_key(credit) {
                return Err(ComputoError::UnknownAccount(credit.clone()));
            }
        }

        let policy = policy_for(&document);
        document.date = policy.accounting_date(
            document.date,
            &self.config.locks,
            journal_kind,
            document.affects_tax_report(),
        );
        check_fiscal_locks([(&document, journal_kind)], &self.config)?;

        document.state = DocumentState::Posted;
        check_tax_locks([&document], &self.config)?;

        let adjustment = match (deferral, &substitution) {
            (Some(computation_date), Some((credit, holding))) => {
                self.build_vat_adjustment(&document, computation_date, credit, holding)?
            }
            _ => None,
        };

        let adjustment_number = adjustment.as_ref().map(|a| a.number.clone());
        if let Some(adjustment) = adjustment {
            document.adjustment_entry = Some(adjustment.number.clone());
            self.documents
                .insert(adjustment.number.clone(), adjustment);
        }
        self.documents.insert(document.number.clone(), document);

        Ok(adjustment_number)
    }

    /// Build the balancing entry that moves the deferred VAT credit from
    /// the holding account into the definitive account at the computation
    /// date. Returns `None` when the deferred amount is zero.
    fn build_vat_adjustment(
        &mut self,
        invoice: &Document,
        computation_date: NaiveDate,
        credit_account: &str,
        holding_account: &str,
    ) -> Result<Option<Document>, ComputoError> {
        let journal_code = self
            .journals
            .values()
            .find(|j| j.code == ADJUSTMENT_JOURNAL_CODE && j.kind == JournalKind::General)
            .map(|j| j.code.clone())
            .ok_or_else(|| ComputoError::MissingAdjustmentJournal {
                company: self.config.name.clone(),
                code: ADJUSTMENT_JOURNAL_CODE.to_string(),
            })?;

        let amount: Decimal = invoice
            .lines
            .iter()
            .filter(|l| l.account == holding_account)
            .map(EntryLine::balance)
            .sum();
        if amount.is_zero() {
            return Ok(None);
        }

        let label = format!("VAT credit computation - {}", invoice.number);
        let number = self.adjustment_sequence.next_for(computation_date);
        let mut entry = DocumentBuilder::new(
            number,
            DocumentKind::Entry,
            journal_code,
            computation_date,
        )
        .country(invoice.country_code.clone())
        .line(
            LineBuilder::new(credit_account, label.clone())
                .debit(amount)
                .build(),
        )
        .line(
            LineBuilder::new(holding_account, label)
                .credit(amount)
                .build(),
        )
        .build();
        entry.state = DocumentState::Posted;
        entry.source_invoice = Some(invoice.number.clone());

        Ok(Some(entry))
    }
}
