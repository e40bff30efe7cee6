use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Accounting document — a purchase/sale invoice, a refund, or a plain
/// journal entry (the shape VAT adjustment entries take).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document number (unique within the ledger, e.g. "FA-A-00001").
    pub number: String,
    /// Document kind.
    pub kind: DocumentKind,
    /// Accounting date. For deferred purchases this stays the original
    /// invoice date even inside a locked period; the VAT credit is
    /// attributed to `vat_computation_date` instead.
    pub date: NaiveDate,
    /// Country of the fiscal position (ISO 3166-1 alpha-2). Only "AR"
    /// purchases participate in VAT deferral.
    pub country_code: String,
    /// Code of the journal the document is booked in.
    pub journal: String,
    /// Counterparty name.
    pub partner: Option<String>,
    /// Posting state.
    pub state: DocumentState,
    /// Journal lines.
    pub lines: Vec<EntryLine>,
    /// Date used to determine in which period the VAT credit is computed.
    /// Set at post time for Argentine purchase documents; when the invoice
    /// date falls in a locked tax period this is the calendar-month
    /// successor of the most restrictive lock date.
    pub vat_computation_date: Option<NaiveDate>,
    /// Number of the adjustment entry generated for this invoice.
    pub adjustment_entry: Option<String>,
    /// Number of the purchase invoice this adjustment entry balances.
    pub source_invoice: Option<String>,
}

impl Document {
    /// Argentine purchase document (invoice or refund) — the only kind
    /// whose VAT credit can be deferred.
    pub fn is_ar_purchase(&self) -> bool {
        self.kind.is_purchase() && self.country_code == "AR"
    }

    /// True for entries generated to move a deferred VAT credit from the
    /// holding account to the definitive account.
    pub fn is_vat_adjustment(&self) -> bool {
        self.source_invoice.is_some()
    }

    /// Sum of all debits.
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of all credits.
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Whether any line feeds the tax report.
    pub fn affects_tax_report(&self) -> bool {
        self.lines.iter().any(EntryLine::affects_tax_report)
    }
}

/// Document kinds, following the ledger platform's move types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Vendor bill.
    PurchaseInvoice,
    /// Vendor credit note.
    PurchaseRefund,
    /// Customer invoice.
    SaleInvoice,
    /// Customer credit note.
    SaleRefund,
    /// Miscellaneous journal entry.
    Entry,
}

impl DocumentKind {
    /// Purchase-side documents (bills and vendor credit notes).
    pub fn is_purchase(&self) -> bool {
        matches!(self, Self::PurchaseInvoice | Self::PurchaseRefund)
    }

    /// Sale-side documents.
    pub fn is_sale(&self) -> bool {
        matches!(self, Self::SaleInvoice | Self::SaleRefund)
    }
}

/// Posting state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentState {
    Draft,
    Posted,
}

/// A single journal line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryLine {
    /// Account code.
    pub account: String,
    /// Line label.
    pub label: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Set when this line carries a VAT amount at the given rate.
    pub vat: Option<VatRate>,
    /// Rates for which this line is a taxable base.
    pub vat_base: Vec<VatRate>,
    /// Set when this line carries a non-VAT tribute (perceptions etc.).
    pub tribute: Option<Tribute>,
}

impl EntryLine {
    /// Signed balance: debit − credit.
    pub fn balance(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Lines that feed the tax report: VAT amounts, taxable bases, and
    /// tributes.
    pub fn affects_tax_report(&self) -> bool {
        self.vat.is_some() || !self.vat_base.is_empty() || self.tribute.is_some()
    }
}

/// AFIP VAT rate codes (alícuotas de IVA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatRate {
    /// 1 — No gravado (outside the scope of VAT).
    NotTaxed,
    /// 2 — Exento (exempt).
    Exempt,
    /// 3 — 0%.
    Zero,
    /// 4 — 10.5%.
    Percent10_5,
    /// 5 — 21%.
    Percent21,
    /// 6 — 27%.
    Percent27,
    /// 8 — 5%.
    Percent5,
    /// 9 — 2.5%.
    Percent2_5,
}

impl VatRate {
    /// AFIP alícuota code.
    pub fn afip_code(&self) -> &'static str {
        match self {
            Self::NotTaxed => "1",
            Self::Exempt => "2",
            Self::Zero => "3",
            Self::Percent10_5 => "4",
            Self::Percent21 => "5",
            Self::Percent27 => "6",
            Self::Percent5 => "8",
            Self::Percent2_5 => "9",
        }
    }

    /// Parse from an AFIP alícuota code.
    pub fn from_afip_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::NotTaxed),
            "2" => Some(Self::Exempt),
            "3" => Some(Self::Zero),
            "4" => Some(Self::Percent10_5),
            "5" => Some(Self::Percent21),
            "6" => Some(Self::Percent27),
            "8" => Some(Self::Percent5),
            "9" => Some(Self::Percent2_5),
            _ => None,
        }
    }

    /// Rate percentage.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::NotTaxed | Self::Exempt | Self::Zero => Decimal::ZERO,
            Self::Percent10_5 => dec!(10.5),
            Self::Percent21 => dec!(21),
            Self::Percent27 => dec!(27),
            Self::Percent5 => dec!(5),
            Self::Percent2_5 => dec!(2.5),
        }
    }

    /// Whether a base at this rate counts toward the taxed net in the
    /// VAT book (codes 4, 5, 6, 8, 9).
    pub fn is_taxed(&self) -> bool {
        matches!(
            self,
            Self::Percent10_5
                | Self::Percent21
                | Self::Percent27
                | Self::Percent5
                | Self::Percent2_5
        )
    }
}

/// AFIP tribute codes — non-VAT taxes and perceptions reported alongside
/// VAT in the purchase/sale books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tribute {
    /// 01 — National taxes.
    National,
    /// 02 — Provincial taxes.
    Provincial,
    /// 03 — Municipal taxes.
    Municipal,
    /// 04 — Internal taxes.
    Internal,
    /// 06 — VAT perception.
    VatPerception,
    /// 07 — Gross income (IIBB) perception.
    GrossIncomePerception,
    /// 08 — Municipal perceptions.
    MunicipalPerception,
    /// 09 — Earnings (ganancias) perception.
    EarningsPerception,
    /// 99 — Other.
    Other,
}

impl Tribute {
    /// AFIP tribute code.
    pub fn afip_code(&self) -> &'static str {
        match self {
            Self::National => "01",
            Self::Provincial => "02",
            Self::Municipal => "03",
            Self::Internal => "04",
            Self::VatPerception => "06",
            Self::GrossIncomePerception => "07",
            Self::MunicipalPerception => "08",
            Self::EarningsPerception => "09",
            Self::Other => "99",
        }
    }

    /// Parse from an AFIP tribute code.
    pub fn from_afip_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::National),
            "02" => Some(Self::Provincial),
            "03" => Some(Self::Municipal),
            "04" => Some(Self::Internal),
            "06" => Some(Self::VatPerception),
            "07" => Some(Self::GrossIncomePerception),
            "08" => Some(Self::MunicipalPerception),
            "09" => Some(Self::EarningsPerception),
            "99" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Ledger account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account code (e.g. "1.1.05.01").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub kind: AccountKind,
}

impl Account {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Account classifications, following the ledger platform's account types.
/// Both VAT credit roles must be [`AccountKind::CurrentAsset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    CurrentAsset,
    NonCurrentAsset,
    Receivable,
    Payable,
    CurrentLiability,
    Income,
    Expense,
    Equity,
}

impl AccountKind {
    /// Platform identifier for this classification.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CurrentAsset => "asset_current",
            Self::NonCurrentAsset => "asset_non_current",
            Self::Receivable => "asset_receivable",
            Self::Payable => "liability_payable",
            Self::CurrentLiability => "liability_current",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Equity => "equity",
        }
    }

    /// Parse from a platform identifier.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asset_current" => Some(Self::CurrentAsset),
            "asset_non_current" => Some(Self::NonCurrentAsset),
            "asset_receivable" => Some(Self::Receivable),
            "liability_payable" => Some(Self::Payable),
            "liability_current" => Some(Self::CurrentLiability),
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "equity" => Some(Self::Equity),
            _ => None,
        }
    }
}

/// Journal a document is booked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// Journal code (e.g. "COMPRAS", "AJIVA").
    pub code: String,
    /// Journal name.
    pub name: String,
    /// Journal kind.
    pub kind: JournalKind,
}

impl Journal {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: JournalKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Journal kinds. Sale and purchase lock dates apply per journal kind;
/// adjustment entries live in a general journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalKind {
    Sale,
    Purchase,
    General,
}
