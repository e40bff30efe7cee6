use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for accounting documents.
///
/// ```
/// use chrono::NaiveDate;
/// use computo::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = DocumentBuilder::new(
///     "FA-A-00001",
///     DocumentKind::PurchaseInvoice,
///     "COMPRAS",
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// )
/// .partner("Proveedor SA")
/// .line(
///     LineBuilder::new("5.1.01", "Servicios")
///         .debit(dec!(1000))
///         .vat_base([VatRate::Percent21])
///         .build(),
/// )
/// .line(
///     LineBuilder::new("1.1.05.01", "IVA 21%")
///         .debit(dec!(210))
///         .vat(VatRate::Percent21)
///         .build(),
/// )
/// .line(LineBuilder::new("2.1.01", "Proveedores").credit(dec!(1210)).build())
/// .build();
///
/// assert!(invoice.is_ar_purchase());
/// ```
pub struct DocumentBuilder {
    number: String,
    kind: DocumentKind,
    date: NaiveDate,
    country_code: String,
    journal: String,
    partner: Option<String>,
    lines: Vec<EntryLine>,
}

impl DocumentBuilder {
    pub fn new(
        number: impl Into<String>,
        kind: DocumentKind,
        journal: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            number: number.into(),
            kind,
            date,
            country_code: "AR".to_string(),
            journal: journal.into(),
            partner: None,
            lines: Vec::new(),
        }
    }

    /// Override the fiscal-position country (default "AR").
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn partner(mut self, name: impl Into<String>) -> Self {
        self.partner = Some(name.into());
        self
    }

    pub fn line(mut self, line: EntryLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Build the document in draft state. Balance and account existence
    /// are checked at posting time.
    pub fn build(self) -> Document {
        Document {
            number: self.number,
            kind: self.kind,
            date: self.date,
            country_code: self.country_code,
            journal: self.journal,
            partner: self.partner,
            state: DocumentState::Draft,
            lines: self.lines,
            vat_computation_date: None,
            adjustment_entry: None,
            source_invoice: None,
        }
    }
}

/// Builder for journal lines.
pub struct LineBuilder {
    line: EntryLine,
}

impl LineBuilder {
    pub fn new(account: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            line: EntryLine {
                account: account.into(),
                label: label.into(),
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
                vat: None,
                vat_base: Vec::new(),
                tribute: None,
            },
        }
    }

    pub fn debit(mut self, amount: Decimal) -> Self {
        self.line.debit = amount;
        self
    }

    pub fn credit(mut self, amount: Decimal) -> Self {
        self.line.credit = amount;
        self
    }

    /// Mark this line as carrying a VAT amount at the given rate.
    pub fn vat(mut self, rate: VatRate) -> Self {
        self.line.vat = Some(rate);
        self
    }

    /// Mark this line as a taxable base for the given rates.
    pub fn vat_base(mut self, rates: impl IntoIterator<Item = VatRate>) -> Self {
        self.line.vat_base = rates.into_iter().collect();
        self
    }

    /// Mark this line as carrying a non-VAT tribute.
    pub fn tribute(mut self, tribute: Tribute) -> Self {
        self.line.tribute = Some(tribute);
        self
    }

    pub fn build(self) -> EntryLine {
        self.line
    }
}
