use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Document, Tribute, VatRate};
use crate::posting::Ledger;

use super::query::{BookScope, DateRange, effective_date, select_documents};

/// One VAT book line (one document), with amounts bucketed into the
/// columns of the Argentine purchase/sale books. Refunds carry negative
/// amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatBookRow {
    /// Date the document is reported under (the VAT computation date for
    /// deferred Argentine purchases).
    pub date: NaiveDate,
    pub number: String,
    pub partner: Option<String>,
    /// Net amount taxed at a nonzero rate (sum over all rate columns,
    /// each base line counted once).
    pub taxed: Decimal,
    /// Net amount not taxed, exempt, or at 0%.
    pub not_taxed: Decimal,
    pub base_2_5: Decimal,
    pub base_5: Decimal,
    pub base_10_5: Decimal,
    pub base_21: Decimal,
    pub base_27: Decimal,
    pub vat_2_5: Decimal,
    pub vat_5: Decimal,
    pub vat_10_5: Decimal,
    pub vat_21: Decimal,
    pub vat_27: Decimal,
    pub vat_perception: Decimal,
    pub gross_income_perception: Decimal,
    pub municipal_taxes: Decimal,
    pub earnings_perception: Decimal,
    pub other_taxes: Decimal,
    /// Sum over every tax-relevant line of the document, including
    /// tributes with no column of their own.
    pub total: Decimal,
}

impl VatBookRow {
    fn new(document: &Document) -> Self {
        Self {
            date: effective_date(document),
            number: document.number.clone(),
            partner: document.partner.clone(),
            taxed: Decimal::ZERO,
            not_taxed: Decimal::ZERO,
            base_2_5: Decimal::ZERO,
            base_5: Decimal::ZERO,
            base_10_5: Decimal::ZERO,
            base_21: Decimal::ZERO,
            base_27: Decimal::ZERO,
            vat_2_5: Decimal::ZERO,
            vat_5: Decimal::ZERO,
            vat_10_5: Decimal::ZERO,
            vat_21: Decimal::ZERO,
            vat_27: Decimal::ZERO,
            vat_perception: Decimal::ZERO,
            gross_income_perception: Decimal::ZERO,
            municipal_taxes: Decimal::ZERO,
            earnings_perception: Decimal::ZERO,
            other_taxes: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Total VAT across all rate columns.
    pub fn vat_total(&self) -> Decimal {
        self.vat_2_5 + self.vat_5 + self.vat_10_5 + self.vat_21 + self.vat_27
    }
}

/// Render the VAT book for `range`: one row per document, ordered by
/// effective date then number. Purchase amounts read from debit balances,
/// sale amounts from credit balances, so refunds come out negative on
/// both sides.
pub fn vat_book(
    ledger: &Ledger,
    scope: BookScope,
    range: &DateRange,
    include_draft: bool,
) -> Vec<VatBookRow> {
    select_documents(ledger, scope, range, include_draft)
        .into_iter()
        .map(book_row)
        .collect()
}

fn book_row(document: &Document) -> VatBookRow {
    let mut row = VatBookRow::new(document);
    let sign = if document.kind.is_sale() {
        Decimal::NEGATIVE_ONE
    } else {
        Decimal::ONE
    };

    for line in &document.lines {
        if !line.affects_tax_report() {
            continue;
        }
        let amount = sign * line.balance();
        row.total += amount;

        if let Some(rate) = line.vat {
            match rate {
                VatRate::Percent2_5 => row.vat_2_5 += amount,
                VatRate::Percent5 => row.vat_5 += amount,
                VatRate::Percent10_5 => row.vat_10_5 += amount,
                VatRate::Percent21 => row.vat_21 += amount,
                VatRate::Percent27 => row.vat_27 += amount,
                VatRate::NotTaxed | VatRate::Exempt | VatRate::Zero => {}
            }
        } else if !line.vat_base.is_empty() {
            // The taxed column counts a base line once even when it backs
            // several rates; the per-rate base columns each get the full
            // line amount.
            if line.vat_base.iter().any(VatRate::is_taxed) {
                row.taxed += amount;
            } else {
                row.not_taxed += amount;
            }
            for rate in &line.vat_base {
                match rate {
                    VatRate::Percent2_5 => row.base_2_5 += amount,
                    VatRate::Percent5 => row.base_5 += amount,
                    VatRate::Percent10_5 => row.base_10_5 += amount,
                    VatRate::Percent21 => row.base_21 += amount,
                    VatRate::Percent27 => row.base_27 += amount,
                    VatRate::NotTaxed | VatRate::Exempt | VatRate::Zero => {}
                }
            }
        } else if let Some(tribute) = line.tribute {
            match tribute {
                Tribute::VatPerception => row.vat_perception += amount,
                Tribute::GrossIncomePerception => row.gross_income_perception += amount,
                Tribute::Municipal | Tribute::MunicipalPerception => {
                    row.municipal_taxes += amount
                }
                Tribute::EarningsPerception => row.earnings_perception += amount,
                Tribute::Provincial | Tribute::Internal | Tribute::Other => {
                    row.other_taxes += amount
                }
                // National taxes (01) feed the total only; the book has
                // no column for them.
                Tribute::National => {}
            }
        }
    }

    row
}
