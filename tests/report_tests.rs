use chrono::NaiveDate;
use computo::posting::{ADJUSTMENT_JOURNAL_CODE, Ledger};
use computo::report::{BookScope, DateRange, vat_book};
use computo::{
    Account, AccountKind, CompanyConfig, DocumentBuilder, DocumentKind, Journal, JournalKind,
    LineBuilder, LockDates, Tribute, VatRate,
};
use rust_decimal_macros::dec;

const VAT_CREDIT: &str = "1.1.05.01";
const VAT_HOLDING: &str = "1.1.05.02";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ledger() -> Ledger {
    let mut config = CompanyConfig::new("Vikingo SRL");
    config.locks = LockDates {
        tax: Some(date(2024, 3, 31)),
        ..Default::default()
    };
    config.vat_credit_account = Some(VAT_CREDIT.into());
    config.vat_credit_holding_account = Some(VAT_HOLDING.into());

    let mut ledger = Ledger::new(config);
    ledger.add_journal(Journal::new("COMPRAS", "Compras", JournalKind::Purchase));
    ledger.add_journal(Journal::new("VENTAS", "Ventas", JournalKind::Sale));
    ledger.add_journal(Journal::new(
        ADJUSTMENT_JOURNAL_CODE,
        "Ajuste IVA Crédito Fiscal",
        JournalKind::General,
    ));
    for (code, kind) in [
        (VAT_CREDIT, AccountKind::CurrentAsset),
        (VAT_HOLDING, AccountKind::CurrentAsset),
        ("5.1.01", AccountKind::Expense),
        ("2.1.01", AccountKind::Payable),
        ("2.1.03", AccountKind::CurrentLiability),
        ("2.1.05", AccountKind::CurrentLiability),
        ("1.1.03", AccountKind::Receivable),
        ("4.1.01", AccountKind::Income),
    ] {
        ledger.add_account(Account::new(code, code, kind));
    }
    ledger
}

fn post_deferred_bill(ledger: &mut Ledger, number: &str) {
    let bill = DocumentBuilder::new(
        number,
        DocumentKind::PurchaseInvoice,
        "COMPRAS",
        date(2024, 2, 10),
    )
    .partner("Proveedor SA")
    .line(
        LineBuilder::new("5.1.01", "Mercaderías 21%")
            .debit(dec!(1000))
            .vat_base([VatRate::Percent21])
            .build(),
    )
    .line(
        LineBuilder::new(VAT_CREDIT, "IVA 21%")
            .debit(dec!(210))
            .vat(VatRate::Percent21)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.01", "Proveedor SA")
            .credit(dec!(1210))
            .build(),
    )
    .build();
    ledger.post(bill).unwrap();
}

#[test]
fn deferred_bill_leaves_the_invoice_period() {
    let mut ledger = ledger();
    post_deferred_bill(&mut ledger, "FA-A-00001");

    let february = DateRange::new(date(2024, 2, 1), date(2024, 2, 29));
    assert!(vat_book(&ledger, BookScope::Purchases, &february, false).is_empty());
}

#[test]
fn deferred_bill_enters_the_computation_period() {
    let mut ledger = ledger();
    post_deferred_bill(&mut ledger, "FA-A-00001");

    let april = DateRange::new(date(2024, 4, 1), date(2024, 4, 30));
    let rows = vat_book(&ledger, BookScope::Purchases, &april, false);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number, "FA-A-00001");
    assert_eq!(rows[0].date, date(2024, 4, 30));
    assert_eq!(rows[0].taxed, dec!(1000));
    assert_eq!(rows[0].vat_21, dec!(210));
    assert_eq!(rows[0].total, dec!(1210));
}

#[test]
fn adjustment_entries_never_appear_in_the_book() {
    let mut ledger = ledger();
    post_deferred_bill(&mut ledger, "FA-A-00001");

    let year = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
    let rows = vat_book(&ledger, BookScope::All, &year, false);
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|r| !r.number.starts_with("AJIVA")));
}

#[test]
fn combined_scope_mixes_both_sides() {
    let mut ledger = ledger();
    post_deferred_bill(&mut ledger, "FA-A-00001");

    let sale = DocumentBuilder::new(
        "FV-A-00001",
        DocumentKind::SaleInvoice,
        "VENTAS",
        date(2024, 5, 10),
    )
    .line(
        LineBuilder::new("4.1.01", "Ventas 21%")
            .credit(dec!(2000))
            .vat_base([VatRate::Percent21])
            .build(),
    )
    .line(
        LineBuilder::new("2.1.03", "IVA 21%")
            .credit(dec!(420))
            .vat(VatRate::Percent21)
            .build(),
    )
    .line(
        LineBuilder::new("1.1.03", "Cliente")
            .debit(dec!(2420))
            .build(),
    )
    .build();
    ledger.post(sale).unwrap();

    let year = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
    let rows = vat_book(&ledger, BookScope::All, &year, false);
    let numbers: Vec<&str> = rows.iter().map(|r| r.number.as_str()).collect();
    // Ordered by effective date: the deferred bill (2024-04-30) first.
    assert_eq!(numbers, ["FA-A-00001", "FV-A-00001"]);
    assert_eq!(rows[1].taxed, dec!(2000));
    assert_eq!(rows[1].vat_21, dec!(420));
}

#[test]
fn tribute_columns_split_by_afip_code() {
    let mut ledger = ledger();
    let bill = DocumentBuilder::new(
        "FA-B-00001",
        DocumentKind::PurchaseInvoice,
        "COMPRAS",
        date(2024, 5, 10),
    )
    .line(
        LineBuilder::new("5.1.01", "Mercaderías 10,5%")
            .debit(dec!(2000))
            .vat_base([VatRate::Percent10_5])
            .build(),
    )
    .line(
        LineBuilder::new(VAT_CREDIT, "IVA 10,5%")
            .debit(dec!(210))
            .vat(VatRate::Percent10_5)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.05", "Percepción IVA")
            .debit(dec!(50))
            .tribute(Tribute::VatPerception)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.05", "Percepción IIBB CABA")
            .debit(dec!(40))
            .tribute(Tribute::GrossIncomePerception)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.05", "Tasa municipal")
            .debit(dec!(30))
            .tribute(Tribute::MunicipalPerception)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.05", "Percepción ganancias")
            .debit(dec!(20))
            .tribute(Tribute::EarningsPerception)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.05", "Impuestos internos")
            .debit(dec!(10))
            .tribute(Tribute::Internal)
            .build(),
    )
    .line(
        LineBuilder::new("2.1.01", "Proveedor SA")
            .credit(dec!(2360))
            .build(),
    )
    .build();
    ledger.post(bill).unwrap();

    let may = DateRange::new(date(2024, 5, 1), date(2024, 5, 31));
    let rows = vat_book(&ledger, BookScope::Purchases, &may, false);
    let row = &rows[0];
    assert_eq!(row.vat_10_5, dec!(210));
    assert_eq!(row.vat_perception, dec!(50));
    assert_eq!(row.gross_income_perception, dec!(40));
    assert_eq!(row.municipal_taxes, dec!(30));
    assert_eq!(row.earnings_perception, dec!(20));
    assert_eq!(row.other_taxes, dec!(10));
    assert_eq!(row.total, dec!(2360));
    assert_eq!(row.vat_total(), dec!(210));
}

#[test]
fn book_rows_serialize_with_string_decimals() {
    let mut ledger = ledger();
    post_deferred_bill(&mut ledger, "FA-A-00001");

    let april = DateRange::new(date(2024, 4, 1), date(2024, 4, 30));
    let rows = vat_book(&ledger, BookScope::Purchases, &april, false);
    let json = serde_json::to_value(&rows[0]).unwrap();

    assert_eq!(json["date"], "2024-04-30");
    assert_eq!(json["number"], "FA-A-00001");
    assert_eq!(json["taxed"], "1000");
    assert_eq!(json["vat_21"], "210");
    assert_eq!(json["total"], "1210");
}

#[test]
fn drafts_only_appear_on_request() {
    let mut ledger = ledger();
    let draft = DocumentBuilder::new(
        "FA-D-00001",
        DocumentKind::PurchaseInvoice,
        "COMPRAS",
        date(2024, 5, 10),
    )
    .line(
        LineBuilder::new("5.1.01", "Borrador")
            .debit(dec!(100))
            .vat_base([VatRate::Percent21])
            .build(),
    )
    .line(
        LineBuilder::new("2.1.01", "Proveedor SA")
            .credit(dec!(100))
            .build(),
    )
    .build();
    ledger.save_draft(draft).unwrap();

    let may = DateRange::new(date(2024, 5, 1), date(2024, 5, 31));
    assert!(vat_book(&ledger, BookScope::Purchases, &may, false).is_empty());

    let provisional = vat_book(&ledger, BookScope::Purchases, &may, true);
    assert_eq!(provisional.len(), 1);
    assert_eq!(provisional[0].number, "FA-D-00001");
}
