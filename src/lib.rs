//! Argentine VAT credit deferral (cómputo diferido del crédito fiscal).
//!
//! When a vendor bill arrives after the tax period of its invoice date has
//! already been locked, Argentine practice keeps the bill at its original
//! date but defers the VAT credit to the first open period. This crate
//! implements that rule end to end:
//!
//! - a **VAT computation date** for Argentine purchase documents: the
//!   invoice date when no lock is violated, otherwise one calendar month
//!   after the most restrictive violated lock date;
//! - **holding-account rerouting** at posting time: VAT credit lines of a
//!   deferred bill move from the definitive credit account to a holding
//!   account;
//! - an **adjustment entry** (journal `AJIVA`) dated at the computation
//!   date that transfers the credit from the holding account into the
//!   definitive account, linked both ways with the source invoice;
//! - a **VAT book** that reports deferred purchases under their
//!   computation date instead of their accounting date.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use computo::{
//!     Account, AccountKind, CompanyConfig, DocumentBuilder, DocumentKind, Journal, JournalKind,
//!     LineBuilder, VatRate,
//! };
//! use computo::posting::Ledger;
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), computo::ComputoError> {
//! let mut config = CompanyConfig::new("Vikingo SRL");
//! config.locks.tax = NaiveDate::from_ymd_opt(2024, 3, 31);
//! config.vat_credit_account = Some("1.1.05.01".into());
//! config.vat_credit_holding_account = Some("1.1.05.02".into());
//!
//! let mut ledger = Ledger::new(config);
//! ledger.add_journal(Journal::new("COMPRAS", "Compras", JournalKind::Purchase));
//! ledger.add_journal(Journal::new("AJIVA", "Ajuste IVA Crédito", JournalKind::General));
//! ledger.add_account(Account::new("1.1.05.01", "IVA Crédito Fiscal", AccountKind::CurrentAsset));
//! ledger.add_account(Account::new("1.1.05.02", "IVA Crédito Diferido", AccountKind::CurrentAsset));
//! ledger.add_account(Account::new("5.1.01", "Mercaderías", AccountKind::Expense));
//! ledger.add_account(Account::new("2.1.01", "Proveedores", AccountKind::Payable));
//!
//! // A bill dated inside the locked tax period.
//! let bill = DocumentBuilder::new(
//!     "FA-A-00001",
//!     DocumentKind::PurchaseInvoice,
//!     "COMPRAS",
//!     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
//! )
//! .line(
//!     LineBuilder::new("5.1.01", "Mercaderías 21%")
//!         .debit(dec!(1000))
//!         .vat_base([VatRate::Percent21])
//!         .build(),
//! )
//! .line(
//!     LineBuilder::new("1.1.05.01", "IVA 21%")
//!         .debit(dec!(210))
//!         .vat(VatRate::Percent21)
//!         .build(),
//! )
//! .line(LineBuilder::new("2.1.01", "Proveedor SA").credit(dec!(1210)).build())
//! .build();
//!
//! let adjustment = ledger.post(bill)?;
//! assert_eq!(adjustment.as_deref(), Some("AJIVA/2024/0001"));
//!
//! // The credit was deferred one month past the lock.
//! let bill = ledger.document("FA-A-00001").unwrap();
//! assert_eq!(
//!     bill.vat_computation_date,
//!     NaiveDate::from_ymd_opt(2024, 4, 30),
//! );
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod deferral;
pub mod posting;
pub mod report;

pub use crate::core::*;
