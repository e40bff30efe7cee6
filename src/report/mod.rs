//! The Argentine VAT book (libro IVA): document selection by effective
//! date and the bucketed report rows.

mod book;
mod query;

pub use book::{VatBookRow, vat_book};
pub use query::{BookScope, DateRange, effective_date, select_documents};
