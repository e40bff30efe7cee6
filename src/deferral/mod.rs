//! Deferral rules: the VAT computation date, per-profile date policies,
//! and the lock checks that enforce them.
//!
//! A purchase invoice may legally be recorded with its original invoice
//! date after the books for that period are locked; its VAT credit must
//! still be reported in an open period. The computation date rule decides
//! which period that is, and the policies keep the platform's generic
//! lock handling from rejecting or silently shifting the invoice date.

mod checks;
mod date;
mod policy;

pub use checks::{check_fiscal_locks, check_tax_locks, partition_by_profile};
pub use date::vat_computation_date;
pub use policy::{DatePolicy, DeferredVatPolicy, PostingProfile, StandardPolicy, classify, policy_for};
