//! Core domain model: documents, journal lines, accounts, journals,
//! lock dates, and company configuration.

mod builder;
mod config;
mod error;
mod locks;
mod types;

pub use builder::{DocumentBuilder, LineBuilder};
pub use config::{CompanyConfig, validate_vat_accounts};
pub use error::{ComputoError, ValidationError};
pub use locks::{LockDates, LockKind, LockScope, LockViolation, format_violations};
pub use types::*;
