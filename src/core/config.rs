use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::locks::LockDates;
use super::types::{Account, AccountKind};

/// Per-company configuration: lock dates and the two VAT credit account
/// roles used by the deferral mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Company name, used in error messages.
    pub name: String,
    /// Lock dates for this company.
    pub locks: LockDates,
    /// Definitive VAT credit account (IVA Crédito Fiscal). Lines on this
    /// account are rerouted when the invoice falls in a locked period.
    pub vat_credit_account: Option<String>,
    /// Temporary holding account (IVA Crédito Fiscal a Computar) that
    /// parks the credit until the computation date.
    pub vat_credit_holding_account: Option<String>,
}

impl CompanyConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locks: LockDates::default(),
            vat_credit_account: None,
            vat_credit_holding_account: None,
        }
    }
}

/// Validate the VAT account configuration against the chart of accounts.
/// Returns all problems found (not just the first). Skipped while either
/// role is unset — partial configuration only fails at posting time, when
/// a deferred invoice actually needs both accounts.
pub fn validate_vat_accounts(config: &CompanyConfig, chart: &[Account]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let (Some(credit), Some(holding)) = (
        config.vat_credit_account.as_deref(),
        config.vat_credit_holding_account.as_deref(),
    ) else {
        return errors;
    };

    if credit == holding {
        errors.push(ValidationError::new(
            "vat_credit_holding_account",
            "VAT credit accounts must be different",
        ));
    }

    for (field, code) in [
        ("vat_credit_account", credit),
        ("vat_credit_holding_account", holding),
    ] {
        match chart.iter().find(|a| a.code == code) {
            None => errors.push(ValidationError::new(
                field,
                format!("account {code} is not in the chart of accounts"),
            )),
            Some(account) if account.kind != AccountKind::CurrentAsset => {
                errors.push(ValidationError::new(
                    field,
                    format!("account {code} must be of type current assets"),
                ));
            }
            Some(_) => {}
        }
    }

    errors
}
