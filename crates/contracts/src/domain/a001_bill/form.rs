//! Typed snapshot of the new-bill form.
//!
//! The view layer reads the raw field values out of the DOM once, at submit
//! time, and hands this snapshot to the logic layer. Validation happens here,
//! against the snapshot, so it does not depend on markup structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{Bill, BillId, BillStatus};
use crate::enums::ExpenseType;

/// Raw form values, exactly as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillFormSnapshot {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Sélectionnez un type de dépense")]
    MissingExpenseType,
    #[error("Type de dépense inconnu: {0}")]
    UnknownExpenseType(String),
    #[error("Le nom de la dépense est obligatoire")]
    MissingName,
    #[error("Montant invalide: {0}")]
    InvalidAmount(String),
    #[error("Le montant ne peut pas être négatif")]
    NegativeAmount,
    #[error("Date invalide: {0}")]
    InvalidDate(String),
    #[error("TVA invalide: {0}")]
    InvalidVat(String),
    #[error("Pourcentage invalide: {0}")]
    InvalidPct(String),
    #[error("Le pourcentage doit être compris entre 0 et 100")]
    PctOutOfRange,
}

/// A snapshot that passed validation, with fields in their typed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBillForm {
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub vat: Option<String>,
    pub pct: u32,
    pub commentary: Option<String>,
}

impl BillFormSnapshot {
    /// Check every field, mirroring the native constraints on the markup
    /// (required select, required number inputs, required date).
    pub fn validate(&self) -> Result<ValidBillForm, FormError> {
        let type_label = self.expense_type.trim();
        if type_label.is_empty() {
            return Err(FormError::MissingExpenseType);
        }
        let expense_type = ExpenseType::from_label(type_label)
            .ok_or_else(|| FormError::UnknownExpenseType(type_label.to_string()))?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAmount(self.amount.clone()))?;
        if amount < 0.0 {
            return Err(FormError::NegativeAmount);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.date.clone()))?;

        // VAT is optional but must be numeric when present.
        let vat = match self.vat.trim() {
            "" => None,
            raw => {
                raw.parse::<f64>()
                    .map_err(|_| FormError::InvalidVat(raw.to_string()))?;
                Some(raw.to_string())
            }
        };

        let pct: u32 = self
            .pct
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPct(self.pct.clone()))?;
        if pct > 100 {
            return Err(FormError::PctOutOfRange);
        }

        let commentary = match self.commentary.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(ValidBillForm {
            expense_type,
            name: name.to_string(),
            amount,
            date,
            vat,
            pct,
            commentary,
        })
    }
}

impl ValidBillForm {
    /// Assemble the pending bill: identity comes from the session, the id and
    /// receipt handle from the upload step.
    pub fn into_bill(
        self,
        id: BillId,
        email: String,
        file_url: String,
        file_name: String,
    ) -> Bill {
        Bill {
            id,
            email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: Some(file_url),
            file_name: Some(file_name),
            status: BillStatus::Pending,
        }
    }
}
