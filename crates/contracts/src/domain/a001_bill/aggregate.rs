use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;
use crate::enums::ExpenseType;

// ============================================================================
// ID Type
// ============================================================================

/// Bill identifier. Allocated by the backend when the receipt is uploaded,
/// so it is kept opaque rather than forced into a UUID shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(String);

impl BillId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh random identifier, used by in-memory stores.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for BillId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty bill id".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle of a bill. Every new bill starts out `Pending`; the admin side
/// moves it to `Accepted` or `Refused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An expense bill. Field names on the wire follow the backend contract
/// (`type`, `fileUrl`, `fileName`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,

    /// Submitting user, taken from session identity, never user-editable.
    pub email: String,

    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    /// Free-text expense label.
    pub name: String,

    pub amount: f64,

    pub date: NaiveDate,

    pub vat: Option<String>,

    pub pct: u32,

    pub commentary: Option<String>,

    /// Set only after a successful receipt upload.
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,

    #[serde(rename = "fileName")]
    pub file_name: Option<String>,

    pub status: BillStatus,
}

impl Bill {
    /// True once the receipt handle from the upload step has been attached.
    pub fn has_receipt(&self) -> bool {
        self.file_url.is_some() && self.file_name.is_some()
    }
}
