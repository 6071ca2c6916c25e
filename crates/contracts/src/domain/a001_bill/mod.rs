//! Bill aggregate: an expense record an employee submits for reimbursement.

pub mod aggregate;
pub mod form;

pub use aggregate::{Bill, BillId, BillStatus};
pub use form::{BillFormSnapshot, FormError, ValidBillForm};
