use contracts::domain::a001_bill::Bill;
use contracts::domain::common::AggregateId;

use crate::shared::date_utils::format_date_short;
use crate::shared::store::StoreError;

#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
}

impl From<Bill> for BillRow {
    fn from(b: Bill) -> Self {
        Self {
            id: b.id.as_string(),
            expense_type: b.expense_type.label().to_string(),
            name: b.name,
            date: format_date_short(b.date),
            amount: format!("{} €", b.amount),
            status: b.status.label().to_string(),
            file_url: b.file_url,
        }
    }
}

/// Bills list page state. The error slot holds the upstream failure text
/// verbatim; the view renders it into the error banner unmodified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BillsListState {
    pub rows: Vec<BillRow>,
    pub error: Option<String>,
}

impl BillsListState {
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Bill>, StoreError>) {
        match result {
            Ok(bills) => {
                self.rows = bills.into_iter().map(Into::into).collect();
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use contracts::domain::a001_bill::{BillId, BillStatus};
    use contracts::enums::ExpenseType;

    use super::*;

    fn bill() -> Bill {
        Bill {
            id: BillId::new("47qAXb6fIm2zOKkLzMro"),
            email: "a@a".to_string(),
            expense_type: ExpenseType::HotelEtLogement,
            name: "encore".to_string(),
            amount: 400.0,
            date: NaiveDate::from_ymd_opt(2004, 4, 4).unwrap(),
            vat: Some("80".to_string()),
            pct: 20,
            commentary: None,
            file_url: Some("https://test.storage.tld/f-1.jpg".to_string()),
            file_name: Some("f-1.jpg".to_string()),
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn test_fetch_success_fills_rows() {
        let mut state = BillsListState::default();
        state.apply_fetch_result(Ok(vec![bill()]));
        assert_eq!(state.error, None);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].date, "4 Avr. 04");
        assert_eq!(state.rows[0].status, "pending");
    }

    #[test]
    fn test_fetch_404_surfaces_verbatim() {
        let mut state = BillsListState::default();
        state.apply_fetch_result(Err(StoreError::Status(404)));
        assert_eq!(state.error.as_deref(), Some("Erreur 404"));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_fetch_500_surfaces_verbatim() {
        let mut state = BillsListState::default();
        state.apply_fetch_result(Err(StoreError::Status(500)));
        assert_eq!(state.error.as_deref(), Some("Erreur 500"));
    }

    #[test]
    fn test_recovery_clears_error() {
        let mut state = BillsListState::default();
        state.apply_fetch_result(Err(StoreError::Status(500)));
        state.apply_fetch_result(Ok(vec![bill()]));
        assert_eq!(state.error, None);
        assert_eq!(state.rows.len(), 1);
    }
}
