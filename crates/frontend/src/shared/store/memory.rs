//! In-memory store fake for tests and local demos.

use std::sync::Mutex;

use contracts::domain::a001_bill::{Bill, BillId};

use super::{BillsStore, FileHandle, ReceiptUpload, StoreError};

/// Fake backend. Records bills, allocates draft keys, and can be armed to
/// fail the next call with a given HTTP status.
#[derive(Default)]
pub struct MemoryStore {
    bills: Mutex<Vec<Bill>>,
    fail_next: Mutex<Option<u16>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            fail_next: Mutex::new(None),
        }
    }

    /// Arm the store so its next call rejects with `Erreur {status}`.
    pub fn fail_next_with(&self, status: u16) {
        *self.fail_next.lock().expect("lock poisoned") = Some(status);
    }

    /// True while an armed failure has not been consumed.
    pub fn failure_armed(&self) -> bool {
        self.fail_next.lock().expect("lock poisoned").is_some()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.lock().expect("lock poisoned").clone()
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        match self.fail_next.lock().expect("lock poisoned").take() {
            Some(status) => Err(StoreError::Status(status)),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl BillsStore for MemoryStore {
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        self.take_failure()?;
        Ok(self.bills())
    }

    async fn create_file(&self, upload: ReceiptUpload) -> Result<FileHandle, StoreError> {
        self.take_failure()?;
        Ok(FileHandle {
            file_url: format!("https://localhost:3456/images/{}", upload.file_name),
            key: BillId::new_v4().value().to_string(),
        })
    }

    async fn update_bill(&self, bill: &Bill) -> Result<(), StoreError> {
        self.take_failure()?;
        let mut bills = self.bills.lock().expect("lock poisoned");
        match bills.iter_mut().find(|b| b.id == bill.id) {
            Some(existing) => *existing = bill.clone(),
            None => bills.push(bill.clone()),
        }
        Ok(())
    }
}
