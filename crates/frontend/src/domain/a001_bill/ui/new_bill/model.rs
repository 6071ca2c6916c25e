//! New Bill - Model (store-facing logic)
//!
//! Bill creation is a two-step flow: uploading the receipt allocates a draft
//! on the backend and returns `{ fileUrl, key }`; submitting the form then
//! persists the completed bill against that key. Errors come back as their
//! display text, surfaced to the banner unmodified.

use contracts::domain::a001_bill::{Bill, BillFormSnapshot, BillId};
use contracts::shared::receipt;
use contracts::system::session::SessionUser;

use crate::shared::store::{BillsStore, FileHandle, ReceiptUpload};

/// Receipt captured by a successful upload. A later upload replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachedReceipt {
    pub file_name: String,
    pub handle: FileHandle,
}

pub fn refusal_message(file_name: &str) -> String {
    format!(
        "Fichier refusé: {}. Extensions acceptées: jpg, jpeg, png.",
        file_name
    )
}

pub fn missing_receipt_message() -> String {
    "Ajoutez un justificatif (jpg, jpeg ou png) avant d'envoyer la note.".to_string()
}

/// Upload the receipt. The declared file name is checked first; an
/// unsupported extension is refused before anything reaches the store.
pub async fn upload_receipt(
    store: &dyn BillsStore,
    file_name: String,
    email: String,
    file: Option<web_sys::File>,
) -> Result<AttachedReceipt, String> {
    if !receipt::is_supported(&file_name) {
        return Err(refusal_message(&file_name));
    }

    let handle = store
        .create_file(ReceiptUpload {
            file_name: file_name.clone(),
            email,
            file,
        })
        .await
        .map_err(|e| e.to_string())?;

    Ok(AttachedReceipt { file_name, handle })
}

/// Validate the snapshot, assemble the pending bill and persist it.
pub async fn submit_bill(
    store: &dyn BillsStore,
    snapshot: &BillFormSnapshot,
    user: &SessionUser,
    receipt: &AttachedReceipt,
) -> Result<Bill, String> {
    let valid = snapshot.validate().map_err(|e| e.to_string())?;

    let bill = valid.into_bill(
        BillId::new(&receipt.handle.key),
        user.email.clone(),
        receipt.handle.file_url.clone(),
        receipt.file_name.clone(),
    );

    store.update_bill(&bill).await.map_err(|e| e.to_string())?;
    Ok(bill)
}

#[cfg(test)]
mod tests {
    use contracts::domain::a001_bill::BillStatus;
    use contracts::enums::ExpenseType;

    use super::*;
    use crate::shared::store::MemoryStore;

    fn filled_snapshot() -> BillFormSnapshot {
        BillFormSnapshot {
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: "348".to_string(),
            date: "2004-04-04".to_string(),
            vat: "70".to_string(),
            pct: "20".to_string(),
            commentary: String::new(),
        }
    }

    async fn uploaded(store: &MemoryStore, file_name: &str) -> AttachedReceipt {
        upload_receipt(store, file_name.to_string(), "a@a".to_string(), None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_png_upload_accepted() {
        let store = MemoryStore::new();
        let receipt = uploaded(&store, "testFile.png").await;
        assert_eq!(receipt.file_name, "testFile.png");
        assert!(!receipt.handle.key.is_empty());
    }

    #[tokio::test]
    async fn test_extension_checked_case_insensitively() {
        let store = MemoryStore::new();
        for name in ["scan.JPG", "scan.Jpeg", "SCAN.PNG"] {
            assert!(
                upload_receipt(&store, name.to_string(), "a@a".to_string(), None)
                    .await
                    .is_ok()
            );
        }
    }

    #[tokio::test]
    async fn test_unsupported_extension_never_reaches_store() {
        let store = MemoryStore::new();
        // Armed failure stays armed when the refusal happens locally.
        store.fail_next_with(500);
        let err = upload_receipt(&store, "testFile.gif".to_string(), "a@a".to_string(), None)
            .await
            .unwrap_err();
        assert_eq!(err, refusal_message("testFile.gif"));
        assert!(store.failure_armed());
    }

    #[tokio::test]
    async fn test_name_governs_not_mime() {
        // The fixture named .png is accepted even when its content is a GIF;
        // only the declared name is consulted.
        let store = MemoryStore::new();
        assert!(
            upload_receipt(&store, "testFile.png".to_string(), "a@a".to_string(), None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_upload_failure_surfaces_status() {
        let store = MemoryStore::new();
        store.fail_next_with(500);
        let err = upload_receipt(&store, "testFile.png".to_string(), "a@a".to_string(), None)
            .await
            .unwrap_err();
        assert_eq!(err, "Erreur 500");
    }

    #[tokio::test]
    async fn test_submit_persists_pending_bill_with_session_email() {
        let store = MemoryStore::new();
        let receipt = uploaded(&store, "justificatif.jpg").await;
        let user = SessionUser::employee("a@a");

        let bill = submit_bill(&store, &filled_snapshot(), &user, &receipt)
            .await
            .unwrap();

        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.email, "a@a");
        assert_eq!(bill.expense_type, ExpenseType::Transports);
        assert_eq!(bill.file_name.as_deref(), Some("justificatif.jpg"));
        assert_eq!(bill.file_url.as_deref(), Some(receipt.handle.file_url.as_str()));

        let stored = store.bills();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], bill);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_snapshot_before_store() {
        let store = MemoryStore::new();
        let receipt = uploaded(&store, "justificatif.jpg").await;
        store.fail_next_with(500);

        let mut snapshot = filled_snapshot();
        snapshot.date = "not-a-date".to_string();
        let err = submit_bill(&store, &snapshot, &SessionUser::employee("a@a"), &receipt)
            .await
            .unwrap_err();

        assert!(err.contains("Date invalide"));
        assert!(store.failure_armed());
        assert!(store.bills().is_empty());
    }

    #[tokio::test]
    async fn test_submit_404_surfaces_verbatim() {
        let store = MemoryStore::new();
        let receipt = uploaded(&store, "justificatif.jpg").await;
        store.fail_next_with(404);

        let err = submit_bill(&store, &filled_snapshot(), &SessionUser::employee("a@a"), &receipt)
            .await
            .unwrap_err();

        assert_eq!(err, "Erreur 404");
        assert!(store.bills().is_empty());
    }

    #[tokio::test]
    async fn test_submit_500_surfaces_verbatim() {
        let store = MemoryStore::new();
        let receipt = uploaded(&store, "justificatif.jpg").await;
        store.fail_next_with(500);

        let err = submit_bill(&store, &filled_snapshot(), &SessionUser::employee("a@a"), &receipt)
            .await
            .unwrap_err();

        assert_eq!(err, "Erreur 500");
    }
}
