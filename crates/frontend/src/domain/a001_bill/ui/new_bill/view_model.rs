use std::sync::Arc;

use contracts::domain::a001_bill::{Bill, BillFormSnapshot};
use contracts::shared::receipt;
use contracts::system::session::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, AttachedReceipt};
use crate::routes::{Navigation, ROUTE_BILLS};
use crate::shared::store::BillsStore;

/// ViewModel for the new-bill form.
///
/// Draft lifecycle: empty form, then a receipt attached by a successful
/// upload, then either submitted (navigates away) or failed (error banner,
/// draft kept editable). On submit failure no signal other than `error` is
/// touched, so the user can retry as-is; on upload failure the receipt slot
/// is emptied as well.
#[derive(Clone)]
pub struct NewBillViewModel {
    pub form: RwSignal<BillFormSnapshot>,
    pub receipt: RwSignal<Option<AttachedReceipt>>,
    pub error: RwSignal<Option<String>>,
    store: Arc<dyn BillsStore>,
    user: SessionUser,
    navigation: Navigation,
}

impl NewBillViewModel {
    pub fn new(store: Arc<dyn BillsStore>, user: SessionUser, navigation: Navigation) -> Self {
        Self {
            form: RwSignal::new(BillFormSnapshot::default()),
            receipt: RwSignal::new(None),
            error: RwSignal::new(None),
            store,
            user,
            navigation,
        }
    }

    /// File-input change. Returns false when the file is refused so the view
    /// can clear the input; an accepted file starts the upload.
    pub fn change_file_command(&self, file_name: String, file: Option<web_sys::File>) -> bool {
        if !receipt::is_supported(&file_name) {
            log::warn!("receipt refused by extension: {file_name}");
            self.receipt.set(None);
            self.error.set(Some(model::refusal_message(&file_name)));
            return false;
        }

        // The previous handle must not survive a replacement: while the new
        // upload is in flight (or after it fails) the submit guard has to
        // see an empty slot, or it would persist the old receipt.
        self.receipt.set(None);
        self.error.set(None);
        let vm = self.clone();
        spawn_local(async move {
            let result =
                model::upload_receipt(vm.store.as_ref(), file_name, vm.user.email.clone(), file)
                    .await;
            vm.apply_upload_result(result);
        });
        true
    }

    /// Form submit. Refused locally while no upload has resolved, so a bill
    /// can never be persisted without its `fileUrl`.
    pub fn submit_command(&self) {
        let Some(attached) = self.receipt.get_untracked() else {
            self.error.set(Some(model::missing_receipt_message()));
            return;
        };

        let snapshot = self.form.get_untracked();
        let vm = self.clone();
        spawn_local(async move {
            let result =
                model::submit_bill(vm.store.as_ref(), &snapshot, &vm.user, &attached).await;
            vm.apply_submit_result(result);
        });
    }

    /// A resolved upload replaces whatever receipt was attached before; a
    /// failed one leaves the slot empty so the submit guard stays active.
    pub fn apply_upload_result(&self, result: Result<AttachedReceipt, String>) {
        match result {
            Ok(attached) => self.receipt.set(Some(attached)),
            Err(e) => {
                log::error!("receipt upload failed: {e}");
                self.receipt.set(None);
                self.error.set(Some(e));
            }
        }
    }

    /// Success leaves the form behind for the bills list; failure surfaces
    /// the text and keeps the draft.
    pub fn apply_submit_result(&self, result: Result<Bill, String>) {
        match result {
            Ok(_) => self.navigation.navigate(ROUTE_BILLS),
            Err(e) => {
                log::error!("bill submission failed: {e}");
                self.error.set(Some(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::{FileHandle, MemoryStore};

    fn vm() -> NewBillViewModel {
        NewBillViewModel::new(
            Arc::new(MemoryStore::new()),
            SessionUser::employee("a@a"),
            Navigation::new(),
        )
    }

    fn attached(name: &str) -> AttachedReceipt {
        AttachedReceipt {
            file_name: name.to_string(),
            handle: FileHandle {
                file_url: format!("https://localhost:3456/images/{name}"),
                key: "1234".to_string(),
            },
        }
    }

    #[test]
    fn test_refused_file_clears_attachment() {
        let vm = vm();
        vm.receipt.set(Some(attached("old.png")));

        let accepted = vm.change_file_command("capture.gif".to_string(), None);

        assert!(!accepted);
        assert_eq!(vm.receipt.get_untracked(), None);
        let error = vm.error.get_untracked().unwrap_or_default();
        assert!(error.contains("capture.gif"));
    }

    #[test]
    fn test_second_upload_replaces_first() {
        let vm = vm();
        vm.apply_upload_result(Ok(attached("first.png")));
        vm.apply_upload_result(Ok(attached("second.jpg")));

        let current = vm.receipt.get_untracked().unwrap();
        assert_eq!(current.file_name, "second.jpg");
    }

    #[test]
    fn test_failed_replacement_clears_attachment() {
        let vm = vm();
        vm.apply_upload_result(Ok(attached("first.png")));
        vm.apply_upload_result(Err("Erreur 500".to_string()));

        // The first receipt must not survive the failed replacement, and the
        // submit guard has to refuse until a new upload resolves.
        assert_eq!(vm.receipt.get_untracked(), None);
        assert_eq!(vm.error.get_untracked().as_deref(), Some("Erreur 500"));

        vm.submit_command();
        assert_eq!(
            vm.error.get_untracked(),
            Some(model::missing_receipt_message())
        );
    }

    #[test]
    fn test_submit_without_receipt_refused_locally() {
        let vm = vm();
        vm.submit_command();
        assert_eq!(
            vm.error.get_untracked(),
            Some(model::missing_receipt_message())
        );
    }

    #[test]
    fn test_failed_submit_keeps_draft_editable() {
        let vm = vm();
        vm.form
            .update(|f| f.name = "Vol Paris Londres".to_string());
        vm.apply_upload_result(Ok(attached("justificatif.png")));

        vm.apply_submit_result(Err("Erreur 404".to_string()));

        assert_eq!(vm.error.get_untracked().as_deref(), Some("Erreur 404"));
        assert_eq!(vm.form.get_untracked().name, "Vol Paris Londres");
        assert!(vm.receipt.get_untracked().is_some());
    }
}
