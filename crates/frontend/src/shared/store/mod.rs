//! Store client: the narrow interface the pages use to talk to the bills
//! backend. `HttpStore` is the real transport; `MemoryStore` substitutes for
//! it in tests and local demos. Pages receive the store through context and
//! never construct one themselves.

pub mod http;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a001_bill::Bill;
use leptos::prelude::use_context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpStore;
pub use memory::MemoryStore;

/// Upstream failures. HTTP status failures display as `Erreur {code}` and the
/// text is surfaced to the error banner unmodified, so users and operators
/// can correlate it with server logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Erreur {0}")]
    Status(u16),
    #[error("Erreur réseau: {0}")]
    Transport(String),
    #[error("Réponse illisible: {0}")]
    Decode(String),
}

/// Receipt upload payload. `file` is the browser file object; it is `None`
/// only in native fakes, which never read the bytes.
pub struct ReceiptUpload {
    pub file_name: String,
    pub email: String,
    pub file: Option<web_sys::File>,
}

/// Handle returned by the upload step: the stored file URL plus the key of
/// the bill draft the backend allocated for it. The key becomes the bill id
/// at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

// Futures stay non-Send (they hold JS values on wasm); the store handle
// itself must be Send + Sync so it can live in Leptos context.
#[async_trait(?Send)]
pub trait BillsStore: Send + Sync {
    /// Bills of the connected user.
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError>;

    /// Step one of bill creation: store the receipt, get back the file URL
    /// and the draft key.
    async fn create_file(&self, upload: ReceiptUpload) -> Result<FileHandle, StoreError>;

    /// Step two: persist the completed bill against the draft key.
    async fn update_bill(&self, bill: &Bill) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct StoreContext(pub Arc<dyn BillsStore>);

pub fn use_store() -> Arc<dyn BillsStore> {
    use_context::<StoreContext>()
        .expect("StoreContext not found in component tree")
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_display_verbatim() {
        assert_eq!(StoreError::Status(404).to_string(), "Erreur 404");
        assert_eq!(StoreError::Status(500).to_string(), "Erreur 500");
    }

    #[test]
    fn test_file_handle_wire_shape() {
        let raw = r#"{"fileUrl":"https://localhost:3456/images/test.jpg","key":"1234"}"#;
        let handle: FileHandle = serde_json::from_str(raw).unwrap();
        assert_eq!(handle.file_url, "https://localhost:3456/images/test.jpg");
        assert_eq!(handle.key, "1234");
    }
}
