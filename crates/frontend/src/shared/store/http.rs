//! HTTP-backed store client.
//!
//! JSON endpoints go through gloo-net; the receipt upload is multipart, built
//! with `FormData` and sent through the raw fetch API so the browser sets the
//! multipart boundary itself.

use contracts::domain::a001_bill::Bill;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use super::{BillsStore, FileHandle, ReceiptUpload, StoreError};
use crate::shared::api_utils::api_url;

#[derive(Default)]
pub struct HttpStore;

impl HttpStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait(?Send)]
impl BillsStore for HttpStore {
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let response = Request::get(&api_url("/bills"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(StoreError::Status(response.status()));
        }

        response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create_file(&self, upload: ReceiptUpload) -> Result<FileHandle, StoreError> {
        use wasm_bindgen::JsCast;
        use web_sys::{FormData, Request as WebRequest, RequestInit, RequestMode, Response};

        let file = upload
            .file
            .ok_or_else(|| StoreError::Transport("Aucun fichier sélectionné".to_string()))?;

        let form_data = FormData::new().map_err(|e| StoreError::Transport(format!("{e:?}")))?;
        form_data
            .append_with_blob_and_filename("file", &file, &upload.file_name)
            .map_err(|e| StoreError::Transport(format!("{e:?}")))?;
        form_data
            .append_with_str("email", &upload.email)
            .map_err(|e| StoreError::Transport(format!("{e:?}")))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form_data);

        let request = WebRequest::new_with_str_and_init(&api_url("/bills"), &opts)
            .map_err(|e| StoreError::Transport(format!("{e:?}")))?;

        let window = web_sys::window()
            .ok_or_else(|| StoreError::Transport("no window".to_string()))?;
        let resp_value =
            wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
                .await
                .map_err(|e| StoreError::Transport(format!("{e:?}")))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| StoreError::Transport(format!("{e:?}")))?;

        if !resp.ok() {
            return Err(StoreError::Status(resp.status()));
        }

        let text = wasm_bindgen_futures::JsFuture::from(
            resp.text()
                .map_err(|e| StoreError::Transport(format!("{e:?}")))?,
        )
        .await
        .map_err(|e| StoreError::Transport(format!("{e:?}")))?;
        let text: String = text
            .as_string()
            .ok_or_else(|| StoreError::Decode("bad text".to_string()))?;
        serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update_bill(&self, bill: &Bill) -> Result<(), StoreError> {
        let response = Request::patch(&api_url(&format!("/bills/{}", bill.id.as_string())))
            .json(bill)
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(StoreError::Status(response.status()));
        }

        Ok(())
    }
}
