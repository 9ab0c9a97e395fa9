use std::collections::HashMap;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    data::{
        datasources::{
            bills_json_datasource::{BillsJsonDatasource as _, BillsJsonDatasourceImpl},
            bills_store::BillsStore,
        },
        models::{
            bill_update_model::BillUpdateModel,
            proof_upload_model::{CreatedProofModel, ProofUploadModel},
            raw_bill_model::RawBillModel,
        },
    },
    errors::{BilledError, StoreError},
};

/// Store kept entirely in memory, seeded from bill payloads. Every call can
/// be made to fail with a fixed error to exercise error paths.
pub struct InMemoryBillsStore {
    state: Mutex<State>,
    failure: Option<StoreError>,
}

#[derive(Default)]
struct State {
    bills: Vec<RawBillModel>,
    /// Uploaded proofs, by key, waiting for their bill to be posted. A user
    /// has at most one: a new upload replaces the one they abandoned.
    pending_uploads: HashMap<String, ProofUploadModel>,
    next_key: u64,
}

impl InMemoryBillsStore {
    pub fn new(bills: Vec<RawBillModel>) -> Self {
        Self {
            state: Mutex::new(State {
                bills,
                ..Default::default()
            }),
            failure: None,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, BilledError> {
        Ok(Self::new(BillsJsonDatasourceImpl::new().from_string(s)?))
    }

    pub async fn from_json_file<P>(path: P) -> Result<Self, BilledError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(Self::new(
            BillsJsonDatasourceImpl::new().from_file(path).await?,
        ))
    }

    /// Makes every subsequent call fail with `error`.
    pub fn failing_with(mut self, error: StoreError) -> Self {
        self.failure = Some(error);
        self
    }

    pub async fn bills(&self) -> Vec<RawBillModel> {
        self.state.lock().await.bills.clone()
    }

    pub async fn pending_uploads(&self) -> usize {
        self.state.lock().await.pending_uploads.len()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillsStore for InMemoryBillsStore {
    async fn list(&self) -> Result<Vec<RawBillModel>, StoreError> {
        self.check_failure()?;
        Ok(self.state.lock().await.bills.clone())
    }

    async fn create(&self, upload: ProofUploadModel) -> Result<CreatedProofModel, StoreError> {
        self.check_failure()?;
        let mut state = self.state.lock().await;
        state.next_key += 1;
        let key = format!("bill-{:04}", state.next_key);
        let file_url = data_url(&upload.file_name, &upload.bytes);
        let before = state.pending_uploads.len();
        state.pending_uploads.retain(|_, u| u.email != upload.email);
        debug!(
            key = %key,
            file_name = %upload.file_name,
            pruned = before - state.pending_uploads.len(),
            "stored proof upload"
        );
        state.pending_uploads.insert(key.clone(), upload);
        Ok(CreatedProofModel { file_url, key })
    }

    async fn update(
        &self,
        selector: &str,
        data: BillUpdateModel,
    ) -> Result<RawBillModel, StoreError> {
        self.check_failure()?;
        let mut state = self.state.lock().await;
        let was_pending = state.pending_uploads.remove(selector).is_some();
        let existing = state
            .bills
            .iter()
            .position(|b| b.id.as_deref() == Some(selector));
        if !was_pending && existing.is_none() {
            return Err(StoreError::UnknownBill {
                selector: selector.to_string(),
            });
        }

        let bill = RawBillModel {
            id: Some(selector.to_string()),
            date: Some(data.date),
            status: Some(data.status),
            expense_type: Some(data.expense_type),
            name: Some(data.name),
            amount: Some(Value::from(data.amount)),
            vat: Some(Value::from(data.vat)),
            pct: Some(Value::from(data.pct)),
            commentary: Some(data.commentary),
            file_url: Some(data.file_url),
            file_name: Some(data.file_name),
            email: Some(data.email),
        };
        match existing {
            Some(i) => state.bills[i] = bill.clone(),
            None => state.bills.push(bill.clone()),
        }
        Ok(bill)
    }
}

fn data_url(file_name: &str, bytes: &[u8]) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
