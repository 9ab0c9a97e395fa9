use async_trait::async_trait;

use crate::{
    data::models::{
        bill_update_model::BillUpdateModel,
        proof_upload_model::{CreatedProofModel, ProofUploadModel},
        raw_bill_model::RawBillModel,
    },
    errors::StoreError,
};

/// Backend client for the `bills` collection. Implementations talk to the
/// real API; `InMemoryBillsStore` stands in for it locally and in tests.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BillsStore: Send + Sync {
    async fn list(&self) -> Result<Vec<RawBillModel>, StoreError>;

    /// Uploads a proof file. The returned key identifies the bill that the
    /// following `update` call fills in.
    async fn create(&self, upload: ProofUploadModel) -> Result<CreatedProofModel, StoreError>;

    async fn update(
        &self,
        selector: &str,
        data: BillUpdateModel,
    ) -> Result<RawBillModel, StoreError>;
}
