use async_trait::async_trait;

use crate::{
    entities::{BillId, NewBill, ProofFile, ProofReference, RawBill},
    errors::BilledError,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait BillsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RawBill>, BilledError>;

    async fn upload_proof(
        &self,
        file: ProofFile,
        email: &str,
    ) -> Result<ProofReference, BilledError>;

    async fn post_bill(&self, key: &BillId, bill: &NewBill) -> Result<RawBill, BilledError>;
}
