use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    data::{
        datasources::bills_store::BillsStore,
        models::{bill_update_model::BillUpdateModel, proof_upload_model::ProofUploadModel},
    },
    domain::repositories::bills_repository::BillsRepository,
    entities::{BillId, NewBill, ProofFile, ProofReference, RawBill},
    errors::BilledError,
};

pub(crate) struct BillsRepositoryImpl {
    store: Arc<dyn BillsStore>,
}

#[async_trait]
impl BillsRepository for BillsRepositoryImpl {
    async fn list(&self) -> Result<Vec<RawBill>, BilledError> {
        self.store
            .list()
            .await?
            .into_iter()
            .map(RawBill::try_from)
            .collect()
    }

    async fn upload_proof(
        &self,
        file: ProofFile,
        email: &str,
    ) -> Result<ProofReference, BilledError> {
        let file_name = file.name.clone();
        let created = self
            .store
            .create(ProofUploadModel {
                file_name: file.name,
                bytes: file.bytes,
                email: email.to_string(),
            })
            .await?;
        Ok(ProofReference {
            key: BillId(created.key),
            file_url: created.file_url,
            file_name,
        })
    }

    async fn post_bill(&self, key: &BillId, bill: &NewBill) -> Result<RawBill, BilledError> {
        let stored = self
            .store
            .update(key.as_str(), BillUpdateModel::from(bill))
            .await?;
        RawBill::try_from(stored)
    }
}

impl BillsRepositoryImpl {
    pub(crate) fn new(store: Arc<dyn BillsStore>) -> Self {
        BillsRepositoryImpl { store }
    }
}
