use async_trait::async_trait;

use crate::{data::models::raw_bill_model::RawBillModel, errors::BilledError};

/// Reads bill payloads from a JSON array, as exported by the backend.
#[async_trait]
pub(crate) trait BillsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<RawBillModel>, BilledError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawBillModel>, BilledError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BillsJsonDatasourceImpl;

impl BillsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BillsJsonDatasource for BillsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<RawBillModel>, BilledError> {
        Ok(serde_json::from_str(s)?)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawBillModel>, BilledError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&tokio::fs::read_to_string(path).await?)
    }
}
