/// Multipart-style upload of a receipt image, tagged with the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofUploadModel {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProofModel {
    pub file_url: String,
    pub key: String,
}
