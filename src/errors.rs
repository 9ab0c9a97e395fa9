use thiserror::Error;

// Store-related.

/// Failure reported by the backend store client. The display text is what
/// gets shown to the user on the error page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Erreur {status}")]
    Status { status: u16 },
    #[error("Erreur : {0}")]
    Transport(String),
    #[error("Erreur : bill '{selector}' not found")]
    UnknownBill { selector: String },
}

#[derive(Debug, Error)]
pub enum BilledError {
    #[error(transparent)]
    Store(#[from] StoreError),

    // IO-related.
    #[error("Error reading file: {0}.")]
    Read(#[from] std::io::Error),

    // Parsing-related.
    #[error("Invalid JSON: {0}.")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid RON configuration: {0}.")]
    InvalidConfig(#[from] ron::error::SpannedError),
    #[error("Invalid bill payload: field '{field}' {details}.")]
    InvalidBillPayload { field: &'static str, details: String },
    #[error("Invalid session: {details}.")]
    InvalidSession { details: String },

    // Form-related.
    #[error("Invalid proof file '{file_name}': accepted extensions are {accepted}.")]
    InvalidProofFile { file_name: String, accepted: String },
    #[error("A proof file must be uploaded before submitting the bill.")]
    MissingProofFile,
    #[error("Invalid value for '{field}': '{value}'.")]
    InvalidFormField { field: &'static str, value: String },

    // Navigation-related.
    #[error("Access to '{route}' requires an employee session.")]
    Unauthorized { route: String },
    #[error("Route '{route}' is not served by this application.")]
    UnsupportedRoute { route: String },
}

impl BilledError {
    pub(crate) fn invalid_payload(field: &'static str, details: impl Into<String>) -> Self {
        BilledError::InvalidBillPayload {
            field,
            details: details.into(),
        }
    }

    pub(crate) fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        BilledError::InvalidFormField {
            field,
            value: value.into(),
        }
    }
}
