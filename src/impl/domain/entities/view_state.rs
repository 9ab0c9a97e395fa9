use super::bill::DisplayBill;

#[derive(Debug, Clone, PartialEq)]
pub enum BillsViewState {
    Loading,
    /// The store call failed; holds the message to show as-is.
    Error(String),
    Loaded(Vec<DisplayBill>),
}

/// Request to open the proof preview modal for a bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofModalRequest {
    pub file_url: String,
    pub image_width: u32,
}
