use crate::entities::NewBill;

/// Body posted to the store when a new bill is submitted.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillUpdateModel {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: String,
}

impl From<&NewBill> for BillUpdateModel {
    fn from(b: &NewBill) -> Self {
        BillUpdateModel {
            email: b.email.clone(),
            expense_type: b.expense_type.label().to_string(),
            name: b.name.clone(),
            amount: b.amount,
            date: b.date.format("%Y-%m-%d").to_string(),
            vat: b.vat.clone(),
            pct: b.pct,
            commentary: b.commentary.clone(),
            file_url: b.file_url.clone(),
            file_name: b.file_name.clone(),
            status: b.status.as_str().to_string(),
        }
    }
}
