use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BillId(pub(crate) String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    /// Any status value the backend sends that we don't know about. Kept
    /// verbatim so it can be displayed as-is.
    Other(String),
}

/// Expense record as returned by the store, after boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBill {
    pub id: BillId,
    /// Expected as ISO `YYYY-MM-DD`, but not guaranteed by the backend.
    pub date: String,
    pub status: BillStatus,
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub vat: String,
    pub pct: Option<u32>,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub email: String,
}

/// A `RawBill` ready for display: `date` holds the short French rendering
/// (or the raw value if it could not be parsed) and `status` holds the
/// localized label.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub id: BillId,
    pub date: String,
    pub status: String,
    pub expense_type: String,
    pub name: String,
    pub amount: i64,
    pub vat: String,
    pub pct: Option<u32>,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub email: String,
    /// Parsed calendar date, used to order rows. `None` for malformed dates.
    pub calendar_date: Option<NaiveDate>,
}

// --

impl BillId {
    pub fn new(id: impl Into<String>) -> Self {
        BillId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Other(s) => s,
        }
    }
}

impl From<&str> for BillStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            other => BillStatus::Other(other.to_string()),
        }
    }
}
