use std::str::FromStr as _;

use serde_json::Value;

use crate::{
    entities::{BillId, BillStatus, RawBill},
    errors::BilledError,
};

use super::amount_model::AmountModel;

/// Bill payload exactly as the store sends it. Nothing is trusted until it
/// goes through `TryFrom<RawBillModel> for RawBill`.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBillModel {
    pub id: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Value>,
    pub vat: Option<Value>,
    pub pct: Option<Value>,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<RawBillModel> for RawBill {
    type Error = BilledError;
    fn try_from(m: RawBillModel) -> Result<Self, Self::Error> {
        let id = m
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| BilledError::invalid_payload("id", "is missing"))?;
        // A missing date or status is kept as an empty raw value and left to
        // the formatter's fallbacks.
        let date = m.date.unwrap_or_default();
        let status = m.status.unwrap_or_default();
        let amount: i64 = match &m.amount {
            None | Some(Value::Null) => 0,
            Some(v) => AmountModel::try_from(v)?.into(),
        };
        let vat = match m.vat {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(BilledError::invalid_payload(
                    "vat",
                    format!("expected a string or number, got {} (id: {})", other, id),
                ))
            }
        };
        let pct = parse_pct(m.pct.as_ref()).map_err(|_| {
            BilledError::invalid_payload("pct", format!("is not a percentage (id: {})", id))
        })?;

        Ok(RawBill {
            id: BillId(id),
            date,
            status: BillStatus::from(status.as_str()),
            expense_type: m.expense_type.unwrap_or_default(),
            name: m.name.unwrap_or_default(),
            amount,
            vat,
            pct,
            commentary: m.commentary.unwrap_or_default(),
            file_url: m.file_url.unwrap_or_default(),
            file_name: m.file_name.unwrap_or_default(),
            email: m.email.unwrap_or_default(),
        })
    }
}

fn parse_pct(v: Option<&Value>) -> Result<Option<u32>, ()> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|p| u32::try_from(p).ok())
            .map(Some)
            .ok_or(()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => AmountModel::from_str(s)
            .ok()
            .and_then(|a| u32::try_from(a.0).ok())
            .map(Some)
            .ok_or(()),
        Some(_) => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(json: &str) -> RawBillModel {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_complete_payload_converts() {
        let m = model(
            r#"{
                "id": "47qAXb6fIm2zOKkLzMro",
                "vat": "80",
                "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg",
                "status": "pending",
                "type": "Hôtel et logement",
                "commentary": "séminaire billed",
                "name": "encore",
                "fileName": "preview-facture-free-201801-pdf-1.jpg",
                "date": "2004-04-04",
                "amount": 400,
                "commentAdmin": "ok",
                "email": "a@a",
                "pct": 20
            }"#,
        );
        let bill = RawBill::try_from(m).unwrap();
        assert_eq!(bill.id.as_str(), "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.expense_type, "Hôtel et logement");
        assert_eq!(bill.amount, 400);
        assert_eq!(bill.vat, "80");
        assert_eq!(bill.pct, Some(20));
        assert_eq!(bill.file_name, "preview-facture-free-201801-pdf-1.jpg");
    }

    #[test]
    fn test_optional_fields_default() {
        let m = model(r#"{"id": "x", "date": "not a date", "status": "archived"}"#);
        let bill = RawBill::try_from(m).unwrap();
        assert_eq!(bill.date, "not a date");
        assert_eq!(bill.status, BillStatus::Other("archived".to_string()));
        assert_eq!(bill.amount, 0);
        assert_eq!(bill.vat, "");
        assert_eq!(bill.pct, None);
        assert_eq!(bill.commentary, "");
    }

    #[test]
    fn test_loose_numeric_fields() {
        let m = model(
            r#"{"id": "x", "date": "2001-01-01", "status": "refused",
                "amount": "100", "vat": 20, "pct": "10"}"#,
        );
        let bill = RawBill::try_from(m).unwrap();
        assert_eq!(bill.amount, 100);
        assert_eq!(bill.vat, "20");
        assert_eq!(bill.pct, Some(10));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let no_id = model(r#"{"date": "2001-01-01", "status": "refused"}"#);
        let empty_id = model(r#"{"id": "", "date": "2001-01-01", "status": "refused"}"#);
        assert!(matches!(
            RawBill::try_from(no_id),
            Err(BilledError::InvalidBillPayload { field: "id", .. })
        ));
        assert!(matches!(
            RawBill::try_from(empty_id),
            Err(BilledError::InvalidBillPayload { field: "id", .. })
        ));
    }

    #[test]
    fn test_missing_date_and_status_become_empty() {
        let no_date = model(r#"{"id": "x", "status": "refused"}"#);
        let null_date = model(r#"{"id": "x", "date": null, "status": "pending"}"#);
        let no_status = model(r#"{"id": "x", "date": "2001-01-01"}"#);
        let null_status = model(r#"{"id": "x", "date": "2001-01-01", "status": null}"#);

        let bill = RawBill::try_from(no_date).unwrap();
        assert_eq!(bill.date, "");
        assert_eq!(bill.status, BillStatus::Refused);
        assert_eq!(RawBill::try_from(null_date).unwrap().date, "");

        let bill = RawBill::try_from(no_status).unwrap();
        assert_eq!(bill.date, "2001-01-01");
        assert_eq!(bill.status, BillStatus::Other(String::new()));
        assert_eq!(
            RawBill::try_from(null_status).unwrap().status,
            BillStatus::Other(String::new())
        );
    }

    #[test]
    fn test_bad_pct_is_rejected() {
        let m = model(r#"{"id": "x", "date": "2001-01-01", "status": "refused", "pct": -5}"#);
        assert!(matches!(
            RawBill::try_from(m),
            Err(BilledError::InvalidBillPayload { field: "pct", .. })
        ));
    }
}
