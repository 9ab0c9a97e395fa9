use std::str::FromStr;

use crate::errors::BilledError;

/// Whole-euro amount. Spaces used as thousands separators (including NBSP
/// and U+202F) are dropped, `,` is read as the decimal mark, and any decimal
/// part is truncated.
#[derive(Debug)]
pub(crate) struct AmountModel(pub i64);
impl FromStr for AmountModel {
    type Err = BilledError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| {
                BilledError::invalid_payload("amount", format!("'{}' is not a number", s))
            })?;
        Ok(AmountModel(amount.trunc() as i64))
    }
}

impl TryFrom<&serde_json::Value> for AmountModel {
    type Error = BilledError;
    fn try_from(v: &serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .map(AmountModel)
                .ok_or_else(|| {
                    BilledError::invalid_payload("amount", format!("{} is out of range", n))
                }),
            serde_json::Value::String(s) => AmountModel::from_str(s),
            other => Err(BilledError::invalid_payload(
                "amount",
                format!("expected a number, got {}", other),
            )),
        }
    }
}

impl From<AmountModel> for i64 {
    fn from(a: AmountModel) -> i64 {
        a.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_from_str() {
        assert_eq!(AmountModel::from_str("350").unwrap().0, 350);
        assert_eq!(AmountModel::from_str(" 1 200 ").unwrap().0, 1200);
        assert_eq!(AmountModel::from_str("1\u{a0}200").unwrap().0, 1200);
        assert_eq!(AmountModel::from_str("1\u{202f}200").unwrap().0, 1200);
        assert_eq!(AmountModel::from_str("348.90").unwrap().0, 348);
        assert_eq!(AmountModel::from_str("348,90").unwrap().0, 348);
        assert_eq!(AmountModel::from_str("-12,5").unwrap().0, -12);
        assert!(AmountModel::from_str("1,200.50").is_err());
        assert!(AmountModel::from_str("abc").is_err());
        assert!(AmountModel::from_str("").is_err());
    }

    #[test]
    fn test_amount_from_json() {
        let n = serde_json::json!(400);
        let f = serde_json::json!(12.7);
        let s = serde_json::json!("100");
        let b = serde_json::json!(true);
        assert_eq!(AmountModel::try_from(&n).unwrap().0, 400);
        assert_eq!(AmountModel::try_from(&f).unwrap().0, 12);
        assert_eq!(AmountModel::try_from(&s).unwrap().0, 100);
        assert!(matches!(
            AmountModel::try_from(&b),
            Err(BilledError::InvalidBillPayload { field: "amount", .. })
        ));
    }
}
