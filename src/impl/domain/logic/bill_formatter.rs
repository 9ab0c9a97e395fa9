use chrono::{Datelike as _, NaiveDate};
use tracing::warn;

use crate::entities::{BillStatus, DisplayBill, RawBill};

/// French short month names, capitalized and cut to three characters.
const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Parses a bill date. Only strict ISO `YYYY-MM-DD` calendar dates are
/// accepted: four-digit year, two-digit month and day.
pub(crate) fn parse_bill_date(s: &str) -> Result<NaiveDate, String> {
    let well_shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, c)| match i {
            4 | 7 => c == b'-',
            _ => c.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(format!("'{}' is not shaped YYYY-MM-DD", s));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| e.to_string())
}

/// Short French rendering of a date, e.g. 2004-04-04 -> "4 Avr. 04".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

pub fn format_status(status: &BillStatus) -> String {
    match status {
        BillStatus::Pending => "En attente".to_string(),
        BillStatus::Accepted => "Accepté".to_string(),
        BillStatus::Refused => "Refusé".to_string(),
        BillStatus::Other(s) => s.clone(),
    }
}

/// Prepares bills for display. Order and length are preserved. A bill whose
/// date can't be parsed keeps its raw date and a warning is logged.
pub fn format_bills(raw_bills: &[RawBill]) -> Vec<DisplayBill> {
    raw_bills.iter().map(format_bill).collect()
}

fn format_bill(bill: &RawBill) -> DisplayBill {
    let (date, calendar_date) = match parse_bill_date(&bill.date) {
        Ok(d) => (format_date(d), Some(d)),
        Err(e) => {
            warn!(
                bill_id = %bill.id,
                raw_date = %bill.date,
                error = %e,
                "unparseable bill date, displaying raw value"
            );
            (bill.date.clone(), None)
        }
    };
    DisplayBill {
        id: bill.id.clone(),
        date,
        status: format_status(&bill.status),
        expense_type: bill.expense_type.clone(),
        name: bill.name.clone(),
        amount: bill.amount,
        vat: bill.vat.clone(),
        pct: bill.pct,
        commentary: bill.commentary.clone(),
        file_url: bill.file_url.clone(),
        file_name: bill.file_name.clone(),
        email: bill.email.clone(),
        calendar_date,
    }
}
