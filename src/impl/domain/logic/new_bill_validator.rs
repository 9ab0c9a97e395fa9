use std::str::FromStr as _;

use crate::{
    data::models::amount_model::AmountModel,
    entities::{BillStatus, ExpenseType, NewBill, NewBillForm, ProofReference},
    errors::BilledError,
};

use super::bill_formatter::parse_bill_date;

/// Builds the bill to post from what was typed in the form and the proof
/// that was uploaded beforehand.
pub(crate) fn validate_new_bill(
    form: &NewBillForm,
    email: &str,
    proof: &ProofReference,
    default_pct: u32,
) -> Result<NewBill, BilledError> {
    let expense_type = ExpenseType::from_label(form.expense_type.trim())
        .ok_or_else(|| BilledError::invalid_field("expense-type", &form.expense_type))?;
    let date = parse_bill_date(form.date.trim())
        .map_err(|_| BilledError::invalid_field("datepicker", &form.date))?;
    let amount = parse_whole_number(&form.amount)
        .ok_or_else(|| BilledError::invalid_field("amount", &form.amount))?;
    let vat = form.vat.trim();
    if !vat.is_empty() && parse_whole_number(vat).is_none() {
        return Err(BilledError::invalid_field("vat", vat));
    }
    // Empty, zero or garbage all fall back to the default rate.
    let pct = parse_whole_number(&form.pct)
        .and_then(|p| u32::try_from(p).ok())
        .filter(|p| *p > 0)
        .unwrap_or(default_pct);

    Ok(NewBill {
        email: email.to_string(),
        expense_type,
        name: form.name.trim().to_string(),
        date,
        amount,
        vat: vat.to_string(),
        pct,
        commentary: form.commentary.trim().to_string(),
        file_url: proof.file_url.clone(),
        file_name: proof.file_name.clone(),
        status: BillStatus::Pending,
    })
}

/// Non-negative amount, read the same way as amounts coming from the store.
fn parse_whole_number(s: &str) -> Option<i64> {
    AmountModel::from_str(s)
        .ok()
        .map(i64::from)
        .filter(|n| *n >= 0)
}
