use std::cmp::Reverse;

use maud::{html, Markup, PreEscaped};

use crate::{
    config::BilledConfig,
    entities::{BillsViewState, DisplayBill, Route},
};

use super::{
    status_pages::{error_page, loading_page},
    utils::format_amount,
    vertical_layout::with_layout,
};

const EYE_ICON: &str = r#"<svg width="20" height="14" viewBox="0 0 20 14" xmlns="http://www.w3.org/2000/svg"><path d="M10 1C5 1 1.7 4.1 0.5 7c1.2 2.9 4.5 6 9.5 6s8.3-3.1 9.5-6C18.3 4.1 15 1 10 1zm0 10a4 4 0 110-8 4 4 0 010 8z" fill="currentColor"/></svg>"#;

pub(crate) struct BillsUi {
    currency_symbol: String,
}

impl BillsUi {
    pub(crate) fn new(config: &BilledConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub(crate) fn render(&self, state: &BillsViewState) -> String {
        match state {
            BillsViewState::Loading => loading_page(Route::Bills),
            BillsViewState::Error(message) => error_page(Route::Bills, message),
            BillsViewState::Loaded(bills) => self.bills_page(bills),
        }
        .into_string()
    }

    fn bills_page(&self, bills: &[DisplayBill]) -> Markup {
        // Newest first; bills with unparseable dates go last, in their
        // original order.
        let sorted_bills = {
            let mut v: Vec<&DisplayBill> = bills.iter().collect();
            v.sort_by_key(|b| (b.calendar_date.is_none(), Reverse(b.calendar_date)));
            v
        };
        with_layout(
            Route::Bills,
            html! {
                div class="content" {
                    div class="content-header" {
                        div class="content-title" { "Mes notes de frais" }
                        button type="button" data-testid="btn-new-bill" data-route=(Route::NewBill.path())
                            class="btn btn-primary" {
                            "Nouvelle note de frais"
                        }
                    }
                    div id="data-table" {
                        table id="example" class="table table-striped" style="width:100%" {
                            thead {
                                tr {
                                    th { "Type" }
                                    th { "Nom" }
                                    th { "Date" }
                                    th { "Montant" }
                                    th { "Statut" }
                                    th { "Actions" }
                                }
                            }
                            tbody data-testid="tbody" {
                                @for bill in &sorted_bills {
                                    (self.row(bill))
                                }
                            }
                        }
                    }
                }
                (self.proof_modal())
            },
        )
    }

    fn row(&self, bill: &DisplayBill) -> Markup {
        html! {
            tr data-bill-id=(bill.id.as_str()) {
                td { (bill.expense_type) }
                td { (bill.name) }
                td data-testid="bill-date" { (bill.date) }
                td data-testid="bill-amount" { (format_amount(bill.amount, &self.currency_symbol)) }
                td data-testid="bill-status" { (bill.status) }
                td {
                    div class="icon-actions" {
                        div id="eye" data-testid="icon-eye" data-bill-url=(bill.file_url) {
                            (PreEscaped(EYE_ICON))
                        }
                    }
                }
            }
        }
    }

    fn proof_modal(&self) -> Markup {
        html! {
            div class="modal fade" id="modaleFile" data-testid="modaleFile" tabindex="-1" role="dialog" {
                div class="modal-dialog modal-dialog-centered modal-lg" role="document" {
                    div class="modal-content" {
                        div class="modal-header" {
                            h5 class="modal-title" { "Justificatif" }
                            button type="button" class="close" data-dismiss="modal" aria-label="Close" {
                                span aria-hidden="true" { (PreEscaped("&times;")) }
                            }
                        }
                        div class="modal-body" {}
                    }
                }
            }
        }
    }
}
