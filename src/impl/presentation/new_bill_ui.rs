use maud::{html, Markup};

use crate::{
    config::BilledConfig,
    entities::{ExpenseType, Route},
};

use super::vertical_layout::with_layout;

pub(crate) struct NewBillUi {
    accept: String,
    default_pct: u32,
}

impl NewBillUi {
    pub(crate) fn new(config: &BilledConfig) -> Self {
        Self {
            accept: config
                .accepted_proof_extensions
                .iter()
                .map(|e| format!(".{}", e.trim_start_matches('.')))
                .collect::<Vec<_>>()
                .join(","),
            default_pct: config.default_pct,
        }
    }

    pub(crate) fn render(&self) -> String {
        with_layout(Route::NewBill, self.form()).into_string()
    }

    fn form(&self) -> Markup {
        html! {
            div class="content" {
                div class="content-header" {
                    div class="content-title" { "Envoyer une note de frais" }
                }
                div class="form-newbill-container content-inner" {
                    form data-testid="form-new-bill" {
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="expense-type" class="bold-label" { "Type de dépense" }
                                    select required class="form-control blue-border" id="expense-type"
                                        data-testid="expense-type" {
                                        @for t in ExpenseType::ALL {
                                            option { (t.label()) }
                                        }
                                    }
                                }
                                div class="col-half" {
                                    label for="expense-name" class="bold-label" { "Nom de la dépense" }
                                    input type="text" class="form-control blue-border" id="expense-name"
                                        data-testid="expense-name" placeholder="Vol Paris Londres";
                                }
                                div class="col-half" {
                                    label for="datepicker" class="bold-label" { "Date" }
                                    input required type="date" class="form-control blue-border"
                                        id="datepicker" data-testid="datepicker";
                                }
                                div class="col-half" {
                                    label for="amount" class="bold-label" { "Montant TTC " }
                                    input required type="number" class="form-control blue-border input-icon input-icon-right"
                                        id="amount" data-testid="amount" placeholder="348";
                                }
                                div class="col-half-row" {
                                    div class="flex-col" {
                                        label for="vat" class="bold-label" { "TVA" }
                                        input type="number" class="form-control blue-border" id="vat"
                                            data-testid="vat" placeholder="70";
                                    }
                                    div class="flex-col" {
                                        input type="number" class="form-control blue-border" id="pct"
                                            data-testid="pct" placeholder=(self.default_pct);
                                        span { "%" }
                                    }
                                }
                            }
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="commentary" class="bold-label" { "Commentaire" }
                                    textarea class="form-control blue-border" id="commentary"
                                        data-testid="commentary" rows="3" {}
                                }
                                div class="col-half" {
                                    label for="file" class="bold-label" { "Justificatif" }
                                    input required type="file" accept=(self.accept)
                                        class="form-control blue-border" id="file" data-testid="file";
                                }
                            }
                        }
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    button type="submit" id="btn-send-bill" data-testid="btn-send-bill"
                                        class="btn btn-primary" { "Envoyer" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
