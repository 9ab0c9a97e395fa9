use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    config::BilledConfig,
    data::repositories::bills_repository_impl::BillsRepositoryImpl,
    domain::usecases::{bills_usecase::BillsUsecase, new_bill_usecase::NewBillUsecase},
    entities::{
        BillsViewState, DisplayBill, NewBillForm, ProofFile, ProofModalRequest, ProofReference,
        Route, Session,
    },
    errors::BilledError,
    presentation::{bills_ui::BillsUi, new_bill_ui::NewBillUi},
    store::BillsStore,
};

pub type Html = String;

/// Employee side of the application: both pages, their controllers, and
/// navigation between them, for one connected user.
pub struct BilledUtil {
    store: Arc<dyn BillsStore>,
    session: Session,
    config: BilledConfig,
    bills_usecase: BillsUsecase,
    new_bill_usecase: NewBillUsecase,
    bills_ui: BillsUi,
    new_bill_ui: NewBillUi,
}

impl BilledUtil {
    pub fn new(store: Arc<dyn BillsStore>, session: Session, config: BilledConfig) -> Self {
        Self {
            bills_usecase: BillsUsecase::new(
                BillsRepositoryImpl::new(store.clone()),
                session.clone(),
                config.clone(),
            ),
            new_bill_usecase: NewBillUsecase::new(
                BillsRepositoryImpl::new(store.clone()),
                session.clone(),
                &config,
            ),
            bills_ui: BillsUi::new(&config),
            new_bill_ui: NewBillUi::new(&config),
            store,
            session,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Renders the page behind `route`. Only employee pages are served, and
    /// only to an employee session. Opening the new bill page starts a fresh
    /// form.
    pub async fn navigate(&mut self, route: Route) -> Result<Html, BilledError> {
        self.ensure_employee(route)?;
        debug!(route = %route, user = %self.session.email, "navigating");
        match route {
            Route::Bills => {
                let state = self.bills_usecase.load().await;
                Ok(self.bills_ui.render(&state))
            }
            Route::NewBill => {
                self.new_bill_usecase = NewBillUsecase::new(
                    BillsRepositoryImpl::new(self.store.clone()),
                    self.session.clone(),
                    &self.config,
                );
                Ok(self.new_bill_ui.render())
            }
            Route::Login | Route::Dashboard => Err(BilledError::UnsupportedRoute {
                route: route.path().to_string(),
            }),
        }
    }

    pub async fn navigate_to_path(&mut self, path: &str) -> Result<Html, BilledError> {
        let route = Route::from_path(path).ok_or_else(|| BilledError::UnsupportedRoute {
            route: path.to_string(),
        })?;
        self.navigate(route).await
    }

    // Bills page.
    // ---

    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, BilledError> {
        self.ensure_employee(Route::Bills)?;
        self.bills_usecase.get_bills().await
    }

    pub async fn load_bills(&self) -> Result<BillsViewState, BilledError> {
        self.ensure_employee(Route::Bills)?;
        Ok(self.bills_usecase.load().await)
    }

    pub fn render_bills(&self, state: &BillsViewState) -> Html {
        self.bills_ui.render(state)
    }

    pub fn handle_click_new_bill(&self) -> Route {
        self.bills_usecase.handle_click_new_bill()
    }

    pub fn handle_click_icon_eye(&self, bill_url: &str) -> ProofModalRequest {
        self.bills_usecase.handle_click_icon_eye(bill_url)
    }

    // New bill page.
    // ---

    pub fn render_new_bill(&self) -> Html {
        self.new_bill_ui.render()
    }

    pub fn uploaded_proof(&self) -> Option<&ProofReference> {
        self.new_bill_usecase.proof()
    }

    pub async fn handle_change_file(
        &mut self,
        file: ProofFile,
    ) -> Result<ProofReference, BilledError> {
        self.ensure_employee(Route::NewBill)?;
        self.new_bill_usecase.handle_change_file(file).await
    }

    pub async fn handle_submit(&mut self, form: NewBillForm) -> Result<Route, BilledError> {
        self.ensure_employee(Route::NewBill)?;
        self.new_bill_usecase.handle_submit(form).await
    }

    fn ensure_employee(&self, route: Route) -> Result<(), BilledError> {
        if self.session.is_employee() {
            return Ok(());
        }
        warn!(route = %route, user = %self.session.email, "non-employee session refused");
        Err(BilledError::Unauthorized {
            route: route.path().to_string(),
        })
    }
}
