use tracing::{debug, error, instrument};

use crate::{
    config::BilledConfig,
    data::repositories::bills_repository_impl::BillsRepositoryImpl,
    domain::{logic::bill_formatter::format_bills, repositories::bills_repository::BillsRepository},
    entities::{BillsViewState, DisplayBill, ProofModalRequest, Route, Session},
    errors::BilledError,
};

/// Controller behind the employee's bills page.
pub(crate) struct BillsUsecase<
    R = BillsRepositoryImpl, // Default.
> where
    R: BillsRepository,
{
    repository: R,
    session: Session,
    config: BilledConfig,
}

impl<R: BillsRepository> BillsUsecase<R> {
    pub(crate) fn new(repository: R, session: Session, config: BilledConfig) -> Self {
        Self {
            repository,
            session,
            config,
        }
    }

    #[instrument(skip(self), fields(user = %self.session.email))]
    pub(crate) async fn get_bills(&self) -> Result<Vec<DisplayBill>, BilledError> {
        let raw_bills = self.repository.list().await?;
        debug!(count = raw_bills.len(), "fetched bills");
        Ok(format_bills(&raw_bills))
    }

    /// Same as `get_bills`, but folds failures into the error state shown
    /// to the user.
    pub(crate) async fn load(&self) -> BillsViewState {
        match self.get_bills().await {
            Ok(bills) => BillsViewState::Loaded(bills),
            Err(e) => {
                error!(user = %self.session.email, error = %e, "failed to load bills");
                BillsViewState::Error(e.to_string())
            }
        }
    }

    pub(crate) fn handle_click_new_bill(&self) -> Route {
        Route::NewBill
    }

    pub(crate) fn handle_click_icon_eye(&self, bill_url: &str) -> ProofModalRequest {
        ProofModalRequest {
            file_url: bill_url.to_string(),
            image_width: self.config.proof_modal_width / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::repositories::bills_repository::MockBillsRepository,
        entities::{BillId, BillStatus, RawBill},
        errors::StoreError,
        test_support::LogCapture,
    };

    fn fixture_bills() -> Vec<RawBill> {
        [
            ("47qAXb6fIm2zOKkLzMro", "2004-04-04", BillStatus::Pending),
            ("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", BillStatus::Refused),
            ("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", BillStatus::Accepted),
            ("qcCK3SzECmaZAGRrHjaC", "2002-02-02", BillStatus::Refused),
        ]
        .into_iter()
        .map(|(id, date, status)| RawBill {
            id: BillId::new(id),
            date: date.to_string(),
            status,
            expense_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            amount: 400,
            vat: "80".to_string(),
            pct: Some(20),
            commentary: "séminaire billed".to_string(),
            file_url: format!("https://test.storage.tld/{}.jpg", id),
            file_name: format!("{}.jpg", id),
            email: "a@a".to_string(),
        })
        .collect()
    }

    fn usecase(repository: MockBillsRepository) -> BillsUsecase<MockBillsRepository> {
        BillsUsecase::new(
            repository,
            Session::employee("employee@test.com"),
            BilledConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_get_bills_formats_fetched_bills() {
        let mut repository = MockBillsRepository::new();
        repository
            .expect_list()
            .times(1)
            .returning(|| Ok(fixture_bills()));

        let bills = usecase(repository).get_bills().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].date, "4 Avr. 04");
        assert_eq!(bills[0].status, "En attente");
        assert_eq!(bills[1].date, "1 Jan. 01");
        assert_eq!(bills[1].status, "Refusé");
    }

    #[tokio::test]
    async fn test_get_bills_propagates_store_errors() {
        let mut repository = MockBillsRepository::new();
        repository
            .expect_list()
            .returning(|| Err(StoreError::Status { status: 404 }.into()));

        let err = usecase(repository).get_bills().await.unwrap_err();
        assert!(matches!(err, BilledError::Store(StoreError::Status { status: 404 })));
    }

    #[tokio::test]
    async fn test_load_turns_failure_into_error_state() {
        for status in [404, 500] {
            let mut repository = MockBillsRepository::new();
            repository
                .expect_list()
                .returning(move || Err(StoreError::Status { status }.into()));

            let logs = LogCapture::start();
            let state = usecase(repository).load().await;
            assert_eq!(state, BillsViewState::Error(format!("Erreur {}", status)));
            assert!(logs.contents().contains("failed to load bills"));
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut repository = MockBillsRepository::new();
        repository.expect_list().returning(|| Ok(fixture_bills()));

        match usecase(repository).load().await {
            BillsViewState::Loaded(bills) => assert_eq!(bills.len(), 4),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_click_new_bill_navigates_to_form() {
        let route = usecase(MockBillsRepository::new()).handle_click_new_bill();
        assert_eq!(route, Route::NewBill);
        assert_eq!(route.path(), "#employee/bill/new");
    }

    #[test]
    fn test_click_icon_eye_requests_modal() {
        let request = usecase(MockBillsRepository::new())
            .handle_click_icon_eye("https://test.storage.tld/proof.jpg");
        assert_eq!(
            request,
            ProofModalRequest {
                file_url: "https://test.storage.tld/proof.jpg".to_string(),
                image_width: 400,
            }
        );
    }
}
