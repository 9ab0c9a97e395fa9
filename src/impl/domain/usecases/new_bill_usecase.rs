use tracing::{debug, error, instrument, warn};

use crate::{
    config::BilledConfig,
    data::repositories::bills_repository_impl::BillsRepositoryImpl,
    domain::{
        logic::{new_bill_validator::validate_new_bill, proof_file_validator::ProofFileValidator},
        repositories::bills_repository::BillsRepository,
    },
    entities::{NewBillForm, ProofFile, ProofReference, Route, Session},
    errors::BilledError,
};

/// Controller behind the new bill form. Keeps the uploaded proof between the
/// file input change and the form submission.
pub(crate) struct NewBillUsecase<
    R = BillsRepositoryImpl, // Default.
> where
    R: BillsRepository,
{
    repository: R,
    session: Session,
    default_pct: u32,
    proof_validator: ProofFileValidator,
    proof: Option<ProofReference>,
}

impl<R: BillsRepository> NewBillUsecase<R> {
    pub(crate) fn new(repository: R, session: Session, config: &BilledConfig) -> Self {
        Self {
            repository,
            session,
            default_pct: config.default_pct,
            proof_validator: ProofFileValidator::new(&config.accepted_proof_extensions),
            proof: None,
        }
    }

    pub(crate) fn proof(&self) -> Option<&ProofReference> {
        self.proof.as_ref()
    }

    /// Validates and uploads the selected proof. A rejected or failed upload
    /// leaves any previously uploaded proof in place.
    #[instrument(skip(self, file), fields(file_name = %file.name))]
    pub(crate) async fn handle_change_file(
        &mut self,
        file: ProofFile,
    ) -> Result<ProofReference, BilledError> {
        if let Err(e) = self.proof_validator.validate(&file) {
            warn!(error = %e, "rejected proof file");
            return Err(e);
        }
        let reference = self
            .repository
            .upload_proof(file, &self.session.email)
            .await
            .inspect_err(|e| error!(error = %e, "proof upload failed"))?;
        debug!(key = %reference.key, "proof uploaded");
        self.proof = Some(reference.clone());
        Ok(reference)
    }

    /// Posts the bill. Returns the route to navigate to on success; on
    /// failure nothing is retried and the user stays on the form.
    #[instrument(skip(self, form), fields(user = %self.session.email))]
    pub(crate) async fn handle_submit(&mut self, form: NewBillForm) -> Result<Route, BilledError> {
        let proof = self.proof.as_ref().ok_or(BilledError::MissingProofFile)?;
        let bill = validate_new_bill(&form, &self.session.email, proof, self.default_pct)
            .inspect_err(|e| warn!(error = %e, "rejected new bill form"))?;
        self.repository
            .post_bill(&proof.key, &bill)
            .await
            .inspect_err(|e| error!(key = %proof.key, error = %e, "posting new bill failed"))?;
        debug!(key = %proof.key, "new bill posted");
        self.proof = None;
        Ok(Route::Bills)
    }
}
