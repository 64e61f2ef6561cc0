//! Item submitter: the creation-form state machine and its orchestration.

use shopdesk_client::{CatalogApi, ClientError};
use shopdesk_core::{NewProduct, Product, ProductDraft, SubmissionState, ValidationError};

use crate::nav::Navigator;

/// Fixed user-facing message for any remote failure during creation.
///
/// The concrete cause is logged, not shown.
pub const SAVE_FAILED_MESSAGE: &str = "Saved a new product failed";

/// Success notice shown right before navigating back to the listing.
pub const SAVE_SUCCEEDED_MESSAGE: &str = "Successfully saved a new product";

/// Why a submission attempt did not reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A write is already in flight. The trigger is disabled while
    /// Submitting, so this guard is structural backup only.
    InFlight,
    /// The draft failed the validation pipeline.
    Invalid(ValidationError),
}

/// Outcome of a completed write round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created remotely; the view navigates to the listing.
    Created(Product),
    /// Remote failure; the form stays up with [`SAVE_FAILED_MESSAGE`].
    Failed,
}

/// User-facing notice produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitNotice {
    /// Saved remotely; the view is navigating away.
    Saved,
    /// The attempt stopped; the message is what the user sees.
    Error(String),
}

impl SubmitNotice {
    pub fn message(&self) -> &str {
        match self {
            Self::Saved => SAVE_SUCCEEDED_MESSAGE,
            Self::Error(message) => message,
        }
    }
}

/// Creation-form lifecycle.
///
/// `Idle --submit+valid--> Submitting --success--> (navigate away)`;
/// `Submitting --failure--> Failed(message)` with submit re-enabled;
/// invalid submits never leave `Idle` and never touch the network.
#[derive(Debug, Default)]
pub struct ProductForm {
    state: SubmissionState,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether the submit trigger should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// Returns the payload to send. Rejections leave the lifecycle where it
    /// was; validation errors are reported synchronously by the caller.
    pub fn begin(&mut self, draft: &ProductDraft) -> Result<NewProduct, SubmitRejection> {
        if self.state.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }

        match draft.validate() {
            Ok(payload) => {
                self.state = SubmissionState::Submitting;
                Ok(payload)
            }
            Err(err) => Err(SubmitRejection::Invalid(err)),
        }
    }

    /// Apply the result of the write request.
    ///
    /// Success is terminal for this view; the caller navigates away.
    pub fn complete(&mut self, result: Result<Product, ClientError>) -> SubmitOutcome {
        match result {
            Ok(product) => {
                self.state = SubmissionState::Idle;
                SubmitOutcome::Created(product)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product creation failed");
                self.state = SubmissionState::Failed(SAVE_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

/// Drive one full submission: validate, write, navigate on success.
///
/// At most one write request is issued, and only when validation passes.
/// Returns the notice to surface, or `None` for the in-flight no-op.
pub async fn submit_product<S, N>(
    form: &mut ProductForm,
    service: &S,
    navigator: &N,
    draft: &ProductDraft,
) -> Option<SubmitNotice>
where
    S: CatalogApi,
    N: Navigator,
{
    let payload = match form.begin(draft) {
        Ok(payload) => payload,
        Err(SubmitRejection::InFlight) => return None,
        Err(SubmitRejection::Invalid(err)) => {
            return Some(SubmitNotice::Error(err.to_string()));
        }
    };

    match form.complete(service.create_product(&payload).await) {
        SubmitOutcome::Created(product) => {
            tracing::debug!(id = product.id, "product created");
            navigator.to_catalog();
            Some(SubmitNotice::Saved)
        }
        SubmitOutcome::Failed => Some(SubmitNotice::Error(SAVE_FAILED_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Catalog fake that records write payloads and plays back a script.
    struct RecordingCatalog {
        create_result: Result<Product, ClientError>,
        create_calls: RefCell<Vec<NewProduct>>,
    }

    impl RecordingCatalog {
        fn new(create_result: Result<Product, ClientError>) -> Self {
            Self {
                create_result,
                create_calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<NewProduct> {
            self.create_calls.borrow().clone()
        }
    }

    impl CatalogApi for RecordingCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
            unreachable!("form tests never read");
        }

        async fn create_product(&self, payload: &NewProduct) -> Result<Product, ClientError> {
            self.create_calls.borrow_mut().push(payload.clone());
            self.create_result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        to_catalog_calls: Cell<usize>,
        back_calls: Cell<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn to_catalog(&self) {
            self.to_catalog_calls.set(self.to_catalog_calls.get() + 1);
        }

        fn back(&self) {
            self.back_calls.set(self.back_calls.get() + 1);
        }
    }

    fn created_product() -> Product {
        Product {
            id: 99,
            title: "Desk lamp".to_string(),
            price: 19.99,
            description: String::new(),
            category: None,
            images: vec!["https://example.com/lamp.jpg".to_string()],
        }
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Desk lamp".to_string(),
            price: "19.99".to_string(),
            category_id: "3".to_string(),
            image_url: " https://example.com/lamp.jpg ".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn valid_submission_writes_once_and_navigates_once() {
        let service = RecordingCatalog::new(Ok(created_product()));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let notice = submit_product(&mut form, &service, &navigator, &valid_draft()).await;

        assert_eq!(notice, Some(SubmitNotice::Saved));
        assert_eq!(navigator.to_catalog_calls.get(), 1);

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].price, 19.99);
        assert_eq!(calls[0].category_id, 3);
        assert_eq!(calls[0].images, vec!["https://example.com/lamp.jpg"]);
        assert_eq!(calls[0].description, "");
    }

    #[tokio::test]
    async fn empty_title_blocks_the_network() {
        let service = RecordingCatalog::new(Ok(created_product()));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        let notice = submit_product(&mut form, &service, &navigator, &draft).await;

        assert_eq!(
            notice,
            Some(SubmitNotice::Error("Title is required".to_string()))
        );
        assert!(service.calls().is_empty());
        assert_eq!(navigator.to_catalog_calls.get(), 0);
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn bad_price_blocks_the_network() {
        for price in ["0", "-2", "abc"] {
            let service = RecordingCatalog::new(Ok(created_product()));
            let navigator = RecordingNavigator::default();
            let mut form = ProductForm::new();

            let mut draft = valid_draft();
            draft.price = price.to_string();
            let notice = submit_product(&mut form, &service, &navigator, &draft).await;

            assert_eq!(
                notice,
                Some(SubmitNotice::Error(
                    "Price must be a positive number".to_string()
                )),
                "price {price:?}"
            );
            assert!(service.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn missing_image_blocks_the_network() {
        let service = RecordingCatalog::new(Ok(created_product()));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let mut draft = valid_draft();
        draft.image_url = String::new();
        let notice = submit_product(&mut form, &service, &navigator, &draft).await;

        assert_eq!(
            notice,
            Some(SubmitNotice::Error("Image URL is required".to_string()))
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn non_integer_category_blocks_the_network() {
        let service = RecordingCatalog::new(Ok(created_product()));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let mut draft = valid_draft();
        draft.category_id = "2.5".to_string();
        let notice = submit_product(&mut form, &service, &navigator, &draft).await;

        assert_eq!(
            notice,
            Some(SubmitNotice::Error(
                "Category ID must be a whole number".to_string()
            ))
        );
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn remote_failure_keeps_the_form_with_the_generic_message() {
        let service = RecordingCatalog::new(Err(ClientError::Api(400)));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let notice = submit_product(&mut form, &service, &navigator, &valid_draft()).await;

        assert_eq!(
            notice,
            Some(SubmitNotice::Error(SAVE_FAILED_MESSAGE.to_string()))
        );
        assert_eq!(navigator.to_catalog_calls.get(), 0);
        // Submit is re-enabled and the message is retained for the form.
        assert!(!form.is_submitting());
        assert_eq!(form.state().error(), Some(SAVE_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn network_failure_uses_the_same_generic_message() {
        let service = RecordingCatalog::new(Err(ClientError::Network("refused".to_string())));
        let navigator = RecordingNavigator::default();
        let mut form = ProductForm::new();

        let notice = submit_product(&mut form, &service, &navigator, &valid_draft()).await;
        assert_eq!(
            notice,
            Some(SubmitNotice::Error(SAVE_FAILED_MESSAGE.to_string()))
        );
    }

    #[test]
    fn begin_rejects_while_a_write_is_in_flight() {
        let mut form = ProductForm::new();
        let payload = form.begin(&valid_draft()).unwrap();
        assert_eq!(payload.title, "Desk lamp");
        assert!(form.is_submitting());

        assert_eq!(
            form.begin(&valid_draft()),
            Err(SubmitRejection::InFlight)
        );
    }

    #[test]
    fn invalid_begin_does_not_change_state() {
        let mut form = ProductForm::new();
        let mut draft = valid_draft();
        draft.title = String::new();

        assert_eq!(
            form.begin(&draft),
            Err(SubmitRejection::Invalid(ValidationError::TitleRequired))
        );
        assert_eq!(form.state(), &SubmissionState::Idle);
    }
}
