use crate::core::catalog::{load_catalog, CatalogOrigin};
use crate::core::form::FormError;
use crate::core::selection::Selection;
use crate::core::submit::{submit_booking, SubmissionReceipt};
use crate::core::wizard::{WizardEvent, WizardStep};
use crate::core::{BookingDraft, BookingSink, CatalogSource, Service, SubmissionPolicy};
use crate::utils::error::Result;

/// One customer's pass through the booking wizard: pick services, fill in
/// the pickup form, submit.
pub struct BookingFlow<C: CatalogSource, B: BookingSink> {
    catalog_source: C,
    sink: B,
    policy: SubmissionPolicy,
    services: Vec<Service>,
    catalog_origin: Option<CatalogOrigin>,
    selection: Selection,
    draft: BookingDraft,
    step: WizardStep,
    last_receipt: Option<SubmissionReceipt>,
}

impl<C: CatalogSource, B: BookingSink> BookingFlow<C, B> {
    pub fn new(catalog_source: C, sink: B) -> Self {
        Self {
            catalog_source,
            sink,
            policy: SubmissionPolicy::default(),
            services: Vec::new(),
            catalog_origin: None,
            selection: Selection::new(),
            draft: BookingDraft::default(),
            step: WizardStep::default(),
            last_receipt: None,
        }
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the catalog on first call; later calls keep what was loaded.
    pub async fn start(&mut self) -> CatalogOrigin {
        if let Some(origin) = self.catalog_origin {
            return origin;
        }
        let loaded = load_catalog(&self.catalog_source).await;
        self.services = loaded.services;
        self.catalog_origin = Some(loaded.origin);
        loaded.origin
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn catalog_origin(&self) -> Option<CatalogOrigin> {
        self.catalog_origin
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    /// Selects or deselects a service. Ids that are not in the loaded
    /// catalog cannot be selected.
    pub fn toggle_service(&mut self, id: &str) -> bool {
        if !self.selection.contains(id) && self.service(id).is_none() {
            tracing::debug!("Ignoring unknown service id {}", id);
            return false;
        }
        self.selection.toggle(id)
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        self.selection.update_quantity(id, quantity)
    }

    pub fn increment_quantity(&mut self, id: &str) -> bool {
        self.selection.increment(id)
    }

    pub fn decrement_quantity(&mut self, id: &str) -> bool {
        self.selection.decrement(id)
    }

    pub fn total(&self) -> f64 {
        self.selection.total(&self.services)
    }

    /// Currency of the catalog, taken from its first service.
    pub fn currency(&self) -> Option<&str> {
        self.services.first().map(|s| s.currency.as_str())
    }

    pub fn continue_to_booking(&mut self) -> Result<()> {
        if self.step == WizardStep::Services && self.selection.is_empty() {
            return Err(FormError::NoServiceSelected.into());
        }
        self.transition(WizardEvent::Continue)
    }

    pub fn back(&mut self) -> Result<()> {
        self.transition(WizardEvent::Back)
    }

    /// Validates and sends the booking. On success the wizard moves to
    /// [`WizardStep::Success`]; on any error it stays where it was.
    pub async fn submit(&mut self) -> Result<&SubmissionReceipt> {
        // fail before validating if the wizard is not on the form
        let next = self.step.apply(WizardEvent::Submitted)?;

        let receipt = submit_booking(&self.sink, &self.draft, &self.selection, self.policy).await?;
        if !receipt.delivered {
            tracing::warn!("Showing booking confirmation although the booking was not delivered");
        }

        self.step = next;
        Ok(&*self.last_receipt.insert(receipt))
    }

    /// Starts over after a completed booking with an empty selection and form.
    pub fn reset(&mut self) -> Result<()> {
        self.transition(WizardEvent::Reset)?;
        self.selection.clear();
        self.draft = BookingDraft::default();
        self.last_receipt = None;
        Ok(())
    }

    fn transition(&mut self, event: WizardEvent) -> Result<()> {
        let next = self.step.apply(event)?;
        tracing::debug!("Wizard {} -> {} on {}", self.step, next, event);
        self.step = next;
        Ok(())
    }
}
