use crate::core::form::validate_booking;
use crate::core::selection::Selection;
use crate::core::{BookingDraft, BookingPayload, BookingSink, SubmissionPolicy};
use crate::utils::error::{BookingError, Result};

/// Outcome of a booking that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub payload: BookingPayload,
    /// `false` when the booking endpoint failed and the failure was swallowed.
    pub delivered: bool,
    pub failure: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Base address followed by whichever of building, floor/flat and landmark
/// are filled in, joined with ", ".
pub fn compose_full_address(draft: &BookingDraft) -> String {
    let mut parts = vec![draft.address.trim().to_string()];
    if let Some(building) = non_empty(&draft.building_number) {
        parts.push(format!("Building: {}", building));
    }
    if let Some(floor_flat) = non_empty(&draft.floor_flat) {
        parts.push(format!("Floor/Flat: {}", floor_flat));
    }
    if let Some(landmark) = non_empty(&draft.landmark) {
        parts.push(format!("Landmark: {}", landmark));
    }
    parts.join(", ")
}

pub fn build_payload(draft: &BookingDraft, selection: &Selection) -> BookingPayload {
    let address = compose_full_address(draft);
    BookingPayload {
        service_ids: selection.ids().map(str::to_string).collect(),
        quantities: selection.quantities().clone(),
        pickup_date: draft.pickup_date.clone(),
        pickup_time: draft.pickup_time.clone(),
        pickup_address: address.clone(),
        delivery_address: address,
        special_instructions: draft.special_instructions.clone().unwrap_or_default(),
        customer_name: draft.customer_name.clone(),
        customer_phone: draft.customer_phone.clone(),
    }
}

/// Validates the draft and sends it to `sink` once.
///
/// Validation failures never reach the sink. Sink failures are returned
/// under [`SubmissionPolicy::Strict`] and only recorded in the receipt under
/// [`SubmissionPolicy::BestEffort`].
pub async fn submit_booking<B: BookingSink + ?Sized>(
    sink: &B,
    draft: &BookingDraft,
    selection: &Selection,
    policy: SubmissionPolicy,
) -> Result<SubmissionReceipt> {
    validate_booking(draft, selection)?;

    let payload = build_payload(draft, selection);
    tracing::debug!(
        "Submitting booking for {} service(s) on {} {}",
        payload.service_ids.len(),
        payload.pickup_date,
        payload.pickup_time
    );

    match sink.submit_booking(&payload).await {
        Ok(()) => {
            tracing::info!("✅ Booking accepted");
            Ok(SubmissionReceipt {
                payload,
                delivered: true,
                failure: None,
            })
        }
        Err(e) => match policy {
            SubmissionPolicy::BestEffort => {
                tracing::warn!("Booking submission failed, continuing anyway: {}", e);
                Ok(SubmissionReceipt {
                    payload,
                    delivered: false,
                    failure: Some(e.to_string()),
                })
            }
            SubmissionPolicy::Strict => {
                tracing::error!("❌ Booking submission failed: {}", e);
                Err(BookingError::SubmissionFailed {
                    message: e.to_string(),
                })
            }
        },
    }
}
