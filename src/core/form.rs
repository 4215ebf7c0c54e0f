use crate::core::selection::Selection;
use crate::domain::model::BookingDraft;
use thiserror::Error;

/// First missing piece of a booking, in the order the form is checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Phone is required")]
    MissingPhone,
    #[error("Address is required")]
    MissingAddress,
    #[error("Pickup date is required")]
    MissingPickupDate,
    #[error("Pickup time is required")]
    MissingPickupTime,
    #[error("Please select at least one service")]
    NoServiceSelected,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks name, phone, address, pickup date, pickup time and then the
/// selection, stopping at the first failure.
pub fn validate_booking(draft: &BookingDraft, selection: &Selection) -> Result<(), FormError> {
    if is_blank(&draft.customer_name) {
        return Err(FormError::MissingName);
    }
    if is_blank(&draft.customer_phone) {
        return Err(FormError::MissingPhone);
    }
    if is_blank(&draft.address) {
        return Err(FormError::MissingAddress);
    }
    if is_blank(&draft.pickup_date) {
        return Err(FormError::MissingPickupDate);
    }
    if is_blank(&draft.pickup_time) {
        return Err(FormError::MissingPickupTime);
    }
    if selection.is_empty() {
        return Err(FormError::NoServiceSelected);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> BookingDraft {
        BookingDraft {
            customer_name: "Sara".to_string(),
            customer_phone: "+973 3300 0000".to_string(),
            address: "Flat 2".to_string(),
            pickup_date: "2026-10-20".to_string(),
            pickup_time: "09:30".to_string(),
            ..Default::default()
        }
    }

    fn one_service() -> Selection {
        let mut selection = Selection::new();
        selection.toggle("1");
        selection
    }

    #[test]
    fn test_complete_booking_passes() {
        assert_eq!(validate_booking(&complete_draft(), &one_service()), Ok(()));
    }

    #[test]
    fn test_name_reported_before_phone() {
        let draft = BookingDraft {
            customer_name: String::new(),
            customer_phone: String::new(),
            ..complete_draft()
        };

        let err = validate_booking(&draft, &one_service()).unwrap_err();
        assert_eq!(err, FormError::MissingName);
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_each_field_in_order() {
        let selection = one_service();

        let mut draft = complete_draft();
        draft.pickup_time.clear();
        draft.pickup_date.clear();
        assert_eq!(
            validate_booking(&draft, &selection),
            Err(FormError::MissingPickupDate)
        );

        let mut draft = complete_draft();
        draft.pickup_time.clear();
        assert_eq!(
            validate_booking(&draft, &selection),
            Err(FormError::MissingPickupTime)
        );

        let mut draft = complete_draft();
        draft.address = "   ".to_string();
        draft.pickup_date.clear();
        assert_eq!(
            validate_booking(&draft, &selection),
            Err(FormError::MissingAddress)
        );

        let mut draft = complete_draft();
        draft.customer_phone.clear();
        assert_eq!(
            validate_booking(&draft, &Selection::new()),
            Err(FormError::MissingPhone)
        );
    }

    #[test]
    fn test_empty_selection_checked_last() {
        assert_eq!(
            validate_booking(&complete_draft(), &Selection::new()),
            Err(FormError::NoServiceSelected)
        );
    }
}
