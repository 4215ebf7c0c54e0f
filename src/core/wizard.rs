use crate::utils::error::{BookingError, Result};
use std::fmt;

/// The step of the booking wizard currently shown to the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Services,
    Booking,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Continue,
    Back,
    Submitted,
    Reset,
}

impl WizardStep {
    /// Returns the step reached by `event`, or an error if `event` is not
    /// available from this step. Guards on flow data live in the caller.
    pub fn apply(self, event: WizardEvent) -> Result<WizardStep> {
        use WizardEvent::*;
        use WizardStep::*;

        match (self, event) {
            (Services, Continue) => Ok(Booking),
            (Booking, Back) => Ok(Services),
            (Booking, Submitted) => Ok(Success),
            (Success, Reset) => Ok(Services),
            (from, event) => Err(BookingError::IllegalTransition {
                from: from.to_string(),
                event: event.to_string(),
            }),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Services => write!(f, "services"),
            Self::Booking => write!(f, "booking"),
            Self::Success => write!(f, "success"),
        }
    }
}

impl fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Back => write!(f, "go back"),
            Self::Submitted => write!(f, "submit"),
            Self::Reset => write!(f, "reset"),
        }
    }
}
