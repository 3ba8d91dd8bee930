use std::time::Duration;

use serde::Serialize;

use crate::{
    error::{
        ApiError, EVENT_FETCH_ERROR, EVENT_LOAD_FAILED, PAYMENT_INIT_FAILED,
        PAYMENT_NOT_VERIFIED, SUBMIT_ERROR,
    },
    state::{
        ApiResponse, DonationFormState, DonationRequest, FormField, FundraiserEvent,
        PaymentAuthorization, PaymentMethod, PresetAmount,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Redirecting,
    Failed,
}

/// Navigation the page must perform after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
    pub delay: Duration,
}

/// Everything the page shows. Transitions consume the record and hand back
/// the next one; nothing mutates it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub event: FundraiserEvent,
    pub form: DonationFormState,
    pub status: SubmissionStatus,
    pub error: Option<String>,
    pub invalid_fields: Vec<FormField>,
    pub payment_confirmed: bool,
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn event_loaded(self, result: Result<ApiResponse<FundraiserEvent>, ApiError>) -> Self {
        match result {
            Ok(response) => match response.into_success() {
                Some(event) => Self { event, ..self },
                None => Self {
                    error: Some(EVENT_LOAD_FAILED.to_string()),
                    ..self
                },
            },
            Err(_) => Self {
                error: Some(EVENT_FETCH_ERROR.to_string()),
                ..self
            },
        }
    }

    pub fn update_field(self, field: FormField, value: String) -> Self {
        let invalid_fields = self
            .invalid_fields
            .into_iter()
            .filter(|invalid| *invalid != field)
            .collect();
        Self {
            form: self.form.with_field(field, value),
            invalid_fields,
            ..self
        }
    }

    /// Quick-select buttons write into the same field free typing does.
    pub fn select_preset(self, preset: PresetAmount) -> Self {
        self.update_field(FormField::Amount, preset.canonical())
    }

    pub fn select_payment_method(self, payment_method: PaymentMethod) -> Self {
        Self {
            form: DonationFormState {
                payment_method,
                ..self.form
            },
            ..self
        }
    }

    /// Moves to `Submitting` and yields the request to send. Yields nothing
    /// while a submission is in flight or when required fields are invalid.
    pub fn begin_submit(self) -> (Self, Option<DonationRequest>) {
        if self.is_loading() {
            return (self, None);
        }

        let invalid_fields = self.form.invalid_fields();
        if !invalid_fields.is_empty() {
            return (
                Self {
                    invalid_fields,
                    ..self
                },
                None,
            );
        }

        let request = self.form.to_request();
        let next = Self {
            status: SubmissionStatus::Submitting,
            error: None,
            invalid_fields: Vec::new(),
            ..self
        };
        (next, Some(request))
    }

    /// Settles an in-flight submission. Loading is cleared on every path.
    pub fn finish_submit(
        self,
        result: Result<ApiResponse<PaymentAuthorization>, ApiError>,
        delay: Duration,
    ) -> (Self, Option<Redirect>) {
        let url = match result {
            Ok(response) => match response
                .into_success()
                .and_then(|authorization| authorization.authorization_url)
            {
                Some(url) if !url.is_empty() => url,
                _ => return (self.failed(PAYMENT_INIT_FAILED), None),
            },
            Err(_) => return (self.failed(SUBMIT_ERROR), None),
        };

        let next = Self {
            status: SubmissionStatus::Redirecting,
            ..self
        };
        (next, Some(Redirect { url, delay }))
    }

    pub fn payment_verified(self, result: Result<ApiResponse<serde_json::Value>, ApiError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Self {
                payment_confirmed: true,
                ..self
            },
            _ => Self {
                payment_confirmed: false,
                error: Some(PAYMENT_NOT_VERIFIED.to_string()),
                ..self
            },
        }
    }

    fn failed(self, message: &str) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            error: Some(message.to_string()),
            ..self
        }
    }
}
