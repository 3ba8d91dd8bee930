use thiserror::Error;

pub const EVENT_LOAD_FAILED: &str = "Failed to load event details.";
pub const EVENT_FETCH_ERROR: &str = "An error occurred while fetching event details.";
pub const PAYMENT_INIT_FAILED: &str = "Payment initialization failed. Please try again.";
pub const SUBMIT_ERROR: &str = "An error occurred. Please try again later.";
pub const PAYMENT_NOT_VERIFIED: &str = "We could not verify your payment.";

/// Failures surfaced by the API client. Callers decide what the donor sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("no response received: {0}")]
    NoResponse(String),

    #[error("request setup failed: {0}")]
    Setup(String),

    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown payment method `{0}`")]
    UnknownPaymentMethod(String),

    #[error("{0} is not a preset amount")]
    UnknownPreset(u32),
}
