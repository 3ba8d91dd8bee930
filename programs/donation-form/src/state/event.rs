use serde::{Deserialize, Serialize};

use crate::config::{PLACEHOLDER_EVENT_DESCRIPTION, PLACEHOLDER_EVENT_NAME};

/// Envelope every backend route answers with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }

    /// Payload of a successful response; `None` for any other status.
    pub fn into_success(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}

/// Campaign shown above the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundraiserEvent {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub goal: Option<f64>,
    #[serde(default)]
    pub current_amount: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Default for FundraiserEvent {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_EVENT_NAME.to_string(),
            description: PLACEHOLDER_EVENT_DESCRIPTION.to_string(),
            id: None,
            goal: None,
            current_amount: None,
            start_date: None,
            end_date: None,
            status: None,
        }
    }
}

impl FundraiserEvent {
    /// Share of the goal raised so far, capped at 100.
    pub fn progress_percent(&self) -> Option<u8> {
        let goal = self.goal.filter(|goal| *goal > 0.0)?;
        let raised = self.current_amount.unwrap_or(0.0).max(0.0);
        Some((raised / goal * 100.0).min(100.0).floor() as u8)
    }
}

/// Data returned by `/donate` once the provider accepted the transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAuthorization {
    #[serde(default)]
    pub authorization_url: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

/// One row of `/donations`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub message: Option<String>,
    pub payment_method: String,
    pub payment_status: String,
    pub reference: String,
    pub created_at: String,
}
