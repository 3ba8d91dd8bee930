use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{
    api::{HttpRequest, Transport},
    config::Config,
    console_error,
    error::ApiError,
    state::{ApiResponse, DonationRecord, DonationRequest, FundraiserEvent, PaymentAuthorization},
};

/// Stateless client for the fundraiser backend. No retries, no caching.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    submit_timeout: Duration,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &Config::default())
    }

    pub fn with_config(transport: T, config: &Config) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            submit_timeout: config.submit_timeout,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get_event_details(&self) -> Result<ApiResponse<FundraiserEvent>, ApiError> {
        let request = HttpRequest::get(self.url("/event"));
        self.fetch("fetching event details", request).await
    }

    pub async fn submit_donation(
        &self,
        donation: &DonationRequest,
    ) -> Result<ApiResponse<PaymentAuthorization>, ApiError> {
        let body = match serde_json::to_string(donation) {
            Ok(body) => body,
            Err(err) => {
                let err = ApiError::Setup(err.to_string());
                report("submitting donation", &err);
                return Err(err);
            }
        };
        let request = HttpRequest::post(self.url("/donate"), body).timeout(self.submit_timeout);
        self.fetch("submitting donation", request).await
    }

    pub async fn get_donations(&self) -> Result<ApiResponse<Vec<DonationRecord>>, ApiError> {
        let request = HttpRequest::get(self.url("/donations"));
        self.fetch("fetching donations", request).await
    }

    pub async fn verify_payment(
        &self,
        reference: &str,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let request = HttpRequest::get(self.url("/verify_payment")).query("reference", reference);
        self.fetch("verifying payment", request).await
    }

    pub async fn health(&self) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let request = HttpRequest::get(self.url("/health"));
        self.fetch("checking backend health", request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        context: &str,
        request: HttpRequest,
    ) -> Result<R, ApiError> {
        let result = self.exchange(request).await;
        if let Err(err) = &result {
            report(context, err);
        }
        result
    }

    async fn exchange<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.is_ok() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn report(context: &str, err: &ApiError) {
    console_error!("Error {}: {}", context, err);
    match err {
        ApiError::Status { status, body } => {
            console_error!("Response data: {}", body);
            console_error!("Response status: {}", status);
        }
        ApiError::NoResponse(_) => console_error!("Request was made but no response received"),
        ApiError::Setup(message) => console_error!("Error setting up request: {}", message),
        ApiError::Decode(_) => {}
    }
}
