use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use crate::{
    api::{HttpRequest, HttpResponse, Method, Transport},
    error::ApiError,
};

/// `fetch`-backed transport. A request with a timeout gets its own
/// `AbortController`, aborted when the timer fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let abort = match request.timeout {
            Some(_) => Some(
                AbortController::new()
                    .map_err(|err| ApiError::Setup(format!("{:?}", err)))?,
            ),
            None => None,
        };
        let signal = abort.as_ref().map(AbortController::signal);

        let builder = builder(&request).abort_signal(signal.as_ref());
        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Setup(err.to_string()))?;

        // Dropping the timer cancels it.
        let _timer = abort.zip(request.timeout).map(|(abort, timeout)| {
            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || abort.abort())
        });

        let response = prepared
            .send()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn builder(request: &HttpRequest) -> RequestBuilder {
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    builder.query(
        request
            .query
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )
}
