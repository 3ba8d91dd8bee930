use std::{cell::RefCell, collections::VecDeque};

use futures::channel::oneshot;

use crate::{
    api::{HttpRequest, HttpResponse, Transport},
    error::ApiError,
    navigator::Navigator,
    state::Redirect,
};

/// Replays canned answers in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_text(status, &body.to_string())
    }

    pub fn respond_text(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    /// The next request stays pending until the sender fires or is dropped.
    pub fn gated(self, gate: oneshot::Receiver<()>) -> Self {
        *self.gate.borrow_mut() = Some(gate);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::NoResponse("no canned response left".into())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<Redirect>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, redirect: Redirect) {
        self.redirects.borrow_mut().push(redirect);
    }
}
