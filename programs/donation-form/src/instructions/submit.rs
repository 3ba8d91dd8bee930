use crate::{
    api::Transport,
    config::CURRENCY,
    console_error, console_log,
    instructions::FormController,
    navigator::Navigator,
    state::PageState,
};

impl<T: Transport, N: Navigator> FormController<T, N> {
    /// Sends the donation and, once the provider authorizes it, hands the
    /// checkout URL to the navigator.
    ///
    /// Does nothing while another submission is in flight or while a required
    /// field is invalid. The request carries no idempotency key, so a second
    /// tab can still produce a duplicate donation server-side.
    pub async fn submit(&self) {
        let Some(request) = self.store.dispatch(PageState::begin_submit) else {
            console_log!("Submission skipped: busy or incomplete form");
            return;
        };
        console_log!(
            "Submitting donation of {} {} via {}",
            CURRENCY,
            request.amount,
            request.payment_method
        );

        let result = self.api.submit_donation(&request).await;
        if let Err(err) = &result {
            console_error!("Donation submission error: {}", err);
        }

        let delay = self.config.redirect_delay;
        let redirect = self
            .store
            .dispatch(|state| state.finish_submit(result, delay));

        if let Some(redirect) = redirect {
            console_log!(
                "Redirecting to payment provider in {}ms",
                redirect.delay.as_millis()
            );
            self.navigator.redirect(redirect);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use futures::{channel::oneshot, executor::block_on, join};
    use serde_json::json;

    use crate::{
        config::{Config, REDIRECT_DELAY},
        error::{ApiError, PAYMENT_INIT_FAILED, SUBMIT_ERROR},
        instructions::FormController,
        state::{FormField, Redirect, SubmissionStatus},
        testing::{MockTransport, RecordingNavigator},
    };

    type Page = FormController<MockTransport, RecordingNavigator>;

    fn page(transport: MockTransport, config: Config) -> Page {
        let page = FormController::new(transport, RecordingNavigator::default(), config);
        page.update_field(FormField::Name, "Abena");
        page.update_field(FormField::Email, "abena@example.com");
        page.update_field(FormField::Phone, "0271234567");
        page.select_preset(100).unwrap();
        page
    }

    fn authorized() -> serde_json::Value {
        json!({
            "status": "success",
            "data": {"reference": "FUND-abc12345", "authorization_url": "https://pay.example/abc"}
        })
    }

    #[test]
    fn success_redirects_after_fixed_delay() {
        let page = page(MockTransport::new().respond(200, authorized()), Config::default());

        block_on(page.submit());

        let state = page.state();
        assert_eq!(state.status, SubmissionStatus::Redirecting);
        assert!(!state.is_loading());
        assert_eq!(state.error, None);
        assert_eq!(
            page.navigator().redirects(),
            vec![Redirect {
                url: "https://pay.example/abc".into(),
                delay: REDIRECT_DELAY,
            }]
        );
    }

    #[test]
    fn redirect_delay_follows_config() {
        let config = Config::default().with_redirect_delay(Duration::from_millis(10));
        let page = page(MockTransport::new().respond(200, authorized()), config);

        block_on(page.submit());

        assert_eq!(page.navigator().redirects()[0].delay, Duration::from_millis(10));
    }

    #[test]
    fn error_status_in_body_shows_message_without_redirect() {
        let page = page(
            MockTransport::new().respond(200, json!({"status": "error"})),
            Config::default(),
        );

        block_on(page.submit());

        let state = page.state();
        assert_eq!(state.error.as_deref(), Some(PAYMENT_INIT_FAILED));
        assert!(!state.is_loading());
        assert!(page.navigator().redirects().is_empty());
    }

    #[test]
    fn transport_failure_shows_generic_message() {
        let page = page(
            MockTransport::new().fail(ApiError::NoResponse("timeout".into())),
            Config::default(),
        );

        block_on(page.submit());

        let state = page.state();
        assert_eq!(state.error.as_deref(), Some(SUBMIT_ERROR));
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert!(page.navigator().redirects().is_empty());
    }

    #[test]
    fn retry_after_failure_clears_previous_error() {
        let page = page(
            MockTransport::new()
                .respond(400, json!({"status": "error", "message": "Payment service unavailable"}))
                .respond(200, authorized()),
            Config::default(),
        );

        block_on(page.submit());
        assert_eq!(page.state().error.as_deref(), Some(SUBMIT_ERROR));

        block_on(page.submit());
        assert_eq!(page.state().error, None);
        assert_eq!(page.navigator().redirects().len(), 1);
        assert_eq!(page.api().transport().requests().len(), 2);
    }

    #[test]
    fn second_click_while_in_flight_sends_nothing() {
        let (release, gate) = oneshot::channel();
        let page = page(
            MockTransport::new().respond(200, authorized()).gated(gate),
            Config::default(),
        );

        let first = page.submit();
        let second = async {
            assert!(page.state().is_loading());
            page.submit().await;
            assert_eq!(page.api().transport().requests().len(), 1);
            release.send(()).unwrap();
        };
        block_on(async { join!(first, second) });

        assert_eq!(page.api().transport().requests().len(), 1);
        assert_eq!(page.navigator().redirects().len(), 1);
        assert!(!page.state().is_loading());
    }

    #[test]
    fn loading_is_visible_while_request_runs() {
        let page = page(MockTransport::new().respond(200, authorized()), Config::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        page.watch(move |state| sink.borrow_mut().push(state.status));

        block_on(page.submit());

        assert_eq!(
            *seen.borrow(),
            vec![SubmissionStatus::Submitting, SubmissionStatus::Redirecting]
        );
    }

    #[test]
    fn incomplete_form_sends_nothing() {
        let page = page(MockTransport::new().respond(200, authorized()), Config::default());
        page.update_field(FormField::Email, "");

        block_on(page.submit());

        let state = page.state();
        assert_eq!(state.invalid_fields, vec![FormField::Email]);
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(page.api().transport().requests().is_empty());
    }
}
