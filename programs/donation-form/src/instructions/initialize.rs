use crate::{
    api::Transport, console_error, instructions::FormController, navigator::Navigator,
};

impl<T: Transport, N: Navigator> FormController<T, N> {
    /// Loads the fundraiser shown above the form. Runs once per page; a
    /// failure leaves the placeholder in place and is not retried.
    pub async fn initialize(&self) {
        let result = self.api.get_event_details().await;
        if let Err(err) = &result {
            console_error!("Failed to fetch event details: {}", err);
        }
        self.store.apply(|state| state.event_loaded(result));
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use crate::{
        config::{Config, PLACEHOLDER_EVENT_NAME},
        error::{ApiError, EVENT_FETCH_ERROR, EVENT_LOAD_FAILED},
        instructions::FormController,
        testing::{MockTransport, RecordingNavigator},
    };

    fn controller(transport: MockTransport) -> FormController<MockTransport, RecordingNavigator> {
        FormController::new(transport, RecordingNavigator::default(), Config::default())
    }

    #[test]
    fn successful_fetch_updates_name_and_description() {
        let page = controller(MockTransport::new().respond(
            200,
            json!({"status": "success", "data": {"name": "X", "description": "Y"}}),
        ));

        block_on(page.initialize());

        let state = page.state();
        assert_eq!(state.event.name, "X");
        assert_eq!(state.event.description, "Y");
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_fetch_keeps_placeholder_and_shows_error() {
        let page = controller(MockTransport::new().fail(ApiError::NoResponse("offline".into())));

        block_on(page.initialize());

        let state = page.state();
        assert_eq!(state.event.name, PLACEHOLDER_EVENT_NAME);
        assert_eq!(state.error.as_deref(), Some(EVENT_FETCH_ERROR));
        assert_eq!(page.api().transport().requests().len(), 1);
    }

    #[test]
    fn error_envelope_keeps_placeholder() {
        let page = controller(
            MockTransport::new().respond(200, json!({"status": "error", "message": "closed"})),
        );

        block_on(page.initialize());

        let state = page.state();
        assert_eq!(state.event.name, PLACEHOLDER_EVENT_NAME);
        assert_eq!(state.error.as_deref(), Some(EVENT_LOAD_FAILED));
    }
}
