use gloo_timers::callback::Timeout;

use crate::{console_error, navigator::Navigator, state::Redirect};

/// Sends the whole tab to the payment provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, redirect: Redirect) {
        let millis = u32::try_from(redirect.delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let Some(window) = web_sys::window() else {
                console_error!("No window to redirect from");
                return;
            };
            if let Err(err) = window.location().set_href(&redirect.url) {
                console_error!("Failed to navigate to {}: {:?}", redirect.url, err);
            }
        })
        .forget();
    }
}
