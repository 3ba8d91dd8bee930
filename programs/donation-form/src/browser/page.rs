use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::{
    browser::{BrowserNavigator, GlooTransport},
    config::Config,
    console_error,
    instructions::FormController,
    state::FormField,
    view::PageView,
};

type Controller = FormController<GlooTransport, BrowserNavigator>;

/// The donation page as seen from JavaScript.
///
/// The host renders `view()` (a JSON `PageView`) and forwards input events to
/// the setters. `onChange` fires with the fresh view after every transition.
#[wasm_bindgen]
pub struct DonationPage {
    controller: Controller,
}

#[wasm_bindgen]
impl DonationPage {
    /// Starts loading the fundraiser and, when the provider sent the donor
    /// back with `?reference=`, verifies that payment.
    #[wasm_bindgen(constructor)]
    pub fn new() -> DonationPage {
        let page = DonationPage {
            controller: FormController::new(GlooTransport, BrowserNavigator, Config::default()),
        };

        page.spawn(|controller| async move { controller.initialize().await });
        if let Some(reference) = return_reference() {
            page.spawn(|controller| async move { controller.confirm_payment(&reference).await });
        }
        page
    }

    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.controller.watch(move |state| {
            let view = match serde_json::to_string(&PageView::from(state)) {
                Ok(view) => view,
                Err(err) => {
                    console_error!("Failed to serialize view: {}", err);
                    return;
                }
            };
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&view)) {
                console_error!("onChange callback threw: {:?}", err);
            }
        });
    }

    pub fn view(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&PageView::from(&self.controller.state()))?)
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&self, value: String) {
        self.controller.update_field(FormField::Name, value);
    }

    #[wasm_bindgen(js_name = setEmail)]
    pub fn set_email(&self, value: String) {
        self.controller.update_field(FormField::Email, value);
    }

    #[wasm_bindgen(js_name = setPhone)]
    pub fn set_phone(&self, value: String) {
        self.controller.update_field(FormField::Phone, value);
    }

    #[wasm_bindgen(js_name = setMessage)]
    pub fn set_message(&self, value: String) {
        self.controller.update_field(FormField::Message, value);
    }

    #[wasm_bindgen(js_name = setAmount)]
    pub fn set_amount(&self, value: String) {
        self.controller.update_field(FormField::Amount, value);
    }

    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&self, amount: u32) -> Result<(), JsError> {
        Ok(self.controller.select_preset(amount)?)
    }

    #[wasm_bindgen(js_name = setPaymentMethod)]
    pub fn set_payment_method(&self, id: &str) -> Result<(), JsError> {
        Ok(self.controller.set_payment_method(id)?)
    }

    pub fn submit(&self) {
        self.spawn(|controller| async move { controller.submit().await });
    }
}

impl Default for DonationPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DonationPage {
    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Controller) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(task(self.controller.clone()));
    }
}

fn return_reference() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params
        .get("reference")
        .filter(|reference| !reference.trim().is_empty())
}
