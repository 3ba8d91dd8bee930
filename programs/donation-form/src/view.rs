//! What the page renders, derived from `PageState`.

use serde::Serialize;

use crate::{
    config::CURRENCY,
    state::{FormField, PageState, PaymentMethod, PresetAmount},
};

pub const SUBMIT_LABEL: &str = "Donate Now";
pub const SUBMIT_LABEL_BUSY: &str = "Processing...";
pub const THANK_YOU: &str = "Thank you for your contribution!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresetView {
    pub amount: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentMethodView {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub event_name: String,
    pub event_description: String,
    pub progress_percent: Option<u8>,
    pub error: Option<String>,
    pub success_message: Option<&'static str>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub amount: String,
    pub presets: Vec<PresetView>,
    pub payment_methods: Vec<PaymentMethodView>,
    pub invalid_fields: Vec<FormField>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

impl From<&PageState> for PageView {
    fn from(state: &PageState) -> Self {
        let form = &state.form;
        let loading = state.is_loading();

        // A preset lights up whenever the field holds its exact text.
        let presets = PresetAmount::all()
            .map(|preset| PresetView {
                amount: preset.value(),
                label: format!("{} {}", CURRENCY, preset.value()),
                selected: form.amount == preset.canonical(),
            })
            .collect();

        let payment_methods = PaymentMethod::ALL
            .into_iter()
            .map(|method| PaymentMethodView {
                id: method.id(),
                title: method.title(),
                detail: method.detail(),
                selected: form.payment_method == method,
            })
            .collect();

        Self {
            event_name: state.event.name.clone(),
            event_description: state.event.description.clone(),
            progress_percent: state.event.progress_percent(),
            error: state.error.clone(),
            success_message: state.payment_confirmed.then_some(THANK_YOU),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            message: form.message.clone(),
            amount: form.amount.clone(),
            presets,
            payment_methods,
            invalid_fields: state.invalid_fields.clone(),
            submit_label: if loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
            submit_disabled: loading,
        }
    }
}
