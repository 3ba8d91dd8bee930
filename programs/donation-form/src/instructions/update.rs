use crate::{
    api::Transport,
    error::FormError,
    instructions::FormController,
    navigator::Navigator,
    state::{FormField, PaymentMethod, PresetAmount},
};

impl<T: Transport, N: Navigator> FormController<T, N> {
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.store.apply(|state| state.update_field(field, value));
    }

    pub fn select_preset(&self, amount: u32) -> Result<(), FormError> {
        let preset = PresetAmount::try_from(amount)?;
        self.store.apply(|state| state.select_preset(preset));
        Ok(())
    }

    pub fn select_payment_method(&self, method: PaymentMethod) {
        self.store.apply(|state| state.select_payment_method(method));
    }

    /// Same as `select_payment_method`, from the id the page's radio group uses.
    pub fn set_payment_method(&self, id: &str) -> Result<(), FormError> {
        let method = id.parse()?;
        self.select_payment_method(method);
        Ok(())
    }
}
