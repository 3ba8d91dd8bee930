use crate::{
    api::Transport, console_log, instructions::FormController, navigator::Navigator,
};

impl<T: Transport, N: Navigator> FormController<T, N> {
    /// Checks a payment the provider sent the donor back for.
    pub async fn confirm_payment(&self, reference: &str) {
        let reference = reference.trim();
        if reference.is_empty() {
            return;
        }

        let result = self.api.verify_payment(reference).await;
        self.store.apply(|state| state.payment_verified(result));
        console_log!(
            "Payment {} verified: {}",
            reference,
            self.store.snapshot().payment_confirmed
        );
    }
}
