use std::rc::Rc;

use crate::{
    api::{ApiClient, Transport},
    config::Config,
    navigator::Navigator,
    state::{PageState, Store},
};

pub mod confirm_payment;
pub mod initialize;
pub mod submit;
pub mod update;

/// Drives one donation page: owns its state and talks to the backend.
///
/// Cloning is cheap and every clone drives the same page.
pub struct FormController<T, N> {
    store: Store,
    api: Rc<ApiClient<T>>,
    navigator: Rc<N>,
    config: Config,
}

impl<T, N> Clone for FormController<T, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: Rc::clone(&self.api),
            navigator: Rc::clone(&self.navigator),
            config: self.config.clone(),
        }
    }
}

impl<T: Transport, N: Navigator> FormController<T, N> {
    pub fn new(transport: T, navigator: N, config: Config) -> Self {
        Self {
            store: Store::new(PageState::default()),
            api: Rc::new(ApiClient::with_config(transport, &config)),
            navigator: Rc::new(navigator),
            config,
        }
    }

    pub fn state(&self) -> PageState {
        self.store.snapshot()
    }

    /// Called with the new state after every transition.
    pub fn watch(&self, watcher: impl Fn(&PageState) + 'static) {
        self.store.watch(watcher);
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
