use std::{cell::RefCell, rc::Rc};

use crate::state::PageState;

type Watcher = Rc<dyn Fn(&PageState)>;

#[derive(Default)]
struct Shared {
    state: RefCell<PageState>,
    watcher: RefCell<Option<Watcher>>,
}

/// Shared handle to the current `PageState`.
///
/// The state is borrowed only while one transition runs, so callers may hold
/// a `Store` across awaits. The watcher sees every committed state.
#[derive(Clone, Default)]
pub struct Store(Rc<Shared>);

impl Store {
    pub fn new(state: PageState) -> Self {
        Self(Rc::new(Shared {
            state: RefCell::new(state),
            watcher: RefCell::new(None),
        }))
    }

    pub fn snapshot(&self) -> PageState {
        self.0.state.borrow().clone()
    }

    pub fn watch(&self, watcher: impl Fn(&PageState) + 'static) {
        *self.0.watcher.borrow_mut() = Some(Rc::new(watcher));
    }

    pub fn apply(&self, transition: impl FnOnce(PageState) -> PageState) {
        self.dispatch(|state| (transition(state), ()))
    }

    /// Runs a transition that also produces an output for the caller.
    pub fn dispatch<R>(&self, transition: impl FnOnce(PageState) -> (PageState, R)) -> R {
        let output = {
            let mut slot = self.0.state.borrow_mut();
            let (next, output) = transition(std::mem::take(&mut *slot));
            *slot = next;
            output
        };
        self.notify();
        output
    }

    /// The slot is released before the watcher runs, so it may replace itself.
    fn notify(&self) {
        let watcher = self.0.watcher.borrow().clone();
        if let Some(watcher) = watcher {
            watcher(&self.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, SubmissionStatus};

    #[test]
    fn clones_share_one_state() {
        let store = Store::default();
        let other = store.clone();
        other.apply(|state| state.update_field(FormField::Name, "Esi".into()));
        assert_eq!(store.snapshot().form.name, "Esi");
    }

    #[test]
    fn dispatch_returns_transition_output() {
        let store = Store::default();
        let request = store.dispatch(PageState::begin_submit);
        assert!(request.is_none());
        assert_eq!(store.snapshot().status, SubmissionStatus::Idle);
        assert_eq!(store.snapshot().invalid_fields.len(), 4);
    }

    #[test]
    fn watcher_sees_each_committed_state() {
        let store = Store::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.watch(move |state| sink.borrow_mut().push(state.form.phone.clone()));

        store.apply(|state| state.update_field(FormField::Phone, "02".into()));
        store.apply(|state| state.update_field(FormField::Phone, "024".into()));

        assert_eq!(*seen.borrow(), vec!["02".to_string(), "024".to_string()]);
    }

    #[test]
    fn watcher_may_replace_itself() {
        let store = Store::default();
        let replaced = Rc::new(RefCell::new(0));
        let handle = store.clone();
        let counter = Rc::clone(&replaced);
        store.watch(move |_| {
            let counter = Rc::clone(&counter);
            handle.watch(move |_| *counter.borrow_mut() += 1);
        });

        store.apply(|state| state.update_field(FormField::Name, "A".into()));
        store.apply(|state| state.update_field(FormField::Name, "AB".into()));

        assert_eq!(*replaced.borrow(), 1);
        assert_eq!(store.snapshot().form.name, "AB");
    }
}
