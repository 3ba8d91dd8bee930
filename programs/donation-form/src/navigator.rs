use crate::state::Redirect;

/// Leaves the page once a submission has been authorized.
pub trait Navigator {
    /// Schedules navigation to `redirect.url` after `redirect.delay`. Must not
    /// block; the page keeps rendering until the navigation happens.
    fn redirect(&self, redirect: Redirect);
}
