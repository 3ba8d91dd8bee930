pub mod event;
pub use event::*;

pub mod form;
pub use form::*;

pub mod page;
pub use page::*;

pub mod store;
pub use store::*;
