//! Glue between the controller and a real browser page.

pub mod navigator;
pub use navigator::*;

pub mod page;
pub use page::*;

pub mod transport;
pub use transport::*;

#[cfg(not(feature = "no-entrypoint"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    crate::console_log!("donation form module loaded");
}
