//! `window.__tokoKueTest`, the hook the browser QA harness drives the page
//! through. Only installed in the browser, and only with `?test=1`.

#[cfg(any(test, target_arch = "wasm32"))]
mod shared;
#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use stub::use_test_bridge;
#[cfg(target_arch = "wasm32")]
pub use wasm::use_test_bridge;
