pub mod bridge;
pub mod session;

pub use bridge::{ShopState, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
