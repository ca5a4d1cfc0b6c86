pub mod reports;
pub mod shopper;
pub mod tester;

pub use shopper::{SessionSummary, ShopperAction, ShopperPlan, ShopperRunner};
pub use tester::*;
