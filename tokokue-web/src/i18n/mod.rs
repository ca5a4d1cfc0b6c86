mod bundle;
mod render;

pub use bundle::I18nBundle;
pub use render::{render_notice, t, tr};
