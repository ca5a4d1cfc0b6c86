use serde_json::Value;
use std::cell::RefCell;

/// Storefront copy ships in Indonesian only.
const DEFAULT_LANG: &str = "id";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations() -> Value {
    match serde_json::from_str(include_str!("../../static/i18n/id.json")) {
        Ok(value) => value,
        Err(err) => {
            log::error!("invalid locale bundle: {err}");
            Value::Object(serde_json::Map::new())
        }
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: load_translations(),
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}
