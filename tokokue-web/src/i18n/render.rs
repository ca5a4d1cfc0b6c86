use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;
use tokokue_core::Notice;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn interpolate(mut text: String, args: Option<&BTreeMap<&str, &str>>) -> String {
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    text
}

/// Translate a key, returning the key itself when it is missing.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and substitute `{name}` style placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(Value::as_str)
            .map_or_else(|| key.to_string(), |s| interpolate(s.to_string(), args))
    })
}

/// Render a storefront notice as display text.
#[must_use]
pub fn render_notice(notice: &Notice) -> String {
    let vars = notice.vars();
    tr(notice.key(), Some(&vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_key() {
        assert_eq!(t("nope.missing"), "nope.missing");
        assert_eq!(t("cart"), "cart");
    }

    #[test]
    fn placeholders_are_substituted() {
        let mut vars = BTreeMap::new();
        vars.insert("name", "Brownies");
        assert_eq!(tr("cart.remove", Some(&vars)), "Hapus Brownies");
    }

    #[test]
    fn notices_render_exact_copy() {
        let cases = [
            (
                Notice::Added {
                    name: String::from("Red Velvet"),
                },
                "Red Velvet ditambahkan ke keranjang!",
            ),
            (
                Notice::Incremented {
                    name: String::from("Red Velvet"),
                },
                "Red Velvet jumlah ditambah!",
            ),
            (
                Notice::Removed {
                    name: String::from("Tiramisu"),
                },
                "Tiramisu dihapus dari keranjang",
            ),
            (Notice::Cleared, "Keranjang telah dikosongkan"),
            (Notice::CartEmpty, "Keranjang belanja masih kosong"),
            (Notice::NoResults, "Tidak ada hasil yang ditemukan"),
            (Notice::MessageSent, "Pesan terkirim! Form telah direset."),
        ];
        for (notice, expected) in cases {
            assert_eq!(render_notice(&notice), expected);
        }
        assert_eq!(
            render_notice(&Notice::CheckoutThanks),
            "Terima kasih telah berbelanja di Cake Castle!\nPesanan Anda akan segera diproses."
        );
    }
}
