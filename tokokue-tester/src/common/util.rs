use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

const STATE_SCRIPT: &str =
    "return window.__tokoKueTest ? window.__tokoKueTest.state() : null";

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{stamp}")
}

/// Everything worth keeping from a failed browser run.
#[derive(Debug, Default)]
struct ArtifactBundle {
    screenshot: Option<Vec<u8>>,
    page_source: Option<String>,
    cart_state: Option<Value>,
    error_chain: String,
}

impl ArtifactBundle {
    async fn collect(driver: &WebDriver, err: &anyhow::Error) -> Self {
        let cart_state = match driver.execute(STATE_SCRIPT, Vec::new()).await {
            Ok(ret) => Some(ret.json().clone()).filter(|v| !v.is_null()),
            Err(e) => {
                log::debug!("bridge state unavailable: {e}");
                None
            }
        };
        Self {
            screenshot: driver.screenshot_as_png().await.ok(),
            page_source: driver.source().await.ok(),
            cart_state,
            error_chain: format!("{err:#}"),
        }
    }

    /// Best effort: a payload that fails to write does not stop the others.
    fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        let mut files: Vec<(&str, Vec<u8>)> =
            vec![("error.txt", self.error_chain.clone().into_bytes())];
        if let Some(png) = &self.screenshot {
            files.push(("screenshot.png", png.clone()));
        }
        if let Some(html) = &self.page_source {
            files.push(("dom.html", html.clone().into_bytes()));
        }
        if let Some(state) = &self.cart_state {
            files.push(("cart-state.json", serde_json::to_vec_pretty(state)?));
        }

        for (name, bytes) in files {
            if let Err(e) = fs::write(dir.join(name), bytes) {
                log::warn!("writing {name}: {e}");
            }
        }
        Ok(())
    }
}

/// Save a screenshot, the page source and the bridge snapshot next to the error chain.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    ArtifactBundle::collect(driver, err)
        .await
        .write_to(Path::new(dir))
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,checkout,  search-filter ");
        assert_eq!(parts, vec!["smoke", "checkout", "search-filter"]);
    }

    #[test]
    fn artifacts_dir_includes_key_segments() {
        let dir = artifacts_dir("target/out", "firefox", "add-twice", 7);
        assert!(dir.contains("target/out/firefox/add-twice/seed-7/"));
    }

    #[test]
    fn bundle_writes_only_what_was_collected() {
        let base = std::env::temp_dir().join(format!(
            "tokokue-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let bundle = ArtifactBundle {
            screenshot: None,
            page_source: Some(String::from("<html />")),
            cart_state: Some(json!({ "total": 90000, "itemCount": 1, "lines": [] })),
            error_chain: String::from("boom"),
        };
        bundle.write_to(&base).expect("write artifacts");

        assert!(!base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("cart-state.json").exists());
        assert_eq!(
            fs::read_to_string(base.join("error.txt")).expect("error file"),
            "boom"
        );
    }
}
