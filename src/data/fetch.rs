//! Startup loading of the two JSON documents.
//!
//! Both documents are requested in parallel and the join is all-or-nothing:
//! if either request fails the whole load fails and the app stays disabled.
//! There is no retry; a failed load is fatal for the session.

use anyhow::{Context, Result};
use poll_promise::Promise;
use serde::de::DeserializeOwned;

use super::model::{AppConfig, AppData, ProgramCatalog};
use crate::config::DataSources;

/// Load both documents concurrently.
pub async fn load_app_data(sources: &DataSources) -> Result<AppData> {
    let (config, programs) = tokio::try_join!(
        load_document::<AppConfig>(&sources.config_location),
        load_document::<ProgramCatalog>(&sources.program_location),
    )?;

    Ok(AppData { config, programs })
}

/// Spawn the startup load on a worker thread; the UI polls the returned
/// promise each frame until it settles.
pub fn spawn_app_data_load(sources: DataSources) -> Promise<Result<AppData>> {
    Promise::spawn_thread("load_app_data", move || {
        let runtime =
            tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
        runtime.block_on(load_app_data(&sources))
    })
}

/// A document location is either an http(s) URL or a local file path.
async fn load_document<T: DeserializeOwned>(location: &str) -> Result<T> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_json(location).await
    } else {
        read_json_file(location).await
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("{url} answered with an error status"))?;

    response
        .json::<T>()
        .await
        .with_context(|| format!("{url} returned malformed JSON"))
}

async fn read_json_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read {path}"))?;

    serde_json::from_slice(&bytes).with_context(|| format!("{path} holds malformed JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const CONFIG_JSON: &str = r#"{
        "baseUrl": "https://x.org",
        "konfirmasiDefault": "0812",
        "rekening": {"bsi": "1", "anBSI": "A", "mandiri": "2", "anMandiri": "B"}
    }"#;

    const PROGRAM_JSON: &str =
        r#"{"promo": {"name": "Promo", "path": "/promo", "text": "Join {LINK} now"}}"#;

    fn scratch_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("narasi-gen-tests")
            .join(format!("{}-{}", std::process::id(), test_name));
        fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Runtime::new()
            .expect("test runtime")
            .block_on(future)
    }

    #[test]
    fn loads_both_documents_from_a_directory_root() {
        let dir = scratch_dir("loads_both");
        fs::write(dir.join("data.json"), CONFIG_JSON).unwrap();
        fs::write(dir.join("program.json"), PROGRAM_JSON).unwrap();

        let sources = DataSources::resolve(dir.to_str().unwrap());
        let data = block_on(load_app_data(&sources)).expect("load should succeed");

        assert_eq!(data.config.base_url, "https://x.org");
        assert_eq!(data.programs.len(), 1);
        assert_eq!(
            data.programs.get("promo").map(|p| p.path.as_str()),
            Some("/promo")
        );
    }

    #[test]
    fn missing_program_document_fails_the_whole_load() {
        let dir = scratch_dir("missing_program");
        fs::write(dir.join("data.json"), CONFIG_JSON).unwrap();
        // no program.json

        let sources = DataSources::resolve(dir.to_str().unwrap());
        assert!(block_on(load_app_data(&sources)).is_err());
    }

    #[test]
    fn malformed_json_fails_the_load() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("data.json"), CONFIG_JSON).unwrap();
        fs::write(dir.join("program.json"), "{not json").unwrap();

        let sources = DataSources::resolve(dir.to_str().unwrap());
        assert!(block_on(load_app_data(&sources)).is_err());
    }
}
