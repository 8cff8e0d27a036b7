use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    StatusCode,
    Url,
};

use crate::core::FlipdeckError;

const AGENT: &str = "flipdeck/0.1 (+reqwest)";

pub fn http_client() -> Result<reqwest::Client, FlipdeckError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| FlipdeckError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn blocking_http_client() -> Result<reqwest::blocking::Client, FlipdeckError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| FlipdeckError::Custom(format!("HTTP client build failed: {e}")))
}

pub async fn fetch_text(client: &reqwest::Client, url: &Url) -> Result<String, FlipdeckError> {
    let resp = client.get(url.clone()).header(USER_AGENT, AGENT).send().await?;
    ensure_success(resp.status(), resp.url())?;
    Ok(resp.text().await?)
}

/// Used by the clip loader's worker threads, which run outside any runtime.
pub fn fetch_bytes(client: &reqwest::blocking::Client, url: &Url) -> Result<Vec<u8>, FlipdeckError> {
    let resp = client.get(url.clone()).header(USER_AGENT, AGENT).send()?;
    ensure_success(resp.status(), resp.url())?;
    Ok(resp.bytes()?.to_vec())
}

fn ensure_success(status: StatusCode, url: &Url) -> Result<(), FlipdeckError> {
    if !status.is_success() {
        return Err(FlipdeckError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }
    Ok(())
}
