use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_BACKOFF_SECS: u64 = 2;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// GET with bounded retries and exponential backoff; the NHL API drops
/// connections under load. Waits `backoff * 2^attempt` seconds between
/// attempts and fails hard with the last error once attempts are exhausted.
pub fn get_with_retry(url: &str) -> Result<String> {
    let client = http_client()?;
    let max_attempts = env_u32("HTTP_MAX_RETRIES", DEFAULT_MAX_ATTEMPTS).clamp(1, 10);
    let backoff = env_u64("HTTP_BACKOFF_SECS", DEFAULT_BACKOFF_SECS).clamp(1, 60);

    let mut last_error: Option<anyhow::Error> = None;
    for attempt in 0..max_attempts {
        if attempt > 0 {
            thread::sleep(Duration::from_secs(backoff << (attempt - 1)));
        }
        match client.get(url).header(USER_AGENT, "Mozilla/5.0").send() {
            Ok(resp) => {
                let status = resp.status();
                match resp.text() {
                    Ok(body) if status.is_success() => return Ok(body),
                    Ok(body) => {
                        let snippet: String = body.trim().chars().take(200).collect();
                        last_error = Some(anyhow::anyhow!("http {status}: {snippet}"));
                    }
                    Err(err) => {
                        last_error = Some(anyhow::Error::new(err).context("failed reading body"));
                    }
                }
            }
            Err(err) => last_error = Some(anyhow::Error::new(err).context("request failed")),
        }
    }

    Err(last_error
        .unwrap_or_else(|| anyhow::anyhow!("request failed"))
        .context(format!("giving up on {url} after {max_attempts} attempts")))
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
