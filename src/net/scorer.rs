use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{ScoreError, ScoreResult};
use crate::score::Score;

/// Anything that can turn a post into a [`Score`].
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> ScoreResult<Score>;
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ScoreResponse {
    score: f64,
}

/// Blocking client for the remote scoring endpoint.
///
/// Sends `POST {endpoint}` with `{"text": ...}` and expects `{"score": n}`
/// with `n` in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ScoringClient {
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl ScoringClient {
    pub fn new(endpoint: &str, timeout: Duration) -> ScoreResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("cringe-detector/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub fn from_config(config: &Config) -> ScoreResult<Self> {
        Self::new(&config.endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Scorer for ScoringClient {
    fn score(&self, text: &str) -> ScoreResult<Score> {
        if text.is_empty() {
            return Err(ScoreError::EmptyText);
        }

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(&ScoreRequest { text })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let parsed: ScoreResponse =
            serde_json::from_str(&body).map_err(|e| ScoreError::Decode(e.to_string()))?;

        log::debug!("Raw score {} from {}", parsed.score, self.endpoint);
        Score::from_raw(parsed.score).ok_or(ScoreError::NonFinite)
    }
}
