//! Horoscope Service — turns a (sign, period) request into a complete horoscope.
//!
//! Flow: validate sign → build prompt → one LLM call → parse reply.
//!
//! Only validation and upstream failures reach the caller. A reply that cannot be
//! parsed into four non-blank sections is replaced by [`HoroscopeResult::fallback`].

use std::sync::{Arc, LazyLock};

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::horoscope::models::{HoroscopeRequest, HoroscopeResult};
use crate::horoscope::prompts;
use crate::llm_client::ChatCompletion;

pub const MISSING_SIGN_MESSAGE: &str = "Знак зодиака обязателен";

// Greedy: first '{' through last '}', across newlines.
static EMBEDDED_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("embedded object pattern is valid"));

#[derive(Debug, Error)]
enum ParseError {
    #[error("invalid horoscope JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("section '{0}' is blank")]
    BlankField(&'static str),
}

#[derive(Clone)]
pub struct HoroscopeService {
    llm: Arc<dyn ChatCompletion>,
}

impl HoroscopeService {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self { llm }
    }

    pub async fn generate(&self, request: &HoroscopeRequest) -> Result<HoroscopeResult, AppError> {
        let sign = request
            .sign()
            .ok_or_else(|| AppError::Validation(MISSING_SIGN_MESSAGE.to_string()))?;
        let period = request.period();

        info!(%sign, ?period, "Generating horoscope");

        let prompt = prompts::build(prompts::sign_label(&sign), period);
        let completion = self.llm.complete(prompt.system, &prompt.user).await?;

        match parse_completion(&completion) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(
                    %sign,
                    completion_length = completion.len(),
                    "Could not parse horoscope reply, serving fallback: {e}"
                );
                Ok(HoroscopeResult::fallback())
            }
        }
    }
}

/// Embedded `{...}` span first; the whole text only when no span exists.
fn parse_completion(text: &str) -> Result<HoroscopeResult, ParseError> {
    let candidate = EMBEDDED_OBJECT
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(text);

    let result: HoroscopeResult = serde_json::from_str(candidate)?;

    match result.first_blank_field() {
        Some(field) => Err(ParseError::BlankField(field)),
        None => Ok(result),
    }
}
