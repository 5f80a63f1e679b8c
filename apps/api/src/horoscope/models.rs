use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Time horizon of a horoscope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    Daily,
    #[default]
    Weekly,
}

impl Period {
    /// Only the exact string `"daily"` selects the daily horizon; any other
    /// value, of any JSON type, or no value at all, is weekly.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == "daily" => Period::Daily,
            _ => Period::Weekly,
        }
    }
}

/// Request body for `POST /api/horoscope`.
///
/// Both fields are kept as raw JSON so that odd client input never turns into
/// a decode error; [`HoroscopeRequest::sign`] and [`HoroscopeRequest::period`]
/// interpret them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoroscopeRequest {
    #[serde(default, rename = "sign")]
    pub raw_sign: Option<Value>,
    #[serde(default, rename = "period")]
    pub raw_period: Option<Value>,
}

impl HoroscopeRequest {
    #[cfg(test)]
    pub fn new(sign: Option<&str>, period: Period) -> Self {
        let period = match period {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
        };
        Self {
            raw_sign: sign.map(|s| Value::String(s.to_string())),
            raw_period: Some(Value::String(period.to_string())),
        }
    }

    /// Sign text, trimmed. `None` when the sign is absent, blank or falsy
    /// (`null`, `false`, `0`). Numbers and `true` are taken as their JSON text.
    pub fn sign(&self) -> Option<String> {
        match self.raw_sign.as_ref()? {
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }

    pub fn period(&self) -> Period {
        Period::from_value(self.raw_period.as_ref())
    }
}

/// A complete four-section horoscope. Every field is non-blank once it leaves
/// the service, whether parsed from the model or taken from [`HoroscopeResult::fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoroscopeResult {
    pub general: String,
    pub love: String,
    pub work: String,
    pub health: String,
}

pub const FALLBACK_GENERAL: &str =
    "Космическая сеть в настоящее время выстраивается для вас таинственным образом.";
pub const FALLBACK_LOVE: &str =
    "Небесные связи указывают на интересные события в ваших отношениях.";
pub const FALLBACK_WORK: &str =
    "Цифровое созвездие указывает на потенциал роста в вашей карьере.";
pub const FALLBACK_HEALTH: &str =
    "Энергетические потоки космической сети поддерживают ваше благополучие в это время.";

impl HoroscopeResult {
    /// Placeholder served when the model's reply cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            general: FALLBACK_GENERAL.to_string(),
            love: FALLBACK_LOVE.to_string(),
            work: FALLBACK_WORK.to_string(),
            health: FALLBACK_HEALTH.to_string(),
        }
    }

    /// Name of the first blank section, if any.
    pub fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("general", &self.general),
            ("love", &self.love),
            ("work", &self.work),
            ("health", &self.health),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
