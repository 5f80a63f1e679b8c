// LLM prompt constants for horoscope generation.

use crate::horoscope::models::Period;
use crate::zodiac::ZodiacSign;

/// Astrologer persona. Pushes for specific, confident predictions over generic advice.
pub const HOROSCOPE_SYSTEM: &str = "Вы опытный и мистический астролог с глубоким знанием \
    знаков зодиака и небесных влияний. Предоставляйте проницательные, персонализированные \
    гороскопы, которые кажутся подлинными и значимыми. Ваш тон должен быть мудрым, слегка \
    таинственным и обнадеживающим. Избегайте общих советов и сосредоточьтесь на конкретных, \
    уверенных прогнозах, связанных со знаком зодиака.";

/// Horoscope prompt template. Replace: {sign}, {timeframe}
pub const HOROSCOPE_PROMPT_TEMPLATE: &str = r#"Составьте подробный гороскоп для знака {sign} на {timeframe}.

Верните ТОЛЬКО валидный JSON-объект ровно с четырьмя строковыми ключами:
{
  "general": "Общий прогноз (2-3 предложения)",
  "love": "Любовь и отношения (2-3 предложения)",
  "work": "Карьера и работа (2-3 предложения)",
  "health": "Здоровье и благополучие (2-3 предложения)"
}

ПРАВИЛА:
1. Каждый раздел должен опираться на черты знака {sign} и текущие астрологические влияния
2. Будьте конкретны и проницательны, избегайте общих утверждений
3. Никакого текста до или после JSON-объекта
4. Не используйте markdown и блоки кода
5. Пишите на русском языке"#;

/// A ready-to-send system + user prompt pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Human-facing horizon phrase, slotted after "на".
pub fn timeframe(period: Period) -> &'static str {
    match period {
        Period::Daily => "завтра",
        Period::Weekly => "неделю",
    }
}

/// Name shown to the model: the localized name for a known sign, otherwise the
/// caller's text unchanged.
pub fn sign_label(raw: &str) -> &str {
    raw.parse::<ZodiacSign>()
        .map(ZodiacSign::display_name)
        .unwrap_or(raw)
}

pub fn build(sign_label: &str, period: Period) -> Prompt {
    let user = HOROSCOPE_PROMPT_TEMPLATE
        .replace("{sign}", sign_label)
        .replace("{timeframe}", timeframe(period));

    Prompt {
        system: HOROSCOPE_SYSTEM,
        user,
    }
}
