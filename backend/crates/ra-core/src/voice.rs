//! Voice-name classification.

const GOOGLE_NATIVE_PREFIX: &str = "Google ";
const GOOGLE_TRANSLATE_PREFIX: &str = "GoogleTranslate ";
const AMAZON_POLLY_PREFIX: &str = "Amazon ";

pub fn is_google_native(voice_name: &str) -> bool {
    voice_name.starts_with(GOOGLE_NATIVE_PREFIX)
}

pub fn is_google_translate(voice_name: &str) -> bool {
    voice_name.starts_with(GOOGLE_TRANSLATE_PREFIX)
}

pub fn is_amazon_polly(voice_name: &str) -> bool {
    voice_name.starts_with(AMAZON_POLLY_PREFIX)
}

/// Voices synthesized by a remote service rather than the local engine.
pub fn is_remote_voice(voice_name: &str) -> bool {
    is_amazon_polly(voice_name) || is_google_translate(voice_name)
}

/// Voices that draw on the billing balance.
pub fn is_premium_voice(voice_name: &str) -> bool {
    is_amazon_polly(voice_name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceKind {
    GoogleNative,
    GoogleTranslate,
    AmazonPolly,
    Other,
}

impl VoiceKind {
    pub fn classify(voice_name: &str) -> Self {
        if is_google_native(voice_name) {
            Self::GoogleNative
        } else if is_google_translate(voice_name) {
            Self::GoogleTranslate
        } else if is_amazon_polly(voice_name) {
            Self::AmazonPolly
        } else {
            Self::Other
        }
    }

    pub fn is_remote(self) -> bool {
        matches!(self, Self::GoogleTranslate | Self::AmazonPolly)
    }

    pub fn is_premium(self) -> bool {
        self == Self::AmazonPolly
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoogleNative => "google-native",
            Self::GoogleTranslate => "google-translate",
            Self::AmazonPolly => "amazon-polly",
            Self::Other => "other",
        }
    }
}

/// A voice language tag split into its primary language and first subtag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLang {
    pub lang: String,
    pub rest: Option<String>,
}

/// Lowercases `tag`, treats `_` as `-` and splits off the first subtag.
///
/// Only the first two tokens are kept, so `"en-US-x"` yields `us` as the rest.
pub fn parse_lang(tag: &str) -> ParsedLang {
    let normalized = tag.to_lowercase().replace('_', "-");
    let mut tokens = normalized.split('-');
    ParsedLang {
        lang: tokens.next().unwrap_or_default().to_string(),
        rest: tokens.next().map(str::to_string),
    }
}
