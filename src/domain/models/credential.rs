use std::fmt;

/// Characters shown at the start of a masked preview.
const PREVIEW_HEAD: usize = 10;
/// Characters shown at the end of a masked preview.
const PREVIEW_TAIL: usize = 4;

/// An API key for a named provider.
///
/// The value is opaque: no format validation is done beyond presence.
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    provider: String,
    value: String,
}

impl Credential {
    /// Build a credential, returning `None` for an empty value.
    pub fn new(provider: impl Into<String>, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            provider: provider.into(),
            value,
        })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The full secret, for embedding into the generated file only.
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Display form of the key: first 10 and last 4 characters around `...`.
    ///
    /// Keys shorter than 14 characters are fully masked with one `*` per
    /// character so the preview never reveals most of a short key.
    pub fn masked_preview(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() < PREVIEW_HEAD + PREVIEW_TAIL {
            return "*".repeat(chars.len());
        }

        let head: String = chars[..PREVIEW_HEAD].iter().collect();
        let tail: String = chars[chars.len() - PREVIEW_TAIL..].iter().collect();
        format!("{head}...{tail}")
    }

    /// True when the value would not survive as a single-quoted TS literal.
    pub fn needs_escaping(&self) -> bool {
        self.value
            .chars()
            .any(|c| matches!(c, '\'' | '\\' | '\n' | '\r'))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("value", &self.masked_preview())
            .finish()
    }
}
