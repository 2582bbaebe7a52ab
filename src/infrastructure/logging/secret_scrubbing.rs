use regex::Regex;
use std::fmt;

/// Redacts API keys and tokens from text before it is logged
#[derive(Clone)]
pub struct SecretScrubber {
    google_key_pattern: Regex,
    token_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // Google API keys: AIza followed by the key body
            google_key_pattern: Regex::new(r"AIza[0-9A-Za-z_\-]{10,}").expect("valid regex"),
            // Generic key/value pairs
            token_pattern: Regex::new(
                r#"["']?(?:api_key|apikey|apiKey|token|secret)["']?\s*[:=]\s*["']?([a-zA-Z0-9\-_\.]{8,})["']?"#,
            )
            .expect("valid regex"),
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("valid regex"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .google_key_pattern
            .replace_all(message, "[API_KEY_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .token_pattern
            .replace_all(&scrubbed, |caps: &regex::Captures| {
                let full_match = &caps[0];
                if let Some(colon_pos) = full_match.find(':') {
                    format!("{}:[REDACTED]", &full_match[..colon_pos])
                } else if let Some(eq_pos) = full_match.find('=') {
                    format!("{}=[REDACTED]", &full_match[..eq_pos])
                } else {
                    "[REDACTED]".to_string()
                }
            })
            .to_string();
        scrubbed
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
